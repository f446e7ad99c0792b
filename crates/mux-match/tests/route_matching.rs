//! End-to-end tests: routes files compiled into matcher sets and evaluated
//! against hyper requests.

use hyper::{HeaderMap, Request};
use mux_match::config::RouteConfig;
use mux_match::{
    HeaderMatcher, HeaderRegexMatcher, MatchError, Matcher, MatcherFn, Matchers, PathMatcher,
    PathRegexMatcher, PathTemplate, Rank, RequestHead, SchemeMatcher,
};
use std::io::Write;
use std::sync::Arc;

const ROUTES_YAML: &str = r##"
routes:
  - name: user-profile
    path: "/users/:string/profile"
    schemes: [HTTPS]
  - name: user-by-id
    path: "/users/:number"
  - name: traced-api
    path: "#/api/v[0-9]+/.*#"
    headersRegexp: ["X-Trace", "^[0-9]+$"]
  - name: versioned
    path: /status
    headers: ["X-Api-Version", "2"]
"##;

fn matching_routes(config: &RouteConfig, req: &RequestHead<'_>) -> Vec<String> {
    config
        .compile()
        .unwrap()
        .into_iter()
        .filter(|route| route.matches(req))
        .map(|route| route.name)
        .collect()
}

#[test]
fn test_routes_file_yaml() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(ROUTES_YAML.as_bytes()).unwrap();

    let config = RouteConfig::from_file(file.path()).unwrap();
    let headers = HeaderMap::new();

    assert_eq!(
        matching_routes(
            &config,
            &RequestHead::new("https", "/users/alice/profile", &headers)
        ),
        vec!["user-profile"]
    );
    assert!(matching_routes(
        &config,
        &RequestHead::new("http", "/users/alice/profile", &headers)
    )
    .is_empty());
    assert_eq!(
        matching_routes(&config, &RequestHead::new("http", "/users/42", &headers)),
        vec!["user-by-id"]
    );
}

#[test]
fn test_routes_file_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{"routes": [{"name": "health", "path": "/health", "schemes": ["http"]}]}"#,
    )
    .unwrap();

    let config = RouteConfig::from_file(file.path()).unwrap();
    assert_eq!(config.routes[0].name, "health");
}

#[test]
fn test_missing_routes_file() {
    let err = RouteConfig::from_file("/nonexistent/routes.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read routes file"));
}

#[test]
fn test_header_routes_with_hyper_request() {
    let config = RouteConfig::from_yaml(ROUTES_YAML).unwrap();

    let req = Request::builder()
        .uri("https://example.com/api/v2/orders?limit=5")
        .header("x-trace", "12345")
        .body(())
        .unwrap();
    assert_eq!(
        matching_routes(&config, &RequestHead::from_request(&req)),
        vec!["traced-api"]
    );

    let req = Request::builder()
        .uri("/api/v2/orders")
        .header("X-Trace", "abc")
        .body(())
        .unwrap();
    assert!(matching_routes(&config, &RequestHead::from_request(&req)).is_empty());

    let req = Request::builder()
        .uri("/status")
        .header("X-API-VERSION", "2")
        .body(())
        .unwrap();
    assert_eq!(
        matching_routes(&config, &RequestHead::from_request(&req)),
        vec!["versioned"]
    );
}

#[test]
fn test_literal_and_placeholder_free_template_agree() {
    let literal = PathMatcher::new("/docs/intro");
    let template = PathTemplate::new("/docs/intro").unwrap();
    let headers = HeaderMap::new();

    for path in ["/docs/intro", "/docs", "/docs/intro/", "/docs/intro/more", "/x/docs/intro"] {
        let req = RequestHead::new("http", path, &headers);
        assert_eq!(literal.matches(&req), template.matches(&req), "{path}");
    }
}

#[test]
fn test_all_compiled_paths_are_anchored() {
    let headers = HeaderMap::new();
    let req = RequestHead::new("http", "/ab", &headers);

    assert!(!PathRegexMatcher::new("/a").unwrap().matches(&req));
    assert!(!PathRegexMatcher::new("#/a#").unwrap().matches(&req));
    assert!(!PathTemplate::new("/a").unwrap().matches(&req));
    assert!(!PathTemplate::new("/:string").unwrap().matches(&RequestHead::new(
        "http",
        "/ab/c",
        &headers
    )));
}

#[test]
fn test_rank_sort_of_every_variant() {
    let mut matchers = Matchers::new();
    matchers.push(SchemeMatcher::new(&["https"]));
    matchers.push(PathRegexMatcher::new("#/a/.*#").unwrap());
    matchers.push(HeaderRegexMatcher::new(&["Accept", "json"]).unwrap());
    matchers.push(PathMatcher::new("/a"));
    matchers.push(MatcherFn::new(|req| !req.path.is_empty()));
    matchers.push(HeaderMatcher::new(&["Accept", ""]).unwrap());
    matchers.push(PathTemplate::new("/a/:number").unwrap());

    matchers.sort();
    let ranks = matchers.ranks();
    assert_eq!(&ranks[..3], &[Rank::Any; 3]);
    assert_eq!(&ranks[3..6], &[Rank::Path; 3]);
    assert_eq!(ranks[6], Rank::Scheme);
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        HeaderMatcher::new(&["A", "1", "B"]),
        Err(MatchError::OddPairs(3))
    ));
    assert!(matches!(
        PathRegexMatcher::new("#[a-#"),
        Err(MatchError::InvalidPattern { .. })
    ));
    assert!(matches!(
        PathTemplate::new("/files/:name("),
        Err(MatchError::InvalidPattern { .. })
    ));
}

#[test]
fn test_matchers_shared_across_threads() {
    let template = Arc::new(PathTemplate::new("/jobs/:number").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let template = Arc::clone(&template);
            std::thread::spawn(move || {
                let headers = HeaderMap::new();
                let path = format!("/jobs/{i}");
                template.matches(&RequestHead::new("http", &path, &headers))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
