//! Validation of routes files.
//!
//! Files are inspected as untyped JSON values so that every problem can be
//! reported with its location, instead of stopping at the first error the
//! typed loader would hit. Patterns are compiled with the same code the
//! router uses, so a clean lint means the routes will load.

use crate::types::{LintIssue, LintOptions, LintResult};
use mux_match::pairs::{check_even_pairs, exact_map, regex_map};
use mux_match::{compile_template, MatchError, PathKind, PathRegexMatcher, PathTemplate};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

const KNOWN_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// Validate a complete routes document.
pub fn validate_routes(file: &Path, doc: &Value, result: &mut LintResult, options: &LintOptions) {
    let Some(routes) = doc.get("routes") else {
        result.add_issue(
            LintIssue::error("E003", "Missing required field: routes", file)
                .suggest("Add a top-level \"routes\" list"),
        );
        return;
    };
    let Some(routes) = routes.as_array() else {
        result.add_issue(LintIssue::error("E009", "'routes' must be a list", file).at("routes"));
        return;
    };

    let mut names = HashSet::new();
    for (idx, route) in routes.iter().enumerate() {
        validate_route(file, route, idx, &mut names, result, options);
        result.routes_checked += 1;
    }
}

/// Validate one entry of the `routes` list.
pub fn validate_route(
    file: &Path,
    route: &Value,
    idx: usize,
    names: &mut HashSet<String>,
    result: &mut LintResult,
    options: &LintOptions,
) {
    let location = format!("routes[{idx}]");

    match route.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {
            if !names.insert(name.to_string()) {
                result.add_issue(
                    LintIssue::error("E007", format!("Duplicate route name '{name}'"), file)
                        .at(format!("{location}.name")),
                );
            }
        }
        _ => result.add_issue(
            LintIssue::error("E003", "Route is missing a non-empty 'name'", file)
                .at(location.clone()),
        ),
    }

    let has_predicate = ["path", "schemes", "headers", "headersRegexp"]
        .iter()
        .any(|field| route.get(*field).is_some());
    if !has_predicate {
        result.add_issue(
            LintIssue::warning("W004", "Route has no predicates and matches every request", file)
                .at(location.clone())
                .suggest("Add a path, schemes, headers or headersRegexp"),
        );
    }

    if let Some(path) = route.get("path") {
        match path.as_str() {
            Some(path) => validate_path(file, path, &format!("{location}.path"), result),
            None => result.add_issue(
                LintIssue::error("E009", "'path' must be a string", file)
                    .at(format!("{location}.path")),
            ),
        }
    }

    if let Some(schemes) = string_list(file, route, "schemes", &location, result) {
        validate_schemes(file, &schemes, &format!("{location}.schemes"), result, options);
    }
    if let Some(pairs) = string_list(file, route, "headers", &location, result) {
        validate_header_pairs(file, &pairs, &format!("{location}.headers"), false, result);
    }
    if let Some(pairs) = string_list(file, route, "headersRegexp", &location, result) {
        validate_header_pairs(file, &pairs, &format!("{location}.headersRegexp"), true, result);
    }
}

/// Read `route[field]` as a list of strings, reporting anything else.
fn string_list<'a>(
    file: &Path,
    route: &'a Value,
    field: &str,
    location: &str,
    result: &mut LintResult,
) -> Option<Vec<&'a str>> {
    let value = route.get(field)?;
    let list = value
        .as_array()
        .and_then(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>());
    if list.is_none() {
        result.add_issue(
            LintIssue::error("E009", format!("'{field}' must be a list of strings"), file)
                .at(format!("{location}.{field}")),
        );
    }
    list
}

/// Validate a route path according to the kind its markers select.
pub fn validate_path(file: &Path, path: &str, location: &str, result: &mut LintResult) {
    match PathKind::classify(path) {
        PathKind::Literal => {
            if !path.starts_with('/') {
                result.add_issue(
                    LintIssue::warning("W005", format!("Path '{path}' does not start with '/'"), file)
                        .at(location),
                );
            }
        }
        PathKind::Regex => {
            let stripped = path.replace('#', "");
            if stripped.starts_with('^') || stripped.ends_with('$') {
                result.add_issue(
                    LintIssue::warning("W002", "Regex path is anchored automatically", file)
                        .at(location)
                        .suggest("Remove the leading '^' and trailing '$'"),
                );
            }
            if let Err(e) = PathRegexMatcher::new(path) {
                result.add_issue(
                    LintIssue::error("E005", format!("Invalid regex path: {e}"), file)
                        .at(location)
                        .suggest("Check regex syntax"),
                );
            }
        }
        PathKind::Template => {
            for token in compile_template(path).unrecognized {
                result.add_issue(
                    LintIssue::warning(
                        "W001",
                        format!("Unrecognized placeholder '{token}' is matched literally"),
                        file,
                    )
                    .at(location)
                    .suggest("Use :number or :string, or write the path as a #regex#"),
                );
            }
            if let Err(e) = PathTemplate::new(path) {
                result.add_issue(
                    LintIssue::error("E006", format!("Template compiles to an invalid pattern: {e}"), file)
                        .at(location),
                );
            }
        }
    }
}

fn validate_schemes(
    file: &Path,
    schemes: &[&str],
    location: &str,
    result: &mut LintResult,
    options: &LintOptions,
) {
    for (idx, scheme) in schemes.iter().enumerate() {
        let lower = scheme.to_lowercase();
        let known = KNOWN_SCHEMES.contains(&lower.as_str())
            || options.extra_schemes.iter().any(|s| s.eq_ignore_ascii_case(&lower));
        if !known {
            result.add_issue(
                LintIssue::warning("W003", format!("Unknown scheme '{scheme}'"), file)
                    .at(format!("{location}[{idx}]")),
            );
        }
    }
}

/// Validate a flat name/value list, reporting every bad pair.
pub fn validate_header_pairs(
    file: &Path,
    pairs: &[&str],
    location: &str,
    regex: bool,
    result: &mut LintResult,
) {
    if check_even_pairs(pairs).is_err() {
        result.add_issue(
            LintIssue::error(
                "E004",
                format!("Expected name/value pairs, got {} values", pairs.len()),
                file,
            )
            .at(location)
            .suggest("Every header name needs a value; use \"\" to only require presence"),
        );
        return;
    }

    for (idx, pair) in pairs.chunks_exact(2).enumerate() {
        let built = if regex {
            regex_map(pair).map(|_| ())
        } else {
            exact_map(pair).map(|_| ())
        };
        match built {
            Ok(()) => {}
            Err(MatchError::InvalidHeaderName { name, .. }) => result.add_issue(
                LintIssue::error("E008", format!("Invalid header name '{name}'"), file)
                    .at(format!("{location}[{}]", idx * 2)),
            ),
            Err(e) => result.add_issue(
                LintIssue::error("E005", format!("Invalid header pattern: {e}"), file)
                    .at(format!("{location}[{}]", idx * 2 + 1))
                    .suggest("Check regex syntax"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lint(doc: Value) -> LintResult {
        let mut result = LintResult::new();
        validate_routes(Path::new("routes.yaml"), &doc, &mut result, &LintOptions::default());
        result
    }

    #[test]
    fn test_clean_routes() {
        let result = lint(json!({
            "routes": [
                {"name": "a", "path": "/users/:number", "schemes": ["HTTPS"]},
                {"name": "b", "path": "#/api/v[0-9]+#", "headersRegexp": ["X-Trace", "^[0-9]+$"]},
                {"name": "c", "path": "/status", "headers": ["Accept", ""]}
            ]
        }));
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.routes_checked, 3);
    }

    #[test]
    fn test_missing_routes() {
        assert_eq!(lint(json!({})).codes(), vec!["E003"]);
        assert_eq!(lint(json!({"routes": 1})).codes(), vec!["E009"]);
    }

    #[test]
    fn test_route_name_checks() {
        let result = lint(json!({
            "routes": [
                {"name": "a", "path": "/a"},
                {"name": "a", "path": "/b"},
                {"path": "/c"}
            ]
        }));
        assert_eq!(result.codes(), vec!["E007", "E003"]);
        assert_eq!(result.issues[0].location.as_deref(), Some("routes[1].name"));
    }

    #[test]
    fn test_odd_header_pairs() {
        let result = lint(json!({
            "routes": [{"name": "a", "headers": ["X-Api-Version", "2", "Accept"]}]
        }));
        assert_eq!(result.codes(), vec!["E004"]);
    }

    #[test]
    fn test_bad_header_name_and_pattern() {
        let result = lint(json!({
            "routes": [{"name": "a", "headersRegexp": ["bad name", "x", "X-Trace", "[0-9"]}]
        }));
        assert_eq!(result.codes(), vec!["E008", "E005"]);
        assert_eq!(
            result.issues[1].location.as_deref(),
            Some("routes[0].headersRegexp[3]")
        );
    }

    #[test]
    fn test_unrecognized_placeholder_warns() {
        let result = lint(json!({
            "routes": [{"name": "a", "path": "/users/:id/posts/:number"}]
        }));
        assert_eq!(result.codes(), vec!["W001"]);
        assert!(result.issues[0].message.contains(":id"));
        assert!(!result.has_errors());
        assert!(result.failed(true));
        assert!(!result.failed(false));
    }

    #[test]
    fn test_placeholder_before_final_slash_warns() {
        let result = lint(json!({"routes": [{"name": "a", "path": "/users/:number/"}]}));
        assert_eq!(result.codes(), vec!["W001"]);
        assert!(result.issues[0].message.contains(":number/"));
    }

    #[test]
    fn test_template_with_invalid_pattern() {
        let result = lint(json!({"routes": [{"name": "a", "path": "/files/:name("}]}));
        assert_eq!(result.codes(), vec!["W001", "E006"]);
    }

    #[test]
    fn test_regex_path_checks() {
        let result = lint(json!({
            "routes": [
                {"name": "a", "path": "#^/a$#"},
                {"name": "b", "path": "#/(b#"}
            ]
        }));
        assert_eq!(result.codes(), vec!["W002", "E005"]);
    }

    #[test]
    fn test_scheme_and_shape_checks() {
        let result = lint(json!({
            "routes": [
                {"name": "a", "schemes": ["gopher"]},
                {"name": "b", "schemes": "https"},
                {"name": "c"},
                {"name": "d", "path": "relative"}
            ]
        }));
        assert_eq!(result.codes(), vec!["W003", "E009", "W004", "W005"]);
    }

    #[test]
    fn test_extra_schemes() {
        let mut result = LintResult::new();
        let options = LintOptions {
            extra_schemes: vec!["grpc".to_string()],
        };
        let doc = json!({"routes": [{"name": "a", "schemes": ["GRPC"]}]});
        validate_routes(Path::new("routes.yaml"), &doc, &mut result, &options);
        assert!(result.issues.is_empty());
    }
}
