//! Borrowed view of the request fields matchers are allowed to read.

use hyper::http::request::Parts;
use hyper::{HeaderMap, Request};

/// The scheme, path and headers of an incoming request.
///
/// Matchers only ever read through this view, so evaluating one can never
/// mutate the request. The scheme is compared verbatim; callers that want
/// case-insensitive scheme matching pass it already lower-cased.
#[derive(Debug, Clone, Copy)]
pub struct RequestHead<'a> {
    pub scheme: &'a str,
    pub path: &'a str,
    pub headers: &'a HeaderMap,
}

impl<'a> RequestHead<'a> {
    pub fn new(scheme: &'a str, path: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            scheme,
            path,
            headers,
        }
    }

    /// Build a view over a hyper request. Origin-form URIs carry no scheme,
    /// in which case the scheme is empty.
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        Self {
            scheme: req.uri().scheme_str().unwrap_or(""),
            path: req.uri().path(),
            headers: req.headers(),
        }
    }

    pub fn from_parts(parts: &'a Parts) -> Self {
        Self {
            scheme: parts.uri.scheme_str().unwrap_or(""),
            path: parts.uri.path(),
            headers: &parts.headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_absolute_uri() {
        let req = Request::builder()
            .uri("https://example.com/users/42?page=1")
            .header("X-Trace", "7")
            .body(())
            .unwrap();

        let head = RequestHead::from_request(&req);
        assert_eq!(head.scheme, "https");
        assert_eq!(head.path, "/users/42");
        assert_eq!(head.headers.get("x-trace").unwrap(), "7");
    }

    #[test]
    fn test_from_parts_origin_form() {
        let (parts, _) = Request::builder()
            .uri("/items/abc")
            .body(())
            .unwrap()
            .into_parts();

        let head = RequestHead::from_parts(&parts);
        assert_eq!(head.scheme, "");
        assert_eq!(head.path, "/items/abc");
    }
}
