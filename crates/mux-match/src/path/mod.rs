//! Path matchers: literal, regular expression and typed template.
//!
//! Route paths use a small marker convention to pick the variant:
//!
//! - a path containing `#` is a regular expression (`#/api/v[0-9]+#`); the
//!   `#` characters are markers only and are stripped before compiling,
//! - a path containing `:` is a template (`/users/:number`),
//! - anything else is compared literally.
//!
//! Compiled paths are always anchored, so they match the whole request path.

mod template;

pub use template::{compile_template, PathTemplate, Placeholder, TemplatePattern};

use crate::error::{MatchError, Result};
use crate::matcher::{Matcher, Rank};
use crate::request::RequestHead;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wrap `source` so it can only match a whole path. The group keeps a
/// top-level alternation (`/a|/b`) inside the anchors.
pub(crate) fn anchor(source: &str) -> String {
    format!("^(?:{source})$")
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| MatchError::pattern(pattern, e))
}

/// Matches the request path byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    path: String,
}

impl PathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Matcher for PathMatcher {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        self.path == req.path
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}

/// Matches the request path against a user-supplied regular expression.
#[derive(Debug, Clone)]
pub struct PathRegexMatcher {
    regex: Regex,
}

impl PathRegexMatcher {
    /// Strip the `#` markers, anchor and compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        let source = anchor(&pattern.replace('#', ""));
        let regex = compile(&source)?;
        debug!(pattern, compiled = %source, "compiled path regex");
        Ok(Self { regex })
    }

    /// The anchored pattern, markers removed.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for PathRegexMatcher {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        self.regex.is_match(req.path)
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}

/// Which path matcher a route path string selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Literal,
    Regex,
    Template,
}

impl PathKind {
    pub fn classify(path: &str) -> Self {
        if path.contains('#') {
            PathKind::Regex
        } else if path.contains(':') {
            PathKind::Template
        } else {
            PathKind::Literal
        }
    }
}

/// Build the path matcher selected by `path`'s markers.
pub fn path_matcher(path: &str) -> Result<Box<dyn Matcher>> {
    Ok(match PathKind::classify(path) {
        PathKind::Literal => Box::new(PathMatcher::new(path)),
        PathKind::Regex => Box::new(PathRegexMatcher::new(path)?),
        PathKind::Template => Box::new(PathTemplate::new(path)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::HeaderMap;

    fn matches(m: &dyn Matcher, path: &str) -> bool {
        let headers = HeaderMap::new();
        m.matches(&RequestHead::new("http", path, &headers))
    }

    #[test]
    fn test_literal_path() {
        let m = PathMatcher::new("/api/users");
        assert!(matches(&m, "/api/users"));
        assert!(!matches(&m, "/api/users/"));
        assert!(!matches(&m, "/api/user"));
        assert!(!matches(&m, "/API/users"));
        assert_eq!(m.rank(), Rank::Path);
    }

    #[test]
    fn test_regex_path_strips_markers() {
        let m = PathRegexMatcher::new("#/api/v[0-9]+/users#").unwrap();
        assert_eq!(m.pattern(), "^(?:/api/v[0-9]+/users)$");
        assert!(matches(&m, "/api/v2/users"));
        assert!(!matches(&m, "/api/vx/users"));
        assert_eq!(m.rank(), Rank::Path);
    }

    #[test]
    fn test_regex_path_is_anchored() {
        let m = PathRegexMatcher::new("/a").unwrap();
        assert!(matches(&m, "/a"));
        assert!(!matches(&m, "/ab"));
        assert!(!matches(&m, "/b/a"));

        let m = PathRegexMatcher::new("/a|/b").unwrap();
        assert!(matches(&m, "/b"));
        assert!(!matches(&m, "/ab"));
        assert!(!matches(&m, "/a/b"));
    }

    #[test]
    fn test_regex_path_invalid() {
        let err = PathRegexMatcher::new("#/api/(v1#").unwrap_err();
        match err {
            MatchError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "^(?:/api/(v1)$"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(PathKind::classify("/about"), PathKind::Literal);
        assert_eq!(PathKind::classify("#/api/.*#"), PathKind::Regex);
        assert_eq!(PathKind::classify("/users/:number"), PathKind::Template);
        // Markers win over colons: the regex may contain `(?:...)`.
        assert_eq!(PathKind::classify("#/(?:a|b)#"), PathKind::Regex);
    }

    #[test]
    fn test_path_matcher_factory() {
        let literal = path_matcher("/about").unwrap();
        let regex = path_matcher("#/files/.+#").unwrap();
        let template = path_matcher("/users/:number").unwrap();

        assert!(matches(literal.as_ref(), "/about"));
        assert!(matches(regex.as_ref(), "/files/a/b.txt"));
        assert!(matches(template.as_ref(), "/users/9"));
        assert!(!matches(template.as_ref(), "/users/nine"));
    }
}
