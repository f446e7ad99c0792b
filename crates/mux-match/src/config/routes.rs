//! Route definitions and their compiled matcher sets.

use crate::error::Result;
use crate::header::{HeaderMatcher, HeaderRegexMatcher};
use crate::matchers::Matchers;
use crate::path::path_matcher;
use crate::request::RequestHead;
use crate::scheme::SchemeMatcher;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One route as written in a routes file.
///
/// Header lists are flat alternating name/value sequences, exactly as passed
/// to [`HeaderMatcher::new`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    pub name: String,

    /// Literal path, `#regex#` or template with `:number` / `:string`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers_regexp: Vec<String>,
}

impl RouteSpec {
    /// Whether the route configures at least one predicate.
    pub fn has_predicates(&self) -> bool {
        self.path.is_some()
            || !self.schemes.is_empty()
            || !self.headers.is_empty()
            || !self.headers_regexp.is_empty()
    }

    /// Build the route's matchers, sorted by rank.
    pub fn compile(&self) -> Result<CompiledRoute> {
        let mut matchers = Matchers::new();

        if let Some(path) = &self.path {
            matchers.push_boxed(path_matcher(path)?);
        }
        if !self.schemes.is_empty() {
            matchers.push(SchemeMatcher::new(&self.schemes));
        }
        if !self.headers.is_empty() {
            matchers.push(HeaderMatcher::new(&self.headers)?);
        }
        if !self.headers_regexp.is_empty() {
            matchers.push(HeaderRegexMatcher::new(&self.headers_regexp)?);
        }
        matchers.sort();

        debug!(route = %self.name, matchers = matchers.len(), "compiled route");
        Ok(CompiledRoute {
            name: self.name.clone(),
            matchers,
        })
    }
}

/// A route whose matchers are compiled and ordered.
#[derive(Debug)]
pub struct CompiledRoute {
    pub name: String,
    pub matchers: Matchers,
}

impl CompiledRoute {
    pub fn matches(&self, req: &RequestHead<'_>) -> bool {
        self.matchers.matches_all(req)
    }
}
