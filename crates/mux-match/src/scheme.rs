//! URL scheme matcher.

use crate::matcher::{Matcher, Rank};
use crate::request::RequestHead;
use std::collections::HashSet;

/// Matches the request scheme against a set of accepted schemes.
///
/// Schemes are lower-cased when the matcher is built. The request scheme is
/// compared as given, so it must already be lower-case to match.
#[derive(Debug, Clone, Default)]
pub struct SchemeMatcher {
    schemes: HashSet<String>,
}

impl SchemeMatcher {
    pub fn new<S: AsRef<str>>(schemes: &[S]) -> Self {
        Self {
            schemes: schemes.iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }
}

impl Matcher for SchemeMatcher {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        self.schemes.contains(req.scheme)
    }

    fn rank(&self) -> Rank {
        Rank::Scheme
    }
}
