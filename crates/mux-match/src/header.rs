//! Header matchers.
//!
//! Both variants are configured with alternating name/value strings and
//! require every configured header to be present with a satisfying value.

use crate::error::Result;
use crate::matcher::{Matcher, Rank};
use crate::pairs::{exact_map, match_map, regex_map, ComparisonMap};
use crate::request::RequestHead;

/// Matches headers by exact value.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    headers: ComparisonMap,
}

impl HeaderMatcher {
    /// Build from `[name, value, name, value, ...]`. An empty value only
    /// requires the header to be present.
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        Ok(Self {
            headers: exact_map(pairs)?,
        })
    }
}

impl Matcher for HeaderMatcher {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        match_map(&self.headers, req.headers, true)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}

/// Matches headers against regular expressions.
///
/// Patterns are not anchored: `"json"` matches `application/json`.
#[derive(Debug, Clone)]
pub struct HeaderRegexMatcher {
    headers: ComparisonMap,
}

impl HeaderRegexMatcher {
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        Ok(Self {
            headers: regex_map(pairs)?,
        })
    }
}

impl Matcher for HeaderRegexMatcher {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        match_map(&self.headers, req.headers, true)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}
