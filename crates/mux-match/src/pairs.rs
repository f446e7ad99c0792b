//! Flat name/value lists and the comparisons built from them.
//!
//! Header matchers are configured with a variadic list of alternating names
//! and values (`["X-Api-Version", "2", "Accept", "json"]`). This module
//! validates such lists, turns them into a `name -> Comparison` map and
//! evaluates that map against a request's headers.

use crate::error::{MatchError, Result};
use hyper::header::HeaderName;
use hyper::HeaderMap;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

/// A single value test: exact string equality or a compiled pattern.
#[derive(Debug, Clone)]
pub enum Comparison {
    /// Exact equality. An empty string only requires the field to be present.
    Exact(String),
    /// Unanchored regex search; anchors belong in the pattern itself.
    Pattern(Arc<Regex>),
}

impl Comparison {
    pub fn exact(value: impl Into<String>) -> Self {
        Comparison::Exact(value.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| MatchError::pattern(pattern, e))?;
        Ok(Comparison::Pattern(Arc::new(regex)))
    }

    /// Check a candidate value against this comparison.
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Comparison::Exact(expected) => expected.is_empty() || value == expected,
            Comparison::Pattern(regex) => regex.is_match(value),
        }
    }
}

/// Header name to comparison. Names are normalized to lowercase by
/// `HeaderName`, so lookups are case-insensitive.
pub type ComparisonMap = HashMap<HeaderName, Comparison>;

/// Fail if `pairs` cannot be split into name/value pairs.
pub fn check_even_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<()> {
    if pairs.len() % 2 != 0 {
        return Err(MatchError::OddPairs(pairs.len()));
    }
    Ok(())
}

/// Build a map of exact-string comparisons.
pub fn exact_map<S: AsRef<str>>(pairs: &[S]) -> Result<ComparisonMap> {
    build_map(pairs, |value| Ok(Comparison::exact(value)))
}

/// Build a map of pattern comparisons, compiling every value.
pub fn regex_map<S: AsRef<str>>(pairs: &[S]) -> Result<ComparisonMap> {
    build_map(pairs, Comparison::pattern)
}

fn build_map<S, F>(pairs: &[S], compare: F) -> Result<ComparisonMap>
where
    S: AsRef<str>,
    F: Fn(&str) -> Result<Comparison>,
{
    check_even_pairs(pairs)?;

    let mut map = ComparisonMap::with_capacity(pairs.len() / 2);
    for pair in pairs.chunks_exact(2) {
        let name = pair[0].as_ref();
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
            MatchError::InvalidHeaderName {
                name: name.to_string(),
                source,
            }
        })?;
        // Later pairs win, like repeated keys in a map literal.
        map.insert(name, compare(pair[1].as_ref())?);
    }
    Ok(map)
}

/// Evaluate `map` against the request headers.
///
/// With `require_all`, every configured name must have at least one actual
/// value satisfying its comparison. Otherwise one satisfied name is enough.
/// A configured name absent from the request never matches.
pub fn match_map(map: &ComparisonMap, headers: &HeaderMap, require_all: bool) -> bool {
    let satisfied = |(name, comparison): (&HeaderName, &Comparison)| {
        headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| comparison.matches(v))
    };

    if require_all {
        map.iter().all(satisfied)
    } else {
        map.iter().any(satisfied)
    }
}
