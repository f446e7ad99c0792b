//! The matcher capability shared by every request predicate.
//!
//! A route carries zero or more matchers. Each one answers a single question
//! about a request (`matches`) and reports how specific it is (`rank`), so a
//! router can evaluate the cheap, general predicates before the specific ones
//! or order them consistently for diagnostics.

use crate::request::RequestHead;
use serde::Serialize;
use std::fmt;

/// Priority class of a matcher variant.
///
/// Only the ordering is meaningful: `Any < Path < Scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Headers and custom predicates.
    Any,
    /// Literal, regex and template paths.
    Path,
    /// URL schemes.
    Scheme,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Any => "any",
            Rank::Path => "path",
            Rank::Scheme => "scheme",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request predicate.
///
/// Implementations are immutable once built: `matches` only reads the
/// matcher's own state and the request view. `rank` is a constant per
/// variant, never per instance.
pub trait Matcher: Send + Sync + fmt::Debug {
    fn matches(&self, req: &RequestHead<'_>) -> bool;

    fn rank(&self) -> Rank;
}
