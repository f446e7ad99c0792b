//! Custom predicates.

use crate::matcher::{Matcher, Rank};
use crate::request::RequestHead;
use std::fmt;

/// Wraps a caller-supplied predicate as a [`Matcher`].
///
/// Custom predicates carry no structural priority and always rank as
/// [`Rank::Any`].
pub struct MatcherFn<F> {
    predicate: F,
}

impl<F> MatcherFn<F>
where
    F: Fn(&RequestHead<'_>) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> fmt::Debug for MatcherFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherFn").finish_non_exhaustive()
    }
}

impl<F> Matcher for MatcherFn<F>
where
    F: Fn(&RequestHead<'_>) -> bool + Send + Sync,
{
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        (self.predicate)(req)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}
