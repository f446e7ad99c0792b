//! Ordered collection of matchers.

use crate::matcher::{Matcher, Rank};
use crate::request::RequestHead;
use tracing::trace;

/// The matchers attached to one route.
///
/// Exposes the `len` / `swap` / `less` triple a generic in-place sort needs,
/// where `less` compares ranks only. [`Matchers::sort`] orders by rank
/// ascending; matchers of equal rank end up in unspecified order.
#[derive(Debug, Default)]
pub struct Matchers {
    inner: Vec<Box<dyn Matcher>>,
}

impl Matchers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, matcher: impl Matcher + 'static) {
        self.inner.push(Box::new(matcher));
    }

    pub fn push_boxed(&mut self, matcher: Box<dyn Matcher>) {
        self.inner.push(matcher);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.inner.swap(i, j);
    }

    /// Whether the matcher at `i` ranks strictly below the one at `j`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.inner[i].rank() < self.inner[j].rank()
    }

    pub fn sort(&mut self) {
        self.inner.sort_unstable_by_key(|m| m.rank());
    }

    pub fn get(&self, index: usize) -> Option<&dyn Matcher> {
        self.inner.get(index).map(|m| m.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Matcher> {
        self.inner.iter().map(|m| m.as_ref())
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.iter().map(|m| m.rank()).collect()
    }

    /// Evaluate every matcher in stored order, stopping at the first miss.
    /// An empty collection accepts every request.
    pub fn matches_all(&self, req: &RequestHead<'_>) -> bool {
        self.iter().all(|m| {
            let matched = m.matches(req);
            trace!(rank = %m.rank(), matched, path = req.path, "evaluated matcher");
            matched
        })
    }
}

impl From<Vec<Box<dyn Matcher>>> for Matchers {
    fn from(inner: Vec<Box<dyn Matcher>>) -> Self {
        Self { inner }
    }
}

impl FromIterator<Box<dyn Matcher>> for Matchers {
    fn from_iter<I: IntoIterator<Item = Box<dyn Matcher>>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
