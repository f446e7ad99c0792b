//! Construction errors for matchers.
//!
//! Matching itself never fails; every error here is raised while a matcher is
//! being built, before the route it belongs to can be registered.

/// Error raised when a matcher cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("expected name/value pairs, got an odd number of values ({0})")]
    OddPairs(usize),

    #[error("invalid regular expression {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid header name {name:?}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: hyper::header::InvalidHeaderName,
    },
}

impl MatchError {
    pub(crate) fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        MatchError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

pub type Result<T, E = MatchError> = std::result::Result<T, E>;
