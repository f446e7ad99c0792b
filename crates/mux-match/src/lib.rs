//! Request matchers for HTTP routers.
//!
//! A route is guarded by zero or more [`Matcher`]s. Each matcher answers one
//! question about a request and reports a [`Rank`] so the matchers of a route
//! can be ordered consistently:
//!
//! | matcher                | accepts when                                | rank     |
//! |------------------------|---------------------------------------------|----------|
//! | [`HeaderMatcher`]      | every configured header has an equal value  | `any`    |
//! | [`HeaderRegexMatcher`] | every configured header matches its pattern | `any`    |
//! | [`MatcherFn`]          | the wrapped predicate returns `true`        | `any`    |
//! | [`PathMatcher`]        | the path equals the literal                 | `path`   |
//! | [`PathRegexMatcher`]   | the whole path matches the regex            | `path`   |
//! | [`PathTemplate`]       | the whole path matches the template         | `path`   |
//! | [`SchemeMatcher`]      | the scheme is in the configured set         | `scheme` |
//!
//! All matchers are compiled when they are built and are read-only afterwards,
//! so they can be shared between threads and evaluated concurrently.
//!
//! # Example
//!
//! ```
//! use hyper::HeaderMap;
//! use mux_match::{Matchers, PathTemplate, Rank, RequestHead, SchemeMatcher};
//!
//! let mut matchers = Matchers::new();
//! matchers.push(SchemeMatcher::new(&["HTTPS"]));
//! matchers.push(PathTemplate::new("/users/:number").unwrap());
//! matchers.sort();
//! assert_eq!(matchers.ranks(), vec![Rank::Path, Rank::Scheme]);
//!
//! let headers = HeaderMap::new();
//! assert!(matchers.matches_all(&RequestHead::new("https", "/users/42", &headers)));
//! assert!(!matchers.matches_all(&RequestHead::new("https", "/users/bob", &headers)));
//! ```

pub mod config;
pub mod pairs;
pub mod path;

mod custom;
mod error;
mod header;
mod matcher;
mod matchers;
mod request;
mod scheme;

pub use custom::MatcherFn;
pub use error::{MatchError, Result};
pub use header::{HeaderMatcher, HeaderRegexMatcher};
pub use matcher::{Matcher, Rank};
pub use matchers::Matchers;
pub use path::{
    compile_template, path_matcher, PathKind, PathMatcher, PathRegexMatcher, PathTemplate,
    Placeholder, TemplatePattern,
};
pub use request::RequestHead;
pub use scheme::SchemeMatcher;
