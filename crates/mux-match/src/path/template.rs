//! Path templates with typed placeholders.
//!
//! A template such as `/users/:number/profile` is rewritten into an anchored
//! regular expression in a single left-to-right scan:
//!
//! - `:` opens a variable, except at the very start of the template.
//! - The variable closes at the next `/` or at the end of the template. A
//!   closing `/` that is the template's last byte belongs to the token, so
//!   `/users/:number/` is left as literal text.
//! - If the token between those positions is a known keyword it is replaced
//!   by that keyword's fragment; otherwise it is left as literal text.
//!
//! | keyword   | fragment        | matches                 |
//! |-----------|-----------------|-------------------------|
//! | `:number` | `([0-9]+)`      | one or more ASCII digits  |
//! | `:string` | `([a-zA-Z]+)`   | one or more ASCII letters |
//!
//! Unrecognized tokens such as `:id` are passed through unchanged (colon
//! included), so the resulting pattern matches them literally. They are
//! recorded on the compiled template and logged at construction.

use super::{anchor, compile};
use crate::error::Result;
use crate::matcher::{Matcher, Rank};
use crate::request::RequestHead;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

/// A recognized placeholder keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    Number,
    String,
}

impl Placeholder {
    const ALL: [Placeholder; 2] = [Placeholder::Number, Placeholder::String];

    pub fn keyword(&self) -> &'static str {
        match self {
            Placeholder::Number => ":number",
            Placeholder::String => ":string",
        }
    }

    /// Grouped regex fragment the keyword is replaced with.
    pub fn fragment(&self) -> &'static str {
        match self {
            Placeholder::Number => "([0-9]+)",
            Placeholder::String => "([a-zA-Z]+)",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == token)
    }
}

/// Output of the template scan, before regex compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePattern {
    /// Anchored pattern source (`^(?:...)$`).
    pub pattern: String,
    /// Substituted placeholders, left to right.
    pub placeholders: Vec<Placeholder>,
    /// Tokens that started with `:` but were not keywords.
    pub unrecognized: Vec<String>,
}

/// Scan state: where the open variable started and where it ended.
#[derive(Debug, Default)]
struct Variable {
    start: Option<usize>,
    end: usize,
}

/// Rewrite a template into an anchored pattern source.
///
/// Text outside placeholders is copied verbatim, so regex metacharacters in
/// the template keep their regex meaning.
pub fn compile_template(template: &str) -> TemplatePattern {
    let mut out = String::with_capacity(template.len() + 16);
    let mut placeholders = Vec::new();
    let mut unrecognized = Vec::new();

    // Bytes of `template` already copied into `out`.
    let mut copied = 0;
    let mut var = Variable::default();

    let mut close = |var: &mut Variable, copied: &mut usize, out: &mut String| {
        if let Some(start) = var.start {
            let token = &template[start..var.end];
            match Placeholder::from_token(token) {
                Some(placeholder) => {
                    out.push_str(&template[*copied..start]);
                    out.push_str(placeholder.fragment());
                    *copied = var.end;
                    placeholders.push(placeholder);
                }
                None => unrecognized.push(token.to_string()),
            }
        }
        *var = Variable::default();
    };

    let last = template.len().saturating_sub(1);
    for (i, c) in template.char_indices() {
        match c {
            ':' if i > 0 => var.start = Some(i),
            '/' if var.start.is_some() => {
                var.end = if i == last { i + 1 } else { i };
                close(&mut var, &mut copied, &mut out);
            }
            _ => {}
        }
    }
    if var.start.is_some() {
        var.end = template.len();
        close(&mut var, &mut copied, &mut out);
    }
    out.push_str(&template[copied..]);

    TemplatePattern {
        pattern: anchor(&out),
        placeholders,
        unrecognized,
    }
}

/// Matches the request path against a compiled template.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    template: String,
    regex: Regex,
    placeholders: Vec<Placeholder>,
    unrecognized: Vec<String>,
}

impl PathTemplate {
    /// Compile `template`. Fails if the rewritten pattern is not a valid
    /// regular expression.
    pub fn new(template: &str) -> Result<Self> {
        let compiled = compile_template(template);
        for token in &compiled.unrecognized {
            warn!(
                template,
                placeholder = %token,
                "unrecognized path placeholder left as literal text"
            );
        }

        let regex = compile(&compiled.pattern)?;
        debug!(template, pattern = %compiled.pattern, "compiled path template");

        Ok(Self {
            template: template.to_string(),
            regex,
            placeholders: compiled.placeholders,
            unrecognized: compiled.unrecognized,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The anchored pattern the template compiled to.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Values captured by the substituted placeholders, left to right, or
    /// `None` if `path` does not match.
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let caps = self.regex.captures(path)?;
        Some(caps.iter().skip(1).flatten().map(|m| m.as_str()).collect())
    }
}

impl Matcher for PathTemplate {
    fn matches(&self, req: &RequestHead<'_>) -> bool {
        self.regex.is_match(req.path)
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}
