//! Routes file linting for mux-match.
//!
//! Checks routes files before they are loaded: odd header pair lists, invalid
//! header names, invalid regular expressions, templates with placeholders the
//! template compiler does not recognize, duplicate route names.
//!
//! # Example
//!
//! ```no_run
//! use mux_lint::{lint_directory, lint_file, LintOptions};
//! use std::path::Path;
//!
//! let result = lint_file(Path::new("routes.yaml"), &LintOptions::default());
//! let result = lint_directory(Path::new("./routes"), &LintOptions::default());
//!
//! if result.has_errors() {
//!     eprintln!("Found {} errors", result.errors);
//! }
//! ```

mod types;
mod validator;

use serde_json::Value;
use std::path::Path;

pub use types::{LintIssue, LintOptions, LintResult, Severity};
pub use validator::{validate_header_pairs, validate_path, validate_route, validate_routes};

/// Routes file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Lint a single routes file.
pub fn lint_file(path: &Path, options: &LintOptions) -> LintResult {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            let mut result = LintResult::new();
            result.files_checked = 1;
            result.add_issue(LintIssue::error(
                "E001",
                format!("Failed to read file: {e}"),
                path,
            ));
            return result;
        }
    };

    let format = Format::from_path(path).unwrap_or(Format::Yaml);
    lint_str(&contents, format, path, options)
}

/// Lint every `.yaml`, `.yml` and `.json` file in a directory (non-recursive).
pub fn lint_directory(path: &Path, options: &LintOptions) -> LintResult {
    let mut result = LintResult::new();

    let entries = match std::fs::read_dir(path) {
        Ok(e) => e,
        Err(e) => {
            result.add_issue(LintIssue::error(
                "E001",
                format!("Failed to read directory: {e}"),
                path,
            ));
            return result;
        }
    };

    let mut files: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && Format::from_path(p).is_some())
        .collect();
    files.sort();

    for file in files {
        result.merge(lint_file(&file, options));
    }

    result
}

/// Lint routes held in memory. `source` is only used in reported issues.
pub fn lint_str(contents: &str, format: Format, source: &Path, options: &LintOptions) -> LintResult {
    let mut result = LintResult::new();
    result.files_checked = 1;

    let parsed: Result<Value, String> = match format {
        Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(doc) => validate_routes(source, &doc, &mut result, options),
        Err(e) => result.add_issue(LintIssue::error(
            "E002",
            format!("Failed to parse routes file: {e}"),
            source,
        )),
    }

    result
}
