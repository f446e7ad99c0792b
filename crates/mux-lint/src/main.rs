//! mux-lint CLI
//!
//! Validates routes files before they are loaded by a router.
//!
//! Usage:
//!   mux-lint <directory_or_file> [OPTIONS]

use clap::Parser;
use mux_lint::{lint_directory, lint_file, LintIssue, LintOptions, LintResult, Severity};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(name = "mux-lint")]
#[command(author, version, about = "Validate mux-match routes files")]
struct Args {
    /// Routes file or directory containing routes files
    #[arg(required = true)]
    path: PathBuf,

    /// Output format: text (default), json
    #[arg(short, long, default_value = "text")]
    output: String,

    /// Only show errors (hide warnings)
    #[arg(short = 'e', long)]
    errors_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(short, long)]
    strict: bool,

    /// Additional accepted scheme (repeatable)
    #[arg(long = "scheme")]
    schemes: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let options = LintOptions {
        extra_schemes: args.schemes.clone(),
    };

    let result = if args.path.is_dir() {
        lint_directory(&args.path, &options)
    } else {
        lint_file(&args.path, &options)
    };

    if args.output == "json" {
        print_results_json(&result);
    } else {
        print_results(&result, &args);
    }

    std::process::exit(if result.failed(args.strict) { 1 } else { 0 });
}

fn print_results_json(result: &LintResult) {
    match serde_json::to_string_pretty(result) {
        Ok(output) => println!("{output}"),
        Err(e) => eprintln!("{RED}Failed to serialize results: {e}{RESET}"),
    }
}

fn print_results(result: &LintResult, args: &Args) {
    println!("{BOLD}{CYAN}mux-lint{RESET} {DIM}{}{RESET}\n", args.path.display());

    let mut by_file: BTreeMap<&Path, Vec<&LintIssue>> = BTreeMap::new();
    for issue in &result.issues {
        if args.errors_only && issue.severity != Severity::Error {
            continue;
        }
        by_file.entry(issue.file.as_path()).or_default().push(issue);
    }

    for (file, issues) in &by_file {
        let failed = issues.iter().any(|i| i.severity == Severity::Error);
        let status = if failed {
            format!("{RED}FAIL{RESET}")
        } else {
            format!("{YELLOW}WARN{RESET}")
        };
        println!("{status} {BOLD}{CYAN}{}{RESET}", file.display());

        for issue in issues {
            let color = severity_color(issue.severity);
            let location = issue
                .location
                .as_ref()
                .map(|l| format!("{DIM}[{RESET}{CYAN}{l}{RESET}{DIM}]{RESET} "))
                .unwrap_or_default();
            println!(
                "  {color}|{RESET} {location}{BOLD}{color}{}{RESET}: {} {DIM}({}){RESET}",
                issue.severity.label(),
                issue.message,
                issue.code
            );
            if let Some(suggestion) = &issue.suggestion {
                println!("  {color}|{RESET}   {GREEN}-> {suggestion}{RESET}");
            }
        }
        println!();
    }

    println!(
        "  {DIM}Files checked:{RESET}  {BOLD}{}{RESET}",
        result.files_checked
    );
    println!(
        "  {DIM}Routes checked:{RESET} {BOLD}{}{RESET}",
        result.routes_checked
    );
    println!(
        "  {}Errors:{RESET}         {BOLD}{}{RESET}",
        if result.errors > 0 { RED } else { GREEN },
        result.errors
    );
    println!(
        "  {}Warnings:{RESET}       {BOLD}{}{RESET}\n",
        if result.warnings > 0 { YELLOW } else { DIM },
        result.warnings
    );

    if result.errors == 0 && result.warnings == 0 {
        println!("{GREEN}{BOLD}All checks passed!{RESET}");
    } else if result.errors == 0 {
        println!("{YELLOW}{BOLD}Passed with warnings{RESET}");
    } else {
        println!("{RED}{BOLD}Linting failed with errors{RESET}");
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
    }
}
