//! mux-match CLI
//!
//! Usage:
//!   mux-match check <routes.yaml> --path /users/42 [--scheme https] [-H name:value]...
//!   mux-match compile "/users/:number/profile"

use clap::{Parser, Subcommand};
use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;
use mux_match::config::RouteConfig;
use mux_match::{PathTemplate, RequestHead};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mux-match")]
#[command(author, version, about = "Inspect and test request matchers")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a request against every route in a routes file
    Check {
        /// Routes file (YAML or JSON)
        routes: PathBuf,

        /// Request path
        #[arg(short, long)]
        path: String,

        /// Request scheme, compared as given
        #[arg(short, long, default_value = "http")]
        scheme: String,

        /// Request header as `name:value` (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },

    /// Print the anchored pattern a path template compiles to
    Compile {
        template: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "mux_match=debug"
    } else {
        "mux_match=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Check {
            routes,
            path,
            scheme,
            headers,
        } => check(&routes, &scheme, &path, &headers),
        Command::Compile { template } => {
            let compiled = PathTemplate::new(&template)?;
            println!("{}", compiled.pattern());
            for token in compiled.unrecognized() {
                println!("warning: unrecognized placeholder {token} is matched literally");
            }
            Ok(())
        }
    }
}

fn check(routes: &Path, scheme: &str, path: &str, raw_headers: &[String]) -> anyhow::Result<()> {
    let config = RouteConfig::from_file(routes)?;
    let compiled = config.compile()?;
    tracing::info!(routes = compiled.len(), file = %routes.display(), "loaded routes");

    let headers = parse_headers(raw_headers)?;
    let req = RequestHead::new(scheme, path, &headers);

    for route in &compiled {
        let verdict = if route.matches(&req) { "MATCH" } else { "-" };
        let ranks: Vec<String> = route.matchers.ranks().iter().map(|r| r.to_string()).collect();
        println!("{verdict:<6} {:<24} [{}]", route.name, ranks.join(", "));
    }

    Ok(())
}

fn parse_headers(raw: &[String]) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for header in raw {
        let (name, value) = header
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("header '{header}' must be written as name:value"))?;
        headers.append(
            HeaderName::from_bytes(name.trim().as_bytes())?,
            HeaderValue::from_str(value.trim())?,
        );
    }
    Ok(headers)
}
