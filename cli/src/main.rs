//! CLI for github-release-query.
//!
//! Looks up the latest release tag of a GitHub repository, or the download
//! URL of the single release asset matching a pattern, and prints the result
//! as JSON.

use clap::Parser;
use github_release_query::{
    ActionKind, FailureReport, QueryError, QueryParams, QueryResult, Runner, RunnerConfig,
    RunnerError, Token,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Query GitHub releases for the latest tag or a matching asset download URL.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// The GitHub account that owns the repository.
    #[arg(long, required_unless_present = "params_file")]
    user: Option<String>,

    /// Repository name.
    #[arg(long, required_unless_present = "params_file")]
    repo: Option<String>,

    /// Action to perform: latest_release or get_asset_url.
    #[arg(long, required_unless_present = "params_file")]
    action: Option<ActionKind>,

    /// Regex selecting exactly one asset (required for get_asset_url).
    #[arg(long)]
    asset_regex: Option<String>,

    /// Release tag to inspect with get_asset_url.
    #[arg(long, default_value = "latest")]
    release_version: String,

    /// JSON file holding all query parameters.
    #[arg(
        long,
        conflicts_with_all = ["user", "repo", "action", "asset_regex", "release_version"]
    )]
    params_file: Option<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Check mode; queries are read-only so this changes nothing.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(result) => {
            print_json(serde_json::to_value(&result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Query failed");
            print_json(serde_json::to_value(FailureReport::from(&e)));
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries only the JSON result.
/// Log level filtering via `RUST_LOG` env var (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<QueryResult, RunnerError> {
    let api_url = args.api_url.clone();
    let check = args.check;
    let config = RunnerConfig::new(query_params(args)?)
        .with_api_url(api_url)
        .with_check_mode(check);
    Runner::new(config).run().await
}

/// Collects query parameters from the params file or the individual flags.
fn query_params(args: Args) -> Result<QueryParams, RunnerError> {
    let token = args.token.map(Token::new);
    if let Some(path) = args.params_file {
        return Ok(QueryParams::from_json_file(&path)?.with_fallback_token(token));
    }

    Ok(QueryParams {
        token,
        user: required(args.user, "user")?,
        repo: required(args.repo, "repo")?,
        action: required(args.action, "action")?,
        asset_regex: args.asset_regex,
        release_version: Some(args.release_version),
    })
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, QueryError> {
    value.ok_or_else(|| QueryError::InvalidArgument(format!("--{name} is required")))
}

fn print_json(value: Result<Value, serde_json::Error>) {
    match value {
        Ok(value) => println!("{value}"),
        Err(e) => error!(error = %e, "Failed to serialize output"),
    }
}
