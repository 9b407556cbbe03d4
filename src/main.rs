//! Binary entry point for the automatic merge handler
//!
//! Reads its configuration from the environment the way GitHub Actions
//! delivers it, handles exactly one event, and exits.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use dependamerge::config::{MergeConfig, MergePreset};
use dependamerge::event::load_event;
use dependamerge::handler::handle_pull_request;
use dependamerge::platform::GitHubPlatform;
use dependamerge::types::MergeMethod;

/// Automatically merges eligible dependency update pull requests
#[derive(clap::Parser)]
#[command(version, about)]
struct Opts {
    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Login whose pull requests may be merged automatically
    #[arg(long, env = "GITHUB_LOGIN", default_value = "dependabot[bot]")]
    github_login: String,

    /// Merge method: MERGE, SQUASH or REBASE
    #[arg(long, env = "MERGE_METHOD", default_value = "SQUASH")]
    merge_method: MergeMethod,

    /// Version bump ceiling, e.g. DEPENDABOT_MINOR
    #[arg(long, env = "PRESET", default_value = "DEPENDABOT_MINOR")]
    preset: MergePreset,

    /// Path to the workflow event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Total merge attempts for the transient conflict, including the first
    #[arg(long, env = "MAX_MERGE_ATTEMPTS", default_value_t = 3)]
    max_attempts: u32,
}

async fn run(opts: Opts) -> anyhow::Result<()> {
    let event = load_event(&opts.event_path).context("cannot load workflow event payload")?;
    let platform =
        GitHubPlatform::new(&opts.github_token).context("cannot build the GitHub client")?;

    let config = MergeConfig {
        login: opts.github_login,
        merge_method: opts.merge_method,
        preset: opts.preset,
        max_attempts: opts.max_attempts,
    };

    handle_pull_request(&platform, &event, &config).await;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();
    if let Err(error) = run(opts).await {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
