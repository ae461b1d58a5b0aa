//! upsync — force-update a branch to match its upstream counterpart.
//!
//! # Usage
//!
//! ```text
//! upsync --upstream <owner/repo> --token <token>
//!        [--branch <name>] [--protected-branches <csv>] [--depth <n|full>]
//! ```
//!
//! On GitHub Actions (`GITHUB_ACTIONS=true`) git commands run for real and
//! progress renders as workflow annotations. Anywhere else, mutating
//! commands are simulated and printed as an indented transcript, so a run
//! can be inspected without touching any remote.

use anyhow::{Context, Result};
use clap::Parser;

use upsync_core::{
    config::DEFAULT_PROTECTED_BRANCHES, ActionsReporter, ConsoleReporter, DryRunGit, FetchDepth,
    GitExecutor, LiveGit, ProtectedBranches, Reporter, RunnerEnv, SyncError, SyncOutcome,
    SyncRequest,
};

#[derive(Parser, Debug)]
#[command(
    name = "upsync",
    version,
    about = "Force-update a branch to match the same branch in an upstream repository",
    long_about = None,
)]
struct Cli {
    /// Upstream repository reference: `owner/repo`, a URL, or a local path.
    #[arg(long)]
    upstream: String,

    /// Credential token embedded into the origin push URL.
    #[arg(long)]
    token: String,

    /// Branch to sync; defaults to the currently checked-out branch.
    #[arg(long)]
    branch: Option<String>,

    /// Comma-separated branches that must never be force-updated.
    /// Pass an empty string to protect nothing.
    #[arg(long, default_value = DEFAULT_PROTECTED_BRANCHES)]
    protected_branches: String,

    /// Upstream fetch depth: a positive integer, or `full` / `0` for the
    /// whole history.
    #[arg(long, default_value = "1")]
    depth: FetchDepth,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let env = RunnerEnv::from_env();

    let mut reporter: Box<dyn Reporter> = if env.on_actions {
        Box::new(ActionsReporter::new(env.output_file.clone()))
    } else {
        Box::new(ConsoleReporter::new(env.debug))
    };

    match run_sync(cli, &env, reporter.as_mut()) {
        Ok(_) => {
            let _ = reporter.finish();
        }
        Err(e) => {
            reporter.error(&render_error(&e));
            let _ = reporter.finish();
            std::process::exit(1);
        }
    }
}

/// Build the request, pick the executor for the current mode, and run the
/// pipeline; records the `synced` output on success.
fn run_sync(cli: Cli, env: &RunnerEnv, reporter: &mut dyn Reporter) -> Result<SyncOutcome> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;

    let mut git: Box<dyn GitExecutor> = if env.on_actions {
        Box::new(LiveGit::new(&cwd))
    } else {
        Box::new(DryRunGit::new(&cwd))
    };

    let req = SyncRequest {
        branch: cli.branch,
        upstream: cli.upstream,
        protected: ProtectedBranches::parse(&cli.protected_branches),
        token: cli.token,
        depth: cli.depth,
    };

    let outcome = upsync_core::run(&req, env, git.as_mut(), reporter)?;

    reporter
        .set_output("synced", if outcome.synced { "true" } else { "false" })
        .context("could not record the synced output")?;

    Ok(outcome)
}

/// Prefix pipeline errors with their taxonomy label; pass other failures
/// through as-is.
fn render_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<SyncError>() {
        Some(sync_err) => format!("{}: {sync_err}", sync_err.kind().label()),
        None => format!("{e:#}"),
    }
}
