//! quick-commit - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quick_commit::config::{DEFAULT_BRANCH, DEFAULT_REMOTE};
use quick_commit::quick::preflight::run_checks;
use quick_commit::{
    ConsoleReporter, GitCli, QuickCommitConfig, Reporter, RunOutcome, TerminalConfirmer,
    run_quick_commit,
};

/// Stage, commit, and push in one step.
#[derive(Parser, Debug)]
#[command(name = "quick-commit")]
#[command(about = "Stage, commit, and optionally push in one step")]
#[command(version)]
struct Cli {
    /// Skip the <git add .> step
    #[arg(long)]
    skip_add: bool,

    /// Skip the <git push> step without asking
    #[arg(long)]
    skip_push: bool,

    /// Branch to push
    #[arg(long, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Remote to push to
    #[arg(long, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Commit message (defaults to a list of changed files)
    #[arg(long)]
    msg: Option<String>,

    /// Use the quick commit message "Bugs fixed"
    #[arg(long)]
    dbg: bool,

    /// Push after committing without asking
    #[arg(long)]
    auto_push: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for QuickCommitConfig {
    // Empty values count as unset
    fn from(cli: Cli) -> Self {
        QuickCommitConfig {
            skip_add: cli.skip_add,
            skip_push: cli.skip_push,
            branch: non_empty_or(cli.branch, DEFAULT_BRANCH),
            remote: non_empty_or(cli.remote, DEFAULT_REMOTE),
            message: cli.msg.filter(|m| !m.is_empty()),
            debug_message: cli.dbg,
            auto_push: cli.auto_push,
        }
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reporter = ConsoleReporter;
    let result = run(cli, &reporter).await;
    if let Err(ref e) = result {
        reporter.error(&format!("{:#}", e));
    }
    ExitCode::from(exit_status(&result))
}

async fn run(cli: Cli, reporter: &ConsoleReporter) -> Result<RunOutcome> {
    let config = QuickCommitConfig::from(cli);

    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    run_checks(&cwd, &config.branch).context("Preflight checks failed")?;

    let git = GitCli::new(cwd).with_echo(true);
    let outcome = run_quick_commit(&config, &git, &TerminalConfirmer, reporter).await?;

    Ok(outcome)
}

/// No changes, a declined push, and a completed run all exit 0; any error exits 1.
fn exit_status(result: &Result<RunOutcome>) -> u8 {
    match result {
        Ok(RunOutcome::NoChanges | RunOutcome::Declined { .. } | RunOutcome::Completed { .. }) => 0,
        Err(_) => 1,
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
