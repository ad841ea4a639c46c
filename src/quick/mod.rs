//! Quick-commit pipeline: stage, commit, and optionally push in one step.
//!
//! Orchestrates staging, change detection, message composition, commit,
//! push decision, push, and the final summary.

pub mod preflight;
pub mod push;

use tracing::debug;

use crate::commit::{CommitMessage, compose_message};
use crate::config::QuickCommitConfig;
use crate::error::QuickCommitError;
use crate::git::GitExecutor;
use crate::prompt::PushConfirmer;
use crate::report::Reporter;

use self::push::{PushDecision, decide_push, push_with_upstream_fallback};

const SUCCESS_BANNER: &str = "🎉 Tasks completed successfully";

/// How a run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing differed from HEAD; no commit was made.
    NoChanges,
    /// Committed, and the operator declined the push.
    Declined { message: CommitMessage },
    /// Committed, then pushed or skipped the push by flag.
    Completed { message: CommitMessage, pushed: bool },
}

/// Run the full quick-commit pipeline.
pub async fn run_quick_commit<G, C, R>(
    config: &QuickCommitConfig,
    git: &G,
    confirmer: &C,
    reporter: &R,
) -> Result<RunOutcome, QuickCommitError>
where
    G: GitExecutor,
    C: PushConfirmer,
    R: Reporter,
{
    // ── Stage 1: Stage changes ──
    if config.skip_add {
        debug!("Skipping git add");
    } else {
        git.stage().await.map_err(QuickCommitError::Stage)?;
    }

    // ── Stage 2: Detect changes ──
    let changed_files = git.diff_names().await.map_err(QuickCommitError::Diff)?;
    if changed_files.is_empty() {
        reporter.warning("No changes detected. Exiting.");
        return Ok(RunOutcome::NoChanges);
    }
    debug!("{} changed files", changed_files.len());

    // ── Stage 3: Commit ──
    let message = compose_message(config, &changed_files);
    debug!("Commit message ({:?}): {}", message.source, message);
    git.commit(message.as_str())
        .await
        .map_err(QuickCommitError::Commit)?;

    // ── Stage 4: Push decision ──
    let decision = decide_push(config, confirmer, reporter)?;
    if decision == PushDecision::Declined {
        print_commit_summary(reporter, &message);
        return Ok(RunOutcome::Declined { message });
    }

    // ── Stage 5: Push ──
    let pushed = decision.should_push();
    if pushed {
        push_with_upstream_fallback(git, &config.remote, &config.branch, reporter).await?;
    } else {
        reporter.info("<Push> phase skipped.");
    }

    print_full_summary(reporter, config, &message);

    Ok(RunOutcome::Completed { message, pushed })
}

/// Banner plus the commit line only, after a declined push.
fn print_commit_summary<R: Reporter>(reporter: &R, message: &CommitMessage) {
    reporter.success(SUCCESS_BANNER);
    reporter.title("Info");
    reporter.detail(&format!("Commit: {}", message));
}

fn print_full_summary<R: Reporter>(
    reporter: &R,
    config: &QuickCommitConfig,
    message: &CommitMessage,
) {
    reporter.success(SUCCESS_BANNER);
    reporter.title("Info");
    reporter.detail(&format!("Remote: {}", config.remote));
    reporter.detail(&format!("Branch: {}", config.branch));
    reporter.detail(&format!("Commit: {}", message));
}
