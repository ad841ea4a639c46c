//! Push decision and push execution with the missing-upstream fallback.

use tracing::debug;

use crate::config::QuickCommitConfig;
use crate::error::QuickCommitError;
use crate::git::GitExecutor;
use crate::prompt::PushConfirmer;
use crate::report::Reporter;

/// How the run decided whether to push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDecision {
    /// `--auto-push`, no prompt.
    Auto,
    /// `--skip-push`, no prompt.
    Skipped,
    /// The operator answered yes (or nothing).
    Confirmed,
    /// The operator answered anything other than yes.
    Declined,
}

impl PushDecision {
    pub fn should_push(self) -> bool {
        matches!(self, PushDecision::Auto | PushDecision::Confirmed)
    }
}

/// Resolve the push decision. `--auto-push` beats `--skip-push`; only when
/// neither is set is the operator asked.
pub fn decide_push<C: PushConfirmer, R: Reporter>(
    config: &QuickCommitConfig,
    confirmer: &C,
    reporter: &R,
) -> Result<PushDecision, QuickCommitError> {
    if config.auto_push {
        return Ok(PushDecision::Auto);
    }
    if config.skip_push {
        return Ok(PushDecision::Skipped);
    }

    reporter.success("Changes committed");
    let confirmed = confirmer.confirm_push(&config.remote, &config.branch)?;
    debug!("Push confirmation answer: {}", confirmed);

    Ok(if confirmed {
        PushDecision::Confirmed
    } else {
        PushDecision::Declined
    })
}

/// Push, retrying once with `--set-upstream` when git reports that the
/// branch has no upstream. Any other failure is returned as-is.
pub async fn push_with_upstream_fallback<G: GitExecutor, R: Reporter>(
    git: &G,
    remote: &str,
    branch: &str,
    reporter: &R,
) -> Result<(), QuickCommitError> {
    reporter.info(&format!("Pushing changes to {}/{}", remote, branch));

    match git.push(remote, branch).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_missing_upstream() => {
            debug!("Push failed without upstream: {}", e.raw_message);
            reporter.error("No upstream branch. Setting upstream...");
            git.set_upstream_and_push(remote, branch)
                .await
                .map_err(|source| QuickCommitError::SetUpstream {
                    remote: remote.to_string(),
                    branch: branch.to_string(),
                    source,
                })
        }
        Err(e) => Err(QuickCommitError::Push(e)),
    }
}
