//! quick-commit - stage, commit, and push in one step.
//!
//! # Overview
//!
//! quick-commit runs `git add .`, commits with an explicit, canned, or
//! generated message, and then pushes either automatically, never, or after
//! asking on the terminal. A push that fails because the branch has no
//! upstream is retried once with `--set-upstream`.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;
pub mod quick;
pub mod report;

// Re-export commonly used types
pub use commit::{CommitMessage, MessageSource};
pub use config::QuickCommitConfig;
pub use error::{GitError, PromptError, PushError, PushFailure, QuickCommitError};
pub use git::{GitCli, GitExecutor};
pub use prompt::{PushConfirmer, ScriptedConfirmer, TerminalConfirmer};
pub use quick::{RunOutcome, run_quick_commit};
pub use report::{ConsoleReporter, Level, RecordingReporter, Reporter};
