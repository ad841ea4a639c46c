//! Error types for quick-commit modules using thiserror.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Substring git prints when a branch has no upstream configured.
pub const NO_UPSTREAM_MARKER: &str = "has no upstream branch";

/// Errors from running the `git` binary or locating the repository.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Not a git repository (or any parent directory): {}", .path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Bare repository not supported: {}", .path.display())]
    BareRepository { path: PathBuf },

    #[error("Failed to run git {operation}: {error}")]
    SpawnFailed {
        operation: String,
        error: std::io::Error,
    },

    #[error("git {operation} exited with code {code}: {stderr}")]
    NonZeroExit {
        operation: String,
        code: i32,
        stderr: String,
    },
}

/// Why a push was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushFailure {
    /// The branch has no upstream; a set-upstream push can recover.
    NoUpstream,
    Other,
}

impl fmt::Display for PushFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushFailure::NoUpstream => write!(f, "no upstream branch"),
            PushFailure::Other => write!(f, "push rejected"),
        }
    }
}

/// A failed `git push`, classified by the text git reported.
#[derive(Error, Debug)]
#[error("{raw_message}")]
pub struct PushError {
    pub reason: PushFailure,
    pub raw_message: String,
}

impl PushError {
    /// Classify a raw failure message.
    pub fn from_message(raw_message: impl Into<String>) -> Self {
        let raw_message = raw_message.into();
        let reason = if raw_message.contains(NO_UPSTREAM_MARKER) {
            PushFailure::NoUpstream
        } else {
            PushFailure::Other
        };
        Self {
            reason,
            raw_message,
        }
    }

    pub fn is_missing_upstream(&self) -> bool {
        self.reason == PushFailure::NoUpstream
    }
}

impl From<GitError> for PushError {
    fn from(err: GitError) -> Self {
        PushError::from_message(err.to_string())
    }
}

/// Errors from the push confirmation prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read push confirmation")]
    ReadFailed(#[source] std::io::Error),

    #[error("Push confirmation prompt failed: {0}")]
    Interaction(String),
}

/// Errors from the quick-commit pipeline, one per failing step.
#[derive(Error, Debug)]
pub enum QuickCommitError {
    #[error("Failed to stage changes")]
    Stage(#[source] GitError),

    #[error("Failed to list changed files")]
    Diff(#[source] GitError),

    #[error("Failed to create commit")]
    Commit(#[source] GitError),

    #[error("Pushing error")]
    Push(#[source] PushError),

    #[error("Failed to set upstream for {remote}/{branch}")]
    SetUpstream {
        remote: String,
        branch: String,
        #[source]
        source: GitError,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
