//! Git operations for the quick-commit pipeline: stage, diff, commit, push.
//!
//! All operations use `tokio::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, SSH agent, and credential store.
//! Arguments are always passed as an argument vector, never through a shell.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{GitError, PushError};

/// Trait for the git operations the pipeline needs.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Stage all working-tree changes (`git add .`).
    async fn stage(&self) -> Result<(), GitError>;

    /// Names of files differing from HEAD (`git diff --name-only HEAD`).
    async fn diff_names(&self) -> Result<Vec<String>, GitError>;

    /// Create a commit with the given message.
    async fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Push `branch` to `remote`.
    async fn push(&self, remote: &str, branch: &str) -> Result<(), PushError>;

    /// Push `branch` to `remote` and record it as the upstream.
    async fn set_upstream_and_push(&self, remote: &str, branch: &str) -> Result<(), GitError>;
}

/// Executor that calls the real `git` CLI in a working directory.
pub struct GitCli {
    workdir: PathBuf,
    echo: bool,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            echo: false,
        }
    }

    /// Forward git's own output to the terminal after successful commands.
    ///
    /// Output is captured and replayed once the command exits, not streamed,
    /// so a slow push stays silent until it finishes.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run a git command and return its stdout, or a descriptive error.
    async fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        self.run_git_with_echo(args, self.echo).await
    }

    async fn run_git_with_echo(&self, args: &[&str], echo: bool) -> Result<String, GitError> {
        let operation = args.join(" ");
        debug!("Running git {}", operation);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|error| GitError::SpawnFailed {
                operation: operation.clone(),
                error,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            // git commit reports "nothing to commit" on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(GitError::NonZeroExit {
                operation,
                code: output.status.code().unwrap_or(-1),
                stderr: detail.to_string(),
            });
        }

        if echo {
            if !stdout.is_empty() {
                print!("{}", stdout);
            }
            if !stderr.is_empty() {
                eprint!("{}", stderr);
            }
        }

        Ok(stdout)
    }
}

#[async_trait]
impl GitExecutor for GitCli {
    async fn stage(&self) -> Result<(), GitError> {
        self.run_git(&["add", "."]).await.map(|_| ())
    }

    async fn diff_names(&self) -> Result<Vec<String>, GitError> {
        // Captured for the message, not shown
        let stdout = self
            .run_git_with_echo(
                &["-c", "core.quotePath=false", "diff", "--name-only", "HEAD"],
                false,
            )
            .await?;
        Ok(parse_name_list(&stdout))
    }

    async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message]).await.map(|_| ())
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<(), PushError> {
        self.run_git(&["push", remote, branch])
            .await
            .map(|_| ())
            .map_err(PushError::from)
    }

    async fn set_upstream_and_push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run_git(&["push", "--set-upstream", remote, branch])
            .await
            .map(|_| ())
    }
}

/// Split `--name-only` output into file names, dropping blank lines.
fn parse_name_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
