//! Preflight checks for the quick-commit pipeline.
//!
//! Verifies that git is installed and that the current directory lives inside
//! a non-bare repository before any command mutates it.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, warn};

use crate::error::GitError;

/// What preflight learned about the enclosing repository.
#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    pub root: PathBuf,
    /// Checked-out branch, `None` on a detached HEAD.
    pub current_branch: Option<String>,
}

/// Run all preflight checks from `start`.
pub fn run_checks(start: &Path, target_branch: &str) -> Result<RepositoryInfo, GitError> {
    check_git_installed()?;

    let info = discover_repository(start)?;
    debug!("Repository root: {}", info.root.display());

    if let Some(current) = branch_mismatch(&info, target_branch) {
        warn!(
            "Checked out branch is '{}' but pushing local branch '{}'",
            current, target_branch
        );
    }

    Ok(info)
}

/// Check that the `git` binary is on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git")
        .map(|path| debug!("Using git at {}", path.display()))
        .map_err(|_| GitError::NotInstalled)
}

/// Find the repository containing `start`, searching parent directories.
pub fn discover_repository(start: &Path) -> Result<RepositoryInfo, GitError> {
    let repo = Repository::discover(start).map_err(|source| GitError::NotARepository {
        path: start.to_path_buf(),
        source,
    })?;

    let root = repo
        .workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| GitError::BareRepository {
            path: repo.path().to_path_buf(),
        })?;

    Ok(RepositoryInfo {
        root,
        current_branch: current_branch(&repo),
    })
}

/// Current branch name, including an unborn branch in a fresh repository.
fn current_branch(repo: &Repository) -> Option<String> {
    match repo.head() {
        Ok(head) if head.is_branch() => head.shorthand().map(String::from),
        Ok(_) => None,
        Err(_) => repo
            .find_reference("HEAD")
            .ok()
            .and_then(|r| r.symbolic_target().map(String::from))
            .map(|target| {
                target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(&target)
                    .to_string()
            }),
    }
}

/// The checked-out branch when it differs from the branch being pushed.
pub fn branch_mismatch<'a>(info: &'a RepositoryInfo, target_branch: &str) -> Option<&'a str> {
    info.current_branch
        .as_deref()
        .filter(|current| *current != target_branch)
}
