//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, RepositoryInitOptions, Signature};

/// Branch every test repository starts on.
pub const TEST_BRANCH: &str = "main";

/// A test git repository with a local bare `origin` remote.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
    pub remote_dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a repository on `main` with one commit and an `origin` remote.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");

        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(TEST_BRANCH);
        let repo = Repository::init_opts(dir.path(), &opts).expect("Failed to init git repo");

        // The git CLI reads identity from the repository's own config
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable commit signing");
        }

        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        repo.remote(
            "origin",
            remote_dir.path().to_str().expect("Invalid remote path"),
        )
        .expect("Failed to add origin remote");

        let test_repo = Self {
            dir,
            repo,
            remote_dir,
        };
        test_repo.write_file("README.md", "# test\n");
        test_repo.commit_all("initial commit");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the working tree root.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    /// Stage everything with git2 and commit it. Returns the commit OID.
    pub fn commit_all(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the commit HEAD points to.
    pub fn head_message(&self) -> String {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        commit.message().unwrap_or_default().trim_end().to_string()
    }

    pub fn head_id(&self) -> Oid {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD")
            .id()
    }

    /// Commit the bare remote has for `branch`, if it has been pushed.
    pub fn remote_branch_id(&self, branch: &str) -> Option<Oid> {
        let remote = Repository::open_bare(self.remote_dir.path()).expect("Failed to open remote");
        remote
            .find_reference(&format!("refs/heads/{}", branch))
            .ok()
            .and_then(|r| r.target())
    }
}
