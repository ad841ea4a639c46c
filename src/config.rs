//! Run configuration, resolved from CLI flags.

/// Branch pushed when `--branch` is not given.
pub const DEFAULT_BRANCH: &str = "main";

/// Remote pushed to when `--remote` is not given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Configuration for a quick-commit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickCommitConfig {
    pub skip_add: bool,
    pub skip_push: bool,
    pub branch: String,
    pub remote: String,
    pub message: Option<String>,
    /// Use the canned "Bugs fixed" message.
    pub debug_message: bool,
    pub auto_push: bool,
}

impl Default for QuickCommitConfig {
    fn default() -> Self {
        Self {
            skip_add: false,
            skip_push: false,
            branch: DEFAULT_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            message: None,
            debug_message: false,
            auto_push: false,
        }
    }
}
