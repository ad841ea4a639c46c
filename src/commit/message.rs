//! Commit message selection: canned debug message, explicit message, or a
//! summary generated from the changed-file list.

use std::fmt;

use crate::config::QuickCommitConfig;

/// Maximum characters of the raw change list used in a generated message.
pub const MAX_CHANGES_LENGTH: usize = 300;

/// Canned message used with `--dbg`.
pub const DEBUG_MESSAGE: &str = "Bugs fixed";

const GENERATED_PREFIX: &str = "Changes made to: ";

/// Which rule produced a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    Debug,
    Explicit,
    Generated,
}

/// The final commit message for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub text: String,
    pub source: MessageSource,
}

impl CommitMessage {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Pick the commit message. `--dbg` wins over `--msg`, which wins over the
/// generated summary. An empty `--msg` counts as absent.
pub fn compose_message(config: &QuickCommitConfig, changed_files: &[String]) -> CommitMessage {
    if config.debug_message {
        return CommitMessage {
            text: DEBUG_MESSAGE.to_string(),
            source: MessageSource::Debug,
        };
    }

    if let Some(explicit) = config.message.as_deref().filter(|m| !m.is_empty()) {
        return CommitMessage {
            text: explicit.to_string(),
            source: MessageSource::Explicit,
        };
    }

    CommitMessage {
        text: summarize_changes(changed_files),
        source: MessageSource::Generated,
    }
}

/// Build `Changes made to: a, b, c` from the raw newline-joined list.
///
/// Truncation counts characters and ignores file boundaries, so the last
/// name may be cut short.
fn summarize_changes(changed_files: &[String]) -> String {
    let raw = changed_files.join("\n");
    let truncated: String = raw.chars().take(MAX_CHANGES_LENGTH).collect();
    let joined = truncated.trim().replace('\n', ", ");
    format!("{}{}", GENERATED_PREFIX, joined)
}
