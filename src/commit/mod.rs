//! Commit message composition.

pub mod message;

pub use message::{CommitMessage, MAX_CHANGES_LENGTH, MessageSource, compose_message};
