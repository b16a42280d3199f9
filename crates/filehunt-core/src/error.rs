//! Error taxonomy — the only failures that leave this crate.
//!
//! Per-entry and per-directory filesystem errors during scanning are
//! recovered locally (the entry or subtree is skipped and counted); the
//! caller sees them only as a smaller result set. Every variant here is
//! retryable by re-invoking the operation that produced it.

use thiserror::Error;

/// Failures surfaced to the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// None of the well-known root directories exist or are readable.
    #[error("none of the well-known root directories are accessible")]
    NoAccessibleRoots,

    /// Scanning finished but discovered zero files.
    #[error("no files found under the accessible root directories")]
    NoFilesFound,

    /// Target selection was attempted on an empty candidate set.
    #[error("cannot select a target from an empty candidate set")]
    EmptyCandidateSet,
}
