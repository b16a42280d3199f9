//! Scan progress reporting — the synchronous sink used by the core scan
//! functions, and the lightweight messages the background scanner sends
//! to the host over a crossbeam channel.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Synchronous progress sink: the path or label just processed, and the
/// number of files found so far across the whole scan.
///
/// Invoked from the scanning thread at a rate-limited cadence. Sinks must
/// do bounded work and must not panic; they sit directly on the scanning
/// path.
pub type ProgressSink<'a> = &'a mut dyn FnMut(&str, u64);

/// Progress updates sent from the scan thread to the host.
///
/// Serialize is derived so hosts can forward these across a process
/// boundary unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanProgress {
    /// Periodic update: the path just visited and the running file count.
    Update {
        current_path: String,
        files_found: u64,
    },
    /// Scanning finished; the candidate set is attached.
    Complete {
        files: Vec<PathBuf>,
        duration: Duration,
    },
    /// Scanning failed with one of the [`crate::GameError`] variants.
    Failed { message: String },
}
