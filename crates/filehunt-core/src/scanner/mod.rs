//! Scanner module — filesystem discovery for the candidate set.
//!
//! The synchronous entry points are [`roots::scan_known_roots`] and
//! [`roots::scan_roots`]; [`walk`] holds the bounded walker underneath
//! them. Hosts that keep a UI thread responsive use [`start_scan`], which
//! runs the root-set scan on a background thread and streams progress
//! over a bounded channel.

pub mod progress;
pub mod roots;
pub mod walk;

pub use roots::scan_known_roots;

use crate::error::GameError;
use crossbeam_channel::Receiver;
use progress::ScanProgress;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum progress messages that may queue in the channel.
///
/// A host draining once per frame has plenty of headroom; if it stalls,
/// the scanner blocks on `send` instead of growing the heap without
/// bound.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed background scan.
///
/// The scan ends with exactly one terminal message, `Complete` or
/// `Failed`, after which the channel disconnects.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    _thread: Option<thread::JoinHandle<()>>,
}

/// Scan the well-known user directories on a background thread.
pub fn start_scan() -> ScanHandle {
    spawn_scan(|sink| roots::scan_known_roots(sink))
}

/// Scan an explicit root list on a background thread.
pub fn start_scan_of(root_list: Vec<PathBuf>) -> ScanHandle {
    spawn_scan(move |sink| roots::scan_roots(&root_list, sink))
}

fn spawn_scan<F>(scan: F) -> ScanHandle
where
    F: FnOnce(&mut dyn FnMut(&str, u64)) -> Result<Vec<PathBuf>, GameError>
        + Send
        + 'static,
{
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("filehunt-scanner".into())
        .spawn(move || {
            let start = Instant::now();
            info!("starting background scan");

            let mut sink = |label: &str, count: u64| {
                let _ = progress_tx.send(ScanProgress::Update {
                    current_path: label.to_owned(),
                    files_found: count,
                });
            };
            match scan(&mut sink) {
                Ok(files) => {
                    info!(files = files.len(), "background scan complete");
                    let _ = progress_tx.send(ScanProgress::Complete {
                        files,
                        duration: start.elapsed(),
                    });
                }
                Err(err) => {
                    warn!(%err, "background scan failed");
                    let _ = progress_tx.send(ScanProgress::Failed {
                        message: err.to_string(),
                    });
                }
            }
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        _thread: Some(thread),
    }
}
