//! Root-set scanning — runs the walker over the well-known user
//! directories under one global file cap.

use crate::error::GameError;
use crate::scanner::walk::{walk, DEFAULT_SKIP_DIRS};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Global cap on candidate files across all roots.
pub const GLOBAL_FILE_CAP: usize = 5_000;

/// Maximum directory depth below each root.
pub const MAX_SCAN_DEPTH: u32 = 6;

/// Folder names scanned under the resolved home directory, in scan order.
const KNOWN_ROOT_NAMES: &[&str] = &[
    "Documents",
    "Desktop",
    "Downloads",
    "Pictures",
    "Music",
    "Videos",
];

/// Scan the well-known user directories and return the candidate set.
///
/// Roots that do not exist are filtered out up front; a root whose
/// top-level listing fails is skipped with a sink notification, not
/// fatal. Fails with [`GameError::NoAccessibleRoots`] when no root
/// survives filtering or every survivor failed its top-level listing,
/// and with [`GameError::NoFilesFound`] when the roots that were
/// scanned turned out empty.
pub fn scan_known_roots(
    sink: impl FnMut(&str, u64),
) -> Result<Vec<PathBuf>, GameError> {
    let home = dirs::home_dir().ok_or(GameError::NoAccessibleRoots)?;
    let roots: Vec<PathBuf> = KNOWN_ROOT_NAMES
        .iter()
        .map(|name| home.join(name))
        .filter(|path| path.is_dir())
        .collect();
    scan_roots(&roots, sink)
}

/// Scan an explicit list of root directories under the shared global cap.
///
/// Each root's walk receives the capacity left by the roots before it;
/// once the cap is reached the remaining roots are not scanned at all.
pub fn scan_roots(
    roots: &[PathBuf],
    mut sink: impl FnMut(&str, u64),
) -> Result<Vec<PathBuf>, GameError> {
    if roots.is_empty() {
        return Err(GameError::NoAccessibleRoots);
    }
    info!(roots = roots.len(), "scanning root set");

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped: u64 = 0;
    let mut walked_roots: usize = 0;

    for root in roots {
        if files.len() >= GLOBAL_FILE_CAP {
            info!(cap = GLOBAL_FILE_CAP, "global file cap reached");
            break;
        }
        // Probe the top level first: an unreadable root is reported and
        // skipped rather than silently yielding nothing.
        if let Err(err) = fs::read_dir(root) {
            warn!(root = %root.display(), %err, "skipping unreadable root");
            sink(&format!("skipped {}", root.display()), files.len() as u64);
            continue;
        }

        walked_roots += 1;
        let remaining = GLOBAL_FILE_CAP - files.len();
        let outcome = walk(
            root,
            MAX_SCAN_DEPTH,
            remaining,
            DEFAULT_SKIP_DIRS,
            files.len() as u64,
            &mut sink,
        );
        skipped += outcome.skipped;
        files.extend(outcome.files);
    }

    // Accessibility includes being listable: if every root failed its
    // top-level probe, none was actually scanned.
    if walked_roots == 0 {
        return Err(GameError::NoAccessibleRoots);
    }
    if files.is_empty() {
        return Err(GameError::NoFilesFound);
    }
    info!(files = files.len(), skipped, "root-set scan complete");
    Ok(files)
}
