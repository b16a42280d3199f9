//! Bounded depth-first directory walker.
//!
//! Collects regular-file paths under a single root, subject to a depth
//! limit, a file cap shared across the whole traversal, and a skip-list
//! of directory names. Subdirectories are visited one at a time,
//! depth-first; the accumulator is owned by the traversal, so no locking
//! is involved.
//!
//! Every listing or classification failure is recovered locally: the
//! entry or subtree is skipped, the skip is counted, and the walk
//! continues. No filesystem error propagates out of this module.

use crate::scanner::progress::ProgressSink;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files discovered between progress-sink invocations.
pub const PROGRESS_BATCH: u64 = 100;

/// Directory names never descended into, matched ASCII-case-insensitively.
///
/// Membership is configuration, not semantics: noisy or system trees that
/// would flood the candidate set with files the player has never seen.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "$RECYCLE.BIN",
    "System Volume Information",
    "Windows",
    "node_modules",
    "target",
    ".git",
    ".svn",
    ".hg",
];

/// Result of one bounded walk.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Discovered regular files, in discovery order.
    pub files: Vec<PathBuf>,
    /// Entries or subtrees dropped because of local filesystem errors.
    pub skipped: u64,
}

/// Walk `root` depth-first, collecting at most `max_files` regular files
/// and never descending more than `max_depth` levels below the root.
///
/// `count_offset` is the number of files already collected by earlier
/// roots in the same scan, so the sink always reports the global running
/// count. The sink fires once on entering the root, once per file at the
/// root level, and once per `PROGRESS_BATCH` files below it.
pub fn walk(
    root: &Path,
    max_depth: u32,
    max_files: usize,
    skip_names: &[&str],
    count_offset: u64,
    sink: ProgressSink<'_>,
) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    sink(&root.to_string_lossy(), count_offset);

    let mut walker = Walker {
        max_depth,
        max_files,
        skip_names,
        count_offset,
        sink,
    };
    walker.descend(root, 0, &mut outcome);

    debug!(
        root = %root.display(),
        files = outcome.files.len(),
        skipped = outcome.skipped,
        "walk finished"
    );
    outcome
}

/// Traversal parameters threaded through the recursion; the accumulator
/// travels separately as `&mut WalkOutcome`.
struct Walker<'a> {
    max_depth: u32,
    max_files: usize,
    skip_names: &'a [&'a str],
    count_offset: u64,
    sink: ProgressSink<'a>,
}

impl Walker<'_> {
    fn descend(&mut self, dir: &Path, depth: u32, outcome: &mut WalkOutcome) {
        if outcome.files.len() >= self.max_files {
            return;
        }
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                outcome.skipped += 1;
                return;
            }
        };

        for entry in entries {
            if outcome.files.len() >= self.max_files {
                return;
            }
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => {
                    outcome.skipped += 1;
                    continue;
                }
            };
            // Classify from the directory entry itself; no extra stat call.
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => {
                    outcome.skipped += 1;
                    continue;
                }
            };

            if file_type.is_file() {
                let path = entry.path();
                outcome.files.push(path.clone());
                let count = self.count_offset + outcome.files.len() as u64;
                if depth == 0 || count % PROGRESS_BATCH == 0 {
                    (self.sink)(&path.to_string_lossy(), count);
                }
            } else if file_type.is_dir() && depth < self.max_depth {
                let name = entry.file_name();
                if !is_skipped(&name.to_string_lossy(), self.skip_names) {
                    self.descend(&entry.path(), depth + 1, outcome);
                }
            }
        }
    }
}

fn is_skipped(name: &str, skip_names: &[&str]) -> bool {
    skip_names.iter().any(|skip| skip.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_match_is_case_insensitive() {
        assert!(is_skipped("NODE_MODULES", DEFAULT_SKIP_DIRS));
        assert!(is_skipped(".Git", DEFAULT_SKIP_DIRS));
        assert!(!is_skipped("documents", DEFAULT_SKIP_DIRS));
    }
}
