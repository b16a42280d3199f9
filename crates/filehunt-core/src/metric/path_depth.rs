//! Pure path helpers: normalized parent directory and directory depth.
//!
//! Paths are treated as lists of separator-delimited segments. Both `/`
//! and `\` count as separators and empty segments are dropped, so
//! malformed input ("a//b", trailing slashes) normalizes instead of
//! failing. Neither function touches the filesystem.

use std::path::Path;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// The normalized containing directory of `path`.
///
/// Segments are rejoined with `/`; a leading `/` is preserved when the
/// input is absolute. A root-level file ("/a.txt") yields "/".
pub fn parent_of(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let segments: Vec<&str> = raw.split(SEPARATORS).filter(|s| !s.is_empty()).collect();
    let parent = match segments.len() {
        0 | 1 => String::new(),
        n => segments[..n - 1].join("/"),
    };
    if raw.starts_with('/') {
        format!("/{parent}")
    } else {
        parent
    }
}

/// Number of directory segments above the file name.
///
/// Root-level files have depth 0; an empty or separator-only path also
/// reads as depth 0.
pub fn depth_of(path: &Path) -> u32 {
    let raw = path.to_string_lossy();
    let count = raw.split(SEPARATORS).filter(|s| !s.is_empty()).count();
    count.saturating_sub(1) as u32
}
