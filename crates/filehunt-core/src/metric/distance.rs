//! The two-mode distance between a guessed path and the target.
//!
//! Same parent folder (compared case-insensitively) scores by the gap
//! between the first characters of the two file names; different folders
//! score by the difference in directory depth. The metric is
//! intentionally coarse — the roughness is part of the game, not an
//! approximation to tighten up.

use crate::metric::path_depth::{depth_of, parent_of};
use serde::Serialize;
use std::path::Path;

/// Distance from a guess to the target, tagged with the method that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Distance {
    /// Guess and target share a parent folder.
    Alphabetical {
        magnitude: u32,
        /// The shared folder, as the guess spelled it.
        folder: String,
    },
    /// Guess and target live in different folders.
    Depth {
        magnitude: u32,
        guess_depth: u32,
        target_depth: u32,
    },
}

impl Distance {
    pub fn magnitude(&self) -> u32 {
        match self {
            Self::Alphabetical { magnitude, .. } | Self::Depth { magnitude, .. } => *magnitude,
        }
    }

    pub fn is_alphabetical(&self) -> bool {
        matches!(self, Self::Alphabetical { .. })
    }
}

/// First code point of the case-folded file name; empty names read as 0.
fn leading_code_point(path: &Path) -> u32 {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .and_then(|name| name.chars().next())
        .map(|c| c as u32)
        .unwrap_or(0)
}

/// Score `guess` against `target`.
///
/// Total over all well-formed paths: there is no failure case, only a
/// method choice.
pub fn calculate_distance(guess: &Path, target: &Path) -> Distance {
    let guess_parent = parent_of(guess);
    let target_parent = parent_of(target);

    if guess_parent.to_lowercase() == target_parent.to_lowercase() {
        let magnitude = leading_code_point(guess).abs_diff(leading_code_point(target));
        Distance::Alphabetical {
            magnitude,
            folder: guess_parent,
        }
    } else {
        let guess_depth = depth_of(guess);
        let target_depth = depth_of(target);
        Distance::Depth {
            magnitude: guess_depth.abs_diff(target_depth),
            guess_depth,
            target_depth,
        }
    }
}
