//! Verdict production — scores each new guess against the previous one.
//!
//! The host verifies that a guessed path exists and names a regular file
//! before calling in; this module only compares distances.

use crate::metric::distance::calculate_distance;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::Path;

/// Feedback for a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No previous guess existed to compare against.
    First,
    Closer,
    Farther,
    Same,
}

/// Compare `new_guess` against `previous_guess`, both relative to `target`.
///
/// When both distances use the same method, magnitudes decide. When the
/// methods differ, the alphabetical side wins outright regardless of
/// either magnitude: being in the target's folder always counts as closer
/// than any depth difference. The asymmetry is observable game behavior
/// and is kept exactly as the game defines it, not smoothed into a single
/// scale.
pub fn compare_guesses(
    new_guess: &Path,
    previous_guess: Option<&Path>,
    target: &Path,
) -> Verdict {
    let Some(previous) = previous_guess else {
        return Verdict::First;
    };

    let new_distance = calculate_distance(new_guess, target);
    let previous_distance = calculate_distance(previous, target);

    match (
        new_distance.is_alphabetical(),
        previous_distance.is_alphabetical(),
    ) {
        (true, false) => Verdict::Closer,
        (false, true) => Verdict::Farther,
        _ => match new_distance.magnitude().cmp(&previous_distance.magnitude()) {
            Ordering::Less => Verdict::Closer,
            Ordering::Greater => Verdict::Farther,
            Ordering::Equal => Verdict::Same,
        },
    }
}
