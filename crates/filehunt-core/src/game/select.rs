//! Target selection — one uniform pick from the candidate set.

use crate::error::GameError;
use rand::Rng;
use std::path::PathBuf;

/// Pick a target uniformly at random from `candidates`.
///
/// The generator is injected rather than ambient so hosts can pass
/// `rand::thread_rng()` while tests drive selection with a seeded
/// `StdRng` and get deterministic targets.
pub fn select_target<R: Rng + ?Sized>(
    candidates: &[PathBuf],
    rng: &mut R,
) -> Result<PathBuf, GameError> {
    if candidates.is_empty() {
        return Err(GameError::EmptyCandidateSet);
    }
    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index].clone())
}
