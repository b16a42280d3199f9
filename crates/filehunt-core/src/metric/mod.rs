//! Distance metric — how far a guessed path is from the target.
//!
//! [`path_depth`] holds the pure segment helpers; [`distance`] combines
//! them into the two-mode metric the game is built on.

pub mod distance;
pub mod path_depth;
