//! FileHunt Core — scanning, distance scoring, and guess comparison.
//!
//! This crate contains the game's entire engine with zero UI dependencies.
//! The host (GUI, TUI, whatever) owns the session state — the chosen
//! target and the guess history — and calls into this crate for the four
//! operations that have real logic:
//!
//! - [`scanner`] — bounded filesystem discovery that builds the candidate
//!   set, with progress reporting and an optional background-thread API.
//! - [`game::select`] — uniform-random target selection.
//! - [`metric`] — the two-mode distance between a guess and the target.
//! - [`game::compare`] — the closer/farther/same verdict for each guess.

pub mod error;
pub mod game;
pub mod metric;
pub mod scanner;

pub use error::GameError;
pub use game::compare::{compare_guesses, Verdict};
pub use game::select::select_target;
pub use metric::distance::{calculate_distance, Distance};
pub use scanner::progress::ScanProgress;
pub use scanner::{scan_known_roots, start_scan, ScanHandle};
