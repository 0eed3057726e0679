//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, score_codes};
pub use simple::{TextCommand, play_text, run_simple};
