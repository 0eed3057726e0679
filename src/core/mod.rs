//! Core domain types for Mastermind
//!
//! Colors, codes, and the scoring rule. Everything here is pure and
//! deterministic; randomness and game state live in `crate::game`.

mod code;
mod color;
mod score;

pub use code::Code;
pub use color::{Color, MAX_PALETTE_SIZE, Palette, STANDARD_COLORS};
pub use score::Score;
