//! Error types for the game core
//!
//! Every error is local and recoverable. A rejected guess never changes the session.

use crate::core::Color;
use crate::game::GameStatus;
use derive_more::{Display, Error, From};

/// Reason an input (guess, code text, or configuration) was rejected
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Guess and secret have different lengths.
    #[display("code must have exactly {expected} colors, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A slot holds a color the configured palette does not contain.
    #[display("slot {} holds color #{} which is not in the palette", slot + 1, color.index())]
    ColorOutsidePalette { slot: usize, color: Color },

    /// Text that does not name any palette color.
    #[display("unknown color '{name}'")]
    UnknownColor { name: String },

    /// The palette has no colors.
    #[display("palette must contain at least one color")]
    EmptyPalette,

    /// The palette has more colors than a `Color` can address.
    #[display("palette has {size} colors, at most 256 are supported")]
    PaletteTooLarge { size: usize },

    /// A palette entry is empty or only whitespace.
    #[display("palette entry {} has a blank name", position + 1)]
    BlankColorName { position: usize },

    /// Two palette entries share a name (case-insensitive).
    #[display("palette lists '{name}' more than once")]
    DuplicateColor { name: String },

    /// Codes must have at least one slot.
    #[display("code length must be at least 1")]
    ZeroCodeLength,

    /// A game must allow at least one attempt.
    #[display("starting attempts must be at least 1")]
    ZeroAttempts,
}

/// Error returned by game operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The caller supplied a malformed guess or configuration.
    #[display("invalid input: {_0}")]
    #[from]
    InvalidInput(#[error(source)] InputError),

    /// A guess was submitted after the game ended.
    #[display("game is over ({status}); start a new game to keep playing")]
    SessionClosed { status: GameStatus },
}
