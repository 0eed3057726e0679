//! Mastermind
//!
//! The code-breaking game: guess a hidden sequence of colors within a limited
//! number of attempts, guided by exact and misplaced match counts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Palette, Score};
//! use mastermind::game::{GameConfig, GameSession, GameStatus};
//!
//! // Score a guess directly
//! let palette = Palette::default();
//! let secret = palette.parse_code("red green blue yellow").unwrap();
//! let guess = palette.parse_code("GBYR").unwrap();
//! assert_eq!(Score::evaluate(&secret, &guess).unwrap(), Score::new(0, 4));
//!
//! // Or play a reproducible game
//! let mut session = GameSession::seeded(GameConfig::default(), 42).unwrap();
//! let outcome = session.submit_guess(&guess).unwrap();
//! assert_eq!(outcome.attempts_left, 9);
//! assert!(outcome.status == GameStatus::InProgress || outcome.status == GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Configuration, secret generation, and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, InputError};
