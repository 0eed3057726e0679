//! Game rules around the scoring core
//!
//! Configuration, secret generation, the session state machine, and a
//! running tally of finished games.

mod config;
mod generator;
mod session;
mod stats;

pub use config::{DEFAULT_CODE_LENGTH, DEFAULT_STARTING_ATTEMPTS, GameConfig};
pub use generator::generate_secret;
pub use session::{GameSession, GameStatus, GuessOutcome, Turn};
pub use stats::Statistics;
