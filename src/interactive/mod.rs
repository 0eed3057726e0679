//! Interactive TUI interface
//!
//! A ratatui front end over `GameSession`. It renders the session after every
//! key press and owns no game rules of its own.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
