//! Terminal output formatting
//!
//! Display utilities for the text mode and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{
    print_score_report, write_board, write_help, write_outcome, write_statistics, write_welcome,
};
