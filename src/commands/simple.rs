//! Simple text mode
//!
//! Line-oriented game without the TUI

use crate::core::{Code, Palette};
use crate::error::{GameError, InputError};
use crate::game::{GameSession, Statistics};
use crate::output::{write_board, write_help, write_outcome, write_statistics, write_welcome};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    Guess(Code),
    New,
    History,
    Help,
    Quit,
}

impl TextCommand {
    /// Interpret a line: a known command word, otherwise a guess
    ///
    /// Commands are whole words only, so a single letter always reads as a
    /// color initial.
    ///
    /// # Errors
    /// Returns `InputError::UnknownColor` if the line is neither a command nor
    /// a parsable code.
    pub fn parse(palette: &Palette, line: &str) -> Result<Self, InputError> {
        match line.trim().to_lowercase().as_str() {
            "quit" => Ok(Self::Quit),
            "new" => Ok(Self::New),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            _ => palette.parse_code(line).map(Self::Guess),
        }
    }
}

/// Run the text mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<Statistics> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    play_text(session, &mut input, &mut out)
}

/// Drive a session from `input`, writing everything to `out`
///
/// Stops on `quit`, on end of input, or when the player declines another game.
/// Returns the tally of games finished along the way.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_text<R, I, W>(session: &mut GameSession<R>, input: &mut I, out: &mut W) -> Result<Statistics>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();
    write_welcome(out, session.config())?;

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts_used() + 1,
            session.config().starting_attempts()
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match TextCommand::parse(session.config().palette(), &line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "❌ {e}\n")?;
                continue;
            }
        };

        match command {
            TextCommand::Quit => break,
            TextCommand::Help => write_help(out)?,
            TextCommand::History => write_board(out, session.config(), session.turns())?,
            TextCommand::New => {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            TextCommand::Guess(guess) => match session.submit_guess(&guess) {
                Ok(outcome) => {
                    write_outcome(out, session.config(), &guess, &outcome)?;
                    if outcome.status.is_over() {
                        stats.record(outcome.status, session.attempts_used());
                        write_statistics(out, &stats)?;

                        if !ask_play_again(input, out)? {
                            break;
                        }
                        session.reset();
                        writeln!(out, "\n🔄 New game started!\n")?;
                    }
                }
                Err(GameError::SessionClosed { status }) => {
                    writeln!(out, "Game is {status}. Type 'new' to play again.\n")?;
                }
                Err(e) => {
                    debug!(error = %e, "guess rejected");
                    writeln!(out, "❌ {e}\n")?;
                }
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn ask_play_again<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> Result<bool> {
    let answer = read_line(input, out, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, W: Write>(input: &mut I, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
