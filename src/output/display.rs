//! Display functions for game results

use super::formatters::{
    PROGRESS_BAR_WIDTH, colored_code, create_progress_bar, feedback_pegs, palette_legend,
};
use crate::commands::ScoreReport;
use crate::core::{Code, Palette};
use crate::game::{GameConfig, GameStatus, GuessOutcome, Statistics, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of the `score` command
pub fn print_score_report(palette: &Palette, report: &ScoreReport) {
    let n = report.secret.len();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", colored_code(palette, &report.secret));
    println!("Guess:  {}", colored_code(palette, &report.guess));
    println!("{}", "─".repeat(60).cyan());
    println!("Correct positions: {}", report.score.exact_matches());
    println!(
        "Correct colors but wrong positions: {}",
        report.score.color_matches()
    );
    println!("Pegs: {}", feedback_pegs(report.score, n));
    if report.score.is_solved(n) {
        println!("{}", "✅ Guess breaks the code".green().bold());
    }
}

/// Write the opening banner and rules for a game
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_welcome(out: &mut impl Write, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Mastermind - Text Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Break the {}-color secret code in {} attempts. Colors may repeat.",
        config.code_length(),
        config.starting_attempts()
    )?;
    writeln!(out, "Colors: {}", palette_legend(config.palette()))?;
    writeln!(
        out,
        "Feedback: {} right color and slot, {} right color wrong slot\n",
        super::formatters::EXACT_PEG,
        super::formatters::COLOR_PEG
    )?;
    write_help(out)
}

/// Write the list of text-mode commands
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Enter a guess as names (red green blue yellow) or initials (RGBY)."
    )?;
    writeln!(
        out,
        "Commands: 'history' to show the board, 'new' for a new game, 'quit' to exit\n"
    )
}

/// Write the feedback for one guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_outcome(
    out: &mut impl Write,
    config: &GameConfig,
    guess: &Code,
    outcome: &GuessOutcome,
) -> io::Result<()> {
    let n = config.code_length();
    let total = config.starting_attempts();

    writeln!(out, "\n{}", colored_code(config.palette(), guess))?;
    writeln!(out, "Correct positions: {}", outcome.score.exact_matches())?;
    writeln!(
        out,
        "Correct colors but wrong positions: {}",
        outcome.score.color_matches()
    )?;
    writeln!(
        out,
        "{}   Attempts left: {} [{}]",
        feedback_pegs(outcome.score, n),
        outcome.attempts_left,
        create_progress_bar(outcome.attempts_left, total, PROGRESS_BAR_WIDTH)
    )?;

    match outcome.status {
        GameStatus::InProgress => {}
        GameStatus::Won => {
            let used = total - outcome.attempts_left;
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "🎉 Congratulations! You guessed the correct code!"
                    .bright_green()
                    .bold()
            )?;
            writeln!(
                out,
                "Solved in {} {}",
                used.to_string().bright_cyan().bold(),
                if used == 1 { "attempt" } else { "attempts" }
            )?;
            writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
        }
        GameStatus::Lost => {
            writeln!(out, "\n{}", "═".repeat(60).red())?;
            writeln!(
                out,
                "{}",
                "Game Over! You've used all your attempts.".red().bold()
            )?;
            if let Some(secret) = &outcome.revealed_secret {
                writeln!(
                    out,
                    "The secret code was: {}",
                    colored_code(config.palette(), secret)
                )?;
            }
            writeln!(out, "{}", "═".repeat(60).red())?;
        }
    }

    Ok(())
}

/// Write every guess of the current game with its feedback
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_board(out: &mut impl Write, config: &GameConfig, turns: &[Turn]) -> io::Result<()> {
    if turns.is_empty() {
        return writeln!(out, "No guesses yet.");
    }

    writeln!(out, "\nBoard:")?;
    for (i, turn) in turns.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            feedback_pegs(turn.score, config.code_length()),
            colored_code(config.palette(), &turn.guess)
        )?;
    }
    writeln!(out)
}

/// Write the running tally
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;
    if let Some(avg) = stats.average_attempts() {
        writeln!(out, "Average attempts per win: {avg:.1}")?;
    }
    Ok(())
}
