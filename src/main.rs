//! Mastermind - CLI
//!
//! Play in a TUI (default) or a plain text mode, or score codes directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_codes},
    core::Palette,
    game::{DEFAULT_CODE_LENGTH, DEFAULT_STARTING_ATTEMPTS, GameConfig, GameSession},
    output::{print_score_report, write_statistics},
};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of slots in the secret code
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_STARTING_ATTEMPTS)]
    attempts: u32,

    /// Explicit palette as comma-separated names (e.g. "red,green,blue")
    #[arg(short = 'c', long, global = true, value_delimiter = ',', conflicts_with = "palette_size")]
    colors: Option<Vec<String>>,

    /// Use the first N colors of the standard palette (1-6)
    #[arg(short = 'p', long, global = true)]
    palette_size: Option<usize>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "mastermind.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (type guesses such as RGBY)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The secret code, e.g. "red red blue green" or RRBG
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the game configuration from the global flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let palette = match (&cli.colors, cli.palette_size) {
        (Some(names), _) => Palette::new(names.iter().map(String::as_str))?,
        (None, Some(size)) => Palette::standard(size)?,
        (None, None) => Palette::default(),
    };

    Ok(GameConfig::new(palette, cli.length, cli.attempts)?)
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it logs to a file; other modes log to stderr.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then_some(cli.log_file.as_path());
    init_tracing(log_file)?;

    let config = build_config(&cli)?;
    info!(
        length = config.code_length(),
        attempts = config.starting_attempts(),
        colors = config.palette().len(),
        "configuration loaded"
    );

    match command {
        Commands::Play => run_play_command(config, cli.seed),
        Commands::Simple => run_simple_command(config, cli.seed),
        Commands::Score { secret, guess } => run_score_command(config.palette(), &secret, &guess),
    }
}

fn new_session(config: GameConfig, seed: Option<u64>) -> Result<GameSession> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok(GameSession::with_rng(config, rng)?)
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(new_session(config, seed)?);
    run_tui(app)
}

fn run_simple_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut session = new_session(config, seed)?;
    let stats = run_simple(&mut session)?;

    if stats.games_played > 0 {
        write_statistics(&mut std::io::stdout(), &stats)?;
    }
    Ok(())
}

fn run_score_command(palette: &Palette, secret: &str, guess: &str) -> Result<()> {
    let report = score_codes(palette, secret, guess)?;
    print_score_report(palette, &report);
    Ok(())
}
