//! Game session state machine
//!
//! A session owns the secret, the attempt budget, and the status:
//!
//! ```text
//! InProgress --exact guess--> Won
//! InProgress --last attempt--> Lost
//! any --reset--> InProgress
//! ```

use super::generator::draw_secret;
use super::{GameConfig, generate_secret};
use crate::core::{Code, Score};
use crate::error::{GameError, InputError};
use derive_more::Display;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use tracing::{debug, info, instrument};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("won")]
    Won,
    #[display("lost")]
    Lost,
}

impl GameStatus {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// Everything a caller needs to render the result of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub score: Score,
    pub attempts_left: u32,
    pub status: GameStatus,
    /// The secret, present only on the guess that ended the game
    pub revealed_secret: Option<Code>,
}

/// A single game of Mastermind
///
/// All mutation goes through `&mut self`, so a session has exactly one owner
/// driving it. Independent sessions share nothing.
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    rng: R,
    secret: Code,
    attempts_left: u32,
    status: GameStatus,
    turns: Vec<Turn>,
}

impl GameSession<StdRng> {
    /// Start a game with an RNG seeded from the operating system
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a reproducible game
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the configuration is invalid.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game that draws secrets from `rng`
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, GameSession, GameStatus};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let session = GameSession::with_rng(GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert_eq!(session.attempts_left(), 10);
    /// ```
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let secret = generate_secret(config.palette(), config.code_length(), &mut rng)?;
        let attempts_left = config.starting_attempts();

        info!(
            colors = config.palette().len(),
            code_length = config.code_length(),
            attempts = attempts_left,
            "new game session"
        );

        Ok(Self {
            config,
            rng,
            secret,
            attempts_left,
            status: GameStatus::InProgress,
            turns: Vec::new(),
        })
    }

    /// Score a guess and advance the game
    ///
    /// Checks run before anything changes, so a rejected guess leaves the
    /// session exactly as it was.
    ///
    /// # Errors
    /// - `GameError::SessionClosed` once the game is won or lost
    /// - `GameError::InvalidInput` if the guess has the wrong length or uses a
    ///   color outside the palette
    #[instrument(skip(self, guess), fields(attempts_left = self.attempts_left))]
    pub fn submit_guess(&mut self, guess: &Code) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() || self.attempts_left == 0 {
            debug!(status = %self.status, "guess rejected, session closed");
            return Err(GameError::SessionClosed {
                status: self.status,
            });
        }

        let expected = self.config.code_length();
        if guess.len() != expected {
            return Err(InputError::LengthMismatch {
                expected,
                actual: guess.len(),
            }
            .into());
        }

        let palette = self.config.palette();
        if let Some((slot, &color)) = guess
            .iter()
            .enumerate()
            .find(|&(_, &color)| !palette.contains(color))
        {
            return Err(InputError::ColorOutsidePalette { slot, color }.into());
        }

        let score = Score::evaluate(&self.secret, guess)?;
        self.attempts_left -= 1;
        self.turns.push(Turn {
            guess: guess.clone(),
            score,
        });

        debug!(
            guess = %palette.describe(guess),
            exact = score.exact_matches(),
            color = score.color_matches(),
            attempts_left = self.attempts_left,
            "guess scored"
        );

        if score.is_solved(expected) {
            self.status = GameStatus::Won;
            info!(attempts_used = self.attempts_used(), "code broken");
        } else if self.attempts_left == 0 {
            self.status = GameStatus::Lost;
            info!(secret = %palette.describe(&self.secret), "out of attempts");
        }

        Ok(GuessOutcome {
            score,
            attempts_left: self.attempts_left,
            status: self.status,
            revealed_secret: self.status.is_over().then(|| self.secret.clone()),
        })
    }

    /// Discard the current game and start a fresh one with a new secret
    #[instrument(skip(self), fields(previous = %self.status))]
    pub fn reset(&mut self) {
        // The config was validated at construction and never changes.
        self.secret = draw_secret(self.config.palette(), self.config.code_length(), &mut self.rng);
        self.attempts_left = self.config.starting_attempts();
        self.status = GameStatus::InProgress;
        self.turns.clear();
        debug!("session reset");
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Guesses accepted so far in this game
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.config.starting_attempts() - self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Accepted guesses of the current game, oldest first
    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The secret, but only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.status.is_over().then_some(&self.secret)
    }
}

impl<R> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The secret stays out of debug output while the game is running.
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("attempts_left", &self.attempts_left)
            .field("status", &self.status)
            .field("turns", &self.turns.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Palette};

    const SEED: u64 = 42;

    fn session(config: GameConfig) -> GameSession {
        GameSession::seeded(config, SEED).unwrap()
    }

    /// The secret a session seeded with `seed` draws first
    fn expected_secret(config: &GameConfig, seed: u64) -> Code {
        generate_secret(
            config.palette(),
            config.code_length(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    /// A code that shares no color with `secret`, using a palette color it lacks
    fn wrong_guess(config: &GameConfig, secret: &Code) -> Code {
        let missing = config
            .palette()
            .colors()
            .find(|c| !secret.iter().any(|s| s == c))
            .unwrap();
        Code::new(vec![missing; config.code_length()])
    }

    #[test]
    fn new_session_starts_in_progress() {
        let s = session(GameConfig::default());
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.attempts_left(), 10);
        assert_eq!(s.attempts_used(), 0);
        assert!(s.turns().is_empty());
        assert!(s.revealed_secret().is_none());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = GameConfig::default().with_code_length(0);
        assert!(matches!(
            GameSession::seeded(config, SEED),
            Err(GameError::InvalidInput(InputError::ZeroCodeLength))
        ));
    }

    #[test]
    fn correct_guess_wins_and_decrements() {
        let config = GameConfig::default();
        let secret = expected_secret(&config, SEED);
        let mut s = session(config);

        let outcome = s.submit_guess(&secret).unwrap();

        assert_eq!(outcome.score, Score::new(4, 0));
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.attempts_left, 9);
        assert_eq!(outcome.revealed_secret, Some(secret.clone()));
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.revealed_secret(), Some(&secret));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let config = GameConfig::default().with_starting_attempts(2);
        let secret = expected_secret(&config, SEED);
        let miss = wrong_guess(&config, &secret);
        let mut s = session(config);

        assert_eq!(s.submit_guess(&miss).unwrap().status, GameStatus::InProgress);
        let outcome = s.submit_guess(&secret).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.attempts_left, 0);
    }

    #[test]
    fn running_out_of_attempts_loses_and_reveals() {
        let config = GameConfig::default().with_starting_attempts(3);
        let secret = expected_secret(&config, SEED);
        let miss = wrong_guess(&config, &secret);
        let mut s = session(config);

        for left in [2, 1] {
            let outcome = s.submit_guess(&miss).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress);
            assert_eq!(outcome.attempts_left, left);
            assert_eq!(outcome.revealed_secret, None);
        }

        let last = s.submit_guess(&miss).unwrap();
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(last.attempts_left, 0);
        assert_eq!(last.revealed_secret, Some(secret));
    }

    #[test]
    fn secret_stable_across_guesses() {
        let config = GameConfig::default().with_starting_attempts(4);
        let secret = expected_secret(&config, SEED);
        let miss = wrong_guess(&config, &secret);
        let mut s = session(config);

        let mut last = None;
        while s.status() == GameStatus::InProgress {
            last = s.submit_guess(&miss).unwrap().revealed_secret;
        }
        // Every score was computed against the secret that is finally revealed
        assert!(s.turns().iter().all(|t| t.score == Score::new(0, 0)));
        assert_eq!(last, Some(secret));
    }

    #[test]
    fn guess_after_win_is_session_closed() {
        let config = GameConfig::default();
        let secret = expected_secret(&config, SEED);
        let mut s = session(config);
        s.submit_guess(&secret).unwrap();

        let err = s.submit_guess(&secret).unwrap_err();
        assert_eq!(
            err,
            GameError::SessionClosed {
                status: GameStatus::Won
            }
        );
        assert_eq!(s.attempts_left(), 9);
        assert_eq!(s.turns().len(), 1);
    }

    #[test]
    fn guess_after_loss_is_session_closed() {
        let config = GameConfig::default().with_starting_attempts(1);
        let secret = expected_secret(&config, SEED);
        let miss = wrong_guess(&config, &secret);
        let mut s = session(config);
        s.submit_guess(&miss).unwrap();

        assert!(matches!(
            s.submit_guess(&secret),
            Err(GameError::SessionClosed {
                status: GameStatus::Lost
            })
        ));
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.attempts_left(), 0);
    }

    #[test]
    fn wrong_length_guess_leaves_state_untouched() {
        let mut s = session(GameConfig::default());
        let err = s.submit_guess(&Code::from_indices([0, 1, 2])).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidInput(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(s.attempts_left(), 10);
        assert!(s.turns().is_empty());
    }

    #[test]
    fn off_palette_color_rejected() {
        let config = GameConfig::default().with_palette(Palette::standard(4).unwrap());
        let mut s = session(config);

        let err = s.submit_guess(&Code::from_indices([0, 1, 5, 2])).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidInput(InputError::ColorOutsidePalette {
                slot: 2,
                color: Color::new(5)
            })
        );
        assert_eq!(s.attempts_left(), 10);
    }

    #[test]
    fn reset_restores_fresh_game() {
        let config = GameConfig::default().with_starting_attempts(1);
        let secret = expected_secret(&config, SEED);
        let miss = wrong_guess(&config, &secret);
        let mut s = session(config);
        s.submit_guess(&miss).unwrap();
        assert_eq!(s.status(), GameStatus::Lost);

        s.reset();

        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.attempts_left(), 1);
        assert!(s.turns().is_empty());
        assert!(s.revealed_secret().is_none());
        assert!(s.submit_guess(&miss).is_ok());
    }

    #[test]
    fn reset_draws_next_secret_from_rng() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(SEED);
        // First draw belongs to the game created at construction
        generate_secret(config.palette(), 4, &mut rng).unwrap();
        let second = generate_secret(config.palette(), 4, &mut rng).unwrap();

        let mut s = session(config);
        s.reset();
        let outcome = s.submit_guess(&second).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.revealed_secret, Some(second));
    }

    #[test]
    fn every_reset_replaces_the_secret() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(SEED);
        let draws: Vec<Code> = (0..4)
            .map(|_| generate_secret(config.palette(), 4, &mut rng).unwrap())
            .collect();

        let mut s = session(config);
        for expected in &draws[1..] {
            s.reset();
            s.submit_guess(expected).unwrap();
            assert_eq!(s.revealed_secret(), Some(expected));
        }
    }

    #[test]
    fn turns_record_history_in_order() {
        let config = GameConfig::default();
        let mut s = session(config);
        let a = Code::from_indices([0, 0, 0, 0]);
        let b = Code::from_indices([1, 1, 1, 1]);
        s.submit_guess(&a).ok();
        s.submit_guess(&b).ok();

        let guesses: Vec<&Code> = s.turns().iter().map(|t| &t.guess).collect();
        assert_eq!(guesses.len(), s.attempts_used() as usize);
        assert_eq!(guesses[0], &a);
    }

    #[test]
    fn debug_output_hides_secret() {
        let s = session(GameConfig::default());
        let text = format!("{s:?}");
        assert!(text.contains("attempts_left"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert!(GameStatus::Won.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}
