//! Guess evaluation
//!
//! A score counts two kinds of feedback pegs:
//! - exact: right color in the right slot (black peg)
//! - color: right color in the wrong slot (white peg)
//!
//! Each secret slot and each guess slot is consumed by at most one match, so
//! duplicate colors are never counted twice.

use super::Code;
use crate::error::{GameError, InputError};

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact_matches: usize,
    color_matches: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact_matches: usize, color_matches: usize) -> Self {
        Self {
            exact_matches,
            color_matches,
        }
    }

    /// Slots with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact_matches(self) -> usize {
        self.exact_matches
    }

    /// Colors present in the secret but placed in the wrong slot
    #[inline]
    #[must_use]
    pub const fn color_matches(self) -> usize {
        self.color_matches
    }

    /// Total pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact_matches + self.color_matches
    }

    /// Whether every one of `code_length` slots matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.exact_matches == code_length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every slot where guess and secret agree is an exact match;
    ///    both slots are consumed
    /// 2. Second pass: each unconsumed guess slot, in order, takes the
    ///    lowest-index unconsumed secret slot of the same color, if any
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// // secret: Red Red Blue Green, guess: Red Yellow Yellow Yellow
    /// let secret = Code::from_indices([0, 0, 2, 1]);
    /// let guess = Code::from_indices([0, 3, 3, 3]);
    ///
    /// let score = Score::evaluate(&secret, &guess).unwrap();
    /// assert_eq!(score, Score::new(1, 0));
    /// ```
    pub fn evaluate(secret: &Code, guess: &Code) -> Result<Self, GameError> {
        let n = secret.len();
        if guess.len() != n {
            return Err(InputError::LengthMismatch {
                expected: n,
                actual: guess.len(),
            }
            .into());
        }

        let secret = secret.colors();
        let guess = guess.colors();
        let mut secret_used = vec![false; n];
        let mut guess_used = vec![false; n];
        let mut exact_matches = 0;
        let mut color_matches = 0;

        // Index needed to mark secret_used[i] and guess_used[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            if guess[i] == secret[i] {
                exact_matches += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        for (i, &color) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }
            if let Some(j) = (0..n).find(|&j| !secret_used[j] && secret[j] == color) {
                color_matches += 1;
                secret_used[j] = true;
            }
        }

        Ok(Self {
            exact_matches,
            color_matches,
        })
    }
}
