//! Score command
//!
//! Evaluates a guess against a known secret without running a game.

use crate::core::{Code, Palette, Score};
use crate::error::{GameError, InputError};

/// Result of scoring one pair of codes
pub struct ScoreReport {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Parse and score a secret/guess pair written in palette notation
///
/// # Errors
///
/// Returns an error if either code names an unknown color, is empty, or the
/// two codes differ in length.
pub fn score_codes(palette: &Palette, secret: &str, guess: &str) -> Result<ScoreReport, GameError> {
    let secret = palette.parse_code(secret)?;
    let guess = palette.parse_code(guess)?;

    if secret.is_empty() {
        return Err(InputError::ZeroCodeLength.into());
    }

    let score = Score::evaluate(&secret, &guess)?;
    Ok(ScoreReport {
        secret,
        guess,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_named_codes() {
        let palette = Palette::default();
        let report = score_codes(&palette, "red red blue green", "red yellow yellow yellow").unwrap();

        assert_eq!(report.score, Score::new(1, 0));
        assert_eq!(palette.describe(&report.secret), "[Red, Red, Blue, Green]");
    }

    #[test]
    fn scores_initials() {
        let palette = Palette::default();
        let report = score_codes(&palette, "RGBY", "GBYR").unwrap();
        assert_eq!(report.score, Score::new(0, 4));
    }

    #[test]
    fn unknown_color_rejected() {
        let palette = Palette::default();
        assert!(matches!(
            score_codes(&palette, "RGBY", "RGBT"),
            Err(GameError::InvalidInput(InputError::UnknownColor { .. }))
        ));
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let palette = Palette::default();
        assert!(matches!(
            score_codes(&palette, "RGBY", "RGB"),
            Err(GameError::InvalidInput(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            }))
        ));
    }

    #[test]
    fn empty_secret_rejected() {
        let palette = Palette::default();
        assert!(score_codes(&palette, "", "").is_err());
    }
}
