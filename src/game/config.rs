//! Game configuration

use crate::core::Palette;
use crate::error::{GameError, InputError};

/// Number of slots in a code unless configured otherwise
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_STARTING_ATTEMPTS: u32 = 10;

/// Rules for one game: palette, code length, and attempt budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Palette,
    code_length: usize,
    starting_attempts: u32,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `code_length` or
    /// `starting_attempts` is zero.
    pub fn new(
        palette: Palette,
        code_length: usize,
        starting_attempts: u32,
    ) -> Result<Self, GameError> {
        let config = Self {
            palette,
            code_length,
            starting_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    #[must_use]
    pub const fn with_starting_attempts(mut self, starting_attempts: u32) -> Self {
        self.starting_attempts = starting_attempts;
        self
    }

    /// Check the invariants a session relies on
    ///
    /// Palettes are validated when built, so only the counts are checked here.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` describing the first violated rule.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.palette.is_empty() {
            return Err(InputError::EmptyPalette.into());
        }
        if self.code_length == 0 {
            return Err(InputError::ZeroCodeLength.into());
        }
        if self.starting_attempts == 0 {
            return Err(InputError::ZeroAttempts.into());
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn starting_attempts(&self) -> u32 {
        self.starting_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            code_length: DEFAULT_CODE_LENGTH,
            starting_attempts: DEFAULT_STARTING_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.palette().len(), 6);
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.starting_attempts(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::default()
            .with_palette(Palette::standard(4).unwrap())
            .with_code_length(5)
            .with_starting_attempts(12);

        assert_eq!(config.palette().len(), 4);
        assert_eq!(config.code_length(), 5);
        assert_eq!(config.starting_attempts(), 12);
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(
            GameConfig::new(Palette::default(), 0, 10),
            Err(GameError::InvalidInput(InputError::ZeroCodeLength))
        );
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = GameConfig::default().with_starting_attempts(0);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidInput(InputError::ZeroAttempts))
        );
    }

    #[test]
    fn single_slot_single_attempt_is_valid() {
        let config = GameConfig::new(Palette::standard(1).unwrap(), 1, 1).unwrap();
        assert_eq!(config.code_length(), 1);
    }
}
