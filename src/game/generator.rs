//! Secret code generation

use crate::core::{Code, Color, Palette};
use crate::error::{GameError, InputError};
use rand::Rng;
use tracing::debug;

/// Draw a random secret of `length` slots from `palette`
///
/// Every slot is sampled uniformly and independently, so colors may repeat.
/// The result is fully determined by the state of `rng`.
///
/// # Errors
/// Returns `GameError::InvalidInput` if the palette is empty or `length` is zero.
///
/// # Examples
/// ```
/// use mastermind::core::Palette;
/// use mastermind::game::generate_secret;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let palette = Palette::default();
/// let a = generate_secret(&palette, 4, &mut StdRng::seed_from_u64(7)).unwrap();
/// let b = generate_secret(&palette, 4, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_secret<R: Rng + ?Sized>(
    palette: &Palette,
    length: usize,
    rng: &mut R,
) -> Result<Code, GameError> {
    if palette.is_empty() {
        return Err(InputError::EmptyPalette.into());
    }
    if length == 0 {
        return Err(InputError::ZeroCodeLength.into());
    }

    Ok(draw_secret(palette, length, rng))
}

/// Draw a secret without checking its inputs
///
/// Callers must hold a validated `GameConfig`: a non-empty palette and a
/// non-zero length.
pub(crate) fn draw_secret<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Code {
    let secret: Code = (0..length)
        .map(|_| Color::new(rng.random_range(0..palette.len()) as u8))
        .collect();

    debug!(secret = %palette.describe(&secret), "generated secret code");
    secret
}
