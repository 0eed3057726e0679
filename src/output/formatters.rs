//! Formatting utilities for terminal output

use crate::core::{Code, Color, Palette, Score};
use colored::Colorize;

/// Peg shown for a right color in the right slot
pub const EXACT_PEG: char = '●';
/// Peg shown for a right color in the wrong slot
pub const COLOR_PEG: char = '○';
/// Empty feedback hole
pub const EMPTY_PEG: char = '·';
/// Width of the attempts bar in text mode, whatever the attempt count
pub const PROGRESS_BAR_WIDTH: usize = 20;

// Used for palette entries whose names we have no swatch for.
const FALLBACK_RGB: [(u8, u8, u8); 6] = [
    (0, 200, 200),
    (200, 120, 200),
    (160, 160, 160),
    (120, 200, 120),
    (200, 200, 120),
    (120, 120, 200),
];

/// Format feedback as pegs: exact first, then color-only, then empty holes
///
/// # Examples
/// ```
/// use mastermind::core::Score;
/// use mastermind::output::formatters::feedback_pegs;
///
/// assert_eq!(feedback_pegs(Score::new(1, 2), 4), "●○○·");
/// ```
#[must_use]
pub fn feedback_pegs(score: Score, code_length: usize) -> String {
    let empty = code_length.saturating_sub(score.total());
    let mut result = String::with_capacity(code_length * 3);
    result.extend(std::iter::repeat_n(EXACT_PEG, score.exact_matches()));
    result.extend(std::iter::repeat_n(COLOR_PEG, score.color_matches()));
    result.extend(std::iter::repeat_n(EMPTY_PEG, empty));
    result
}

/// Screen color for a palette entry, as RGB
///
/// Known color names get their natural swatch; anything else cycles through a
/// fixed set of distinguishable tones.
#[must_use]
pub fn swatch_rgb(palette: &Palette, color: Color) -> (u8, u8, u8) {
    let name = palette.name(color).unwrap_or_default().to_lowercase();
    match name.as_str() {
        "red" => (220, 50, 47),
        "green" => (60, 180, 75),
        "blue" => (38, 110, 230),
        "yellow" => (240, 210, 40),
        "orange" => (255, 140, 0),
        "purple" => (150, 70, 200),
        "black" => (40, 40, 40),
        "white" => (240, 240, 240),
        "pink" => (255, 130, 180),
        "cyan" => (0, 200, 220),
        "brown" => (140, 90, 40),
        _ => FALLBACK_RGB[color.index() % FALLBACK_RGB.len()],
    }
}

/// Render a code as colored swatches followed by its color names
#[must_use]
pub fn colored_code(palette: &Palette, code: &Code) -> String {
    let swatches: Vec<String> = code
        .iter()
        .map(|&color| {
            let (r, g, b) = swatch_rgb(palette, color);
            "●".truecolor(r, g, b).to_string()
        })
        .collect();

    format!("{}  {}", swatches.join(" "), palette.describe(code))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-line legend of the palette, e.g. `R=Red G=Green`
#[must_use]
pub fn palette_legend(palette: &Palette) -> String {
    palette
        .colors()
        .filter_map(|color| {
            let name = palette.name(color)?;
            Some(if palette.has_unique_initials() {
                let initial = name.chars().next()?.to_ascii_uppercase();
                format!("{initial}={name}")
            } else {
                name.to_string()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
