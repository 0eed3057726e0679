//! Colors and the palette they are drawn from
//!
//! A `Color` is only an index; the `Palette` owns the names and handles text parsing.

use super::Code;
use crate::error::InputError;
use rustc_hash::FxHashMap;
use std::fmt::Write as _;

/// Names of the standard six-color palette, in palette order
pub const STANDARD_COLORS: [&str; 6] = ["Red", "Green", "Blue", "Yellow", "Orange", "Purple"];

/// Largest palette a `Color` index can address
pub const MAX_PALETTE_SIZE: usize = u8::MAX as usize + 1;

/// One peg color, identified by its position in a palette
///
/// Colors compare by identity only. The index has no meaning outside the palette
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position of this color in its palette
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered set of distinct, named colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
    by_name: FxHashMap<String, Color>,
    // Present only when every color starts with a different letter.
    by_initial: Option<FxHashMap<char, Color>>,
}

impl Palette {
    /// Build a palette from color names
    ///
    /// Names are trimmed; lookups are case-insensitive.
    ///
    /// # Errors
    /// Returns `InputError` if the list is empty, too large, contains a blank
    /// name, or names the same color twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::new(["Black", "White", "Cyan"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert!(Palette::new(["Red", "red"]).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.into().trim().to_string())
            .collect();

        if names.is_empty() {
            return Err(InputError::EmptyPalette);
        }
        if names.len() > MAX_PALETTE_SIZE {
            return Err(InputError::PaletteTooLarge { size: names.len() });
        }

        let mut by_name = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(InputError::BlankColorName { position: i });
            }
            if by_name
                .insert(name.to_lowercase(), Color::new(i as u8))
                .is_some()
            {
                return Err(InputError::DuplicateColor { name: name.clone() });
            }
        }

        let mut by_initial = FxHashMap::default();
        let mut unique = true;
        for (i, name) in names.iter().enumerate() {
            let Some(initial) = name.chars().next().map(|c| c.to_ascii_lowercase()) else {
                continue;
            };
            if by_initial.insert(initial, Color::new(i as u8)).is_some() {
                unique = false;
                break;
            }
        }

        Ok(Self {
            names,
            by_name,
            by_initial: unique.then_some(by_initial),
        })
    }

    /// The first `size` colors of the standard palette
    ///
    /// # Errors
    /// Returns `InputError::EmptyPalette` for a size of zero and
    /// `InputError::PaletteTooLarge` above six.
    pub fn standard(size: usize) -> Result<Self, InputError> {
        if size > STANDARD_COLORS.len() {
            return Err(InputError::PaletteTooLarge { size });
        }
        Self::new(STANDARD_COLORS[..size].iter().copied())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `color` indexes into this palette
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        color.index() < self.names.len()
    }

    /// All colors in palette order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.names.len()).map(|i| Color::new(i as u8))
    }

    /// Display name of a color, or `None` if it is not in this palette
    #[must_use]
    pub fn name(&self, color: Color) -> Option<&str> {
        self.names.get(color.index()).map(String::as_str)
    }

    /// Whether single-letter shorthand (`RGBY`) can be used with this palette
    #[must_use]
    pub const fn has_unique_initials(&self) -> bool {
        self.by_initial.is_some()
    }

    /// Look up a color by its initial letter
    #[must_use]
    pub fn by_initial(&self, initial: char) -> Option<Color> {
        self.by_initial
            .as_ref()?
            .get(&initial.to_ascii_lowercase())
            .copied()
    }

    /// Parse one color from its full name or, when unambiguous, its initial
    ///
    /// # Errors
    /// Returns `InputError::UnknownColor` if the text matches no color.
    pub fn parse_color(&self, text: &str) -> Result<Color, InputError> {
        let text = text.trim();
        if let Some(&color) = self.by_name.get(&text.to_lowercase()) {
            return Ok(color);
        }

        let mut chars = text.chars();
        if let (Some(initial), None) = (chars.next(), chars.next())
            && let Some(color) = self.by_initial(initial)
        {
            return Ok(color);
        }

        Err(InputError::UnknownColor {
            name: text.to_string(),
        })
    }

    /// Parse a code written as color names or as a string of initials
    ///
    /// Accepts:
    /// - names separated by whitespace and/or commas: `red, green blue yellow`
    /// - compact initials when the palette allows it: `RGBY`
    ///
    /// The length is not checked here; the session rejects codes of the wrong length.
    ///
    /// # Errors
    /// Returns `InputError::UnknownColor` for the first token that matches no color.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::default();
    /// let a = palette.parse_code("red green blue yellow").unwrap();
    /// let b = palette.parse_code("RGBY").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code, InputError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        if let [token] = tokens.as_slice()
            && !self.by_name.contains_key(&token.to_lowercase())
            && self.has_unique_initials()
        {
            return token
                .chars()
                .map(|initial| {
                    self.by_initial(initial)
                        .ok_or_else(|| InputError::UnknownColor {
                            name: initial.to_string(),
                        })
                })
                .collect();
        }

        tokens.iter().map(|token| self.parse_color(token)).collect()
    }

    /// Render a code with color names, e.g. `[Red, Red, Blue, Green]`
    #[must_use]
    pub fn describe(&self, code: &Code) -> String {
        let mut out = String::from("[");
        for (i, &color) in code.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match self.name(color) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "#{}", color.index());
                }
            }
        }
        out.push(']');
        out
    }
}

impl Default for Palette {
    fn default() -> Self {
        let names: Vec<String> = STANDARD_COLORS.iter().map(|&s| s.to_string()).collect();
        let by_name = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), Color::new(i as u8)))
            .collect();
        let by_initial = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                name.chars()
                    .next()
                    .map(|c| (c.to_ascii_lowercase(), Color::new(i as u8)))
            })
            .collect();

        Self {
            names,
            by_name,
            by_initial: Some(by_initial),
        }
    }
}
