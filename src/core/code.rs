//! Code representation
//!
//! A Code is an ordered row of colors: either the hidden secret or a guess.

use super::Color;

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code(Vec<Color>);

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Build a code from raw palette indices
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code = Code::from_indices([0, 0, 2, 1]);
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.colors()[2], Color::new(2));
    /// ```
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        indices.into_iter().map(Color::new).collect()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_from_indices() {
        let code = Code::from_indices([3, 1, 4, 1]);
        assert_eq!(
            code.colors(),
            &[Color::new(3), Color::new(1), Color::new(4), Color::new(1)]
        );
    }

    #[test]
    fn code_equality_is_positional() {
        assert_eq!(Code::from_indices([0, 1]), Code::from_indices([0, 1]));
        assert_ne!(Code::from_indices([0, 1]), Code::from_indices([1, 0]));
    }

    #[test]
    fn empty_code() {
        let code = Code::default();
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);
    }

    #[test]
    fn iterates_in_order() {
        let code = Code::from_indices([5, 4, 3]);
        let indices: Vec<usize> = code.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![5, 4, 3]);
    }
}
