//! The five-color palette avatars are drawn from.

use crate::error::AvatarError;
use crate::seed::pick_color;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// The built-in palette used when none is configured.
pub const DEFAULT_COLORS: [&str; PALETTE_SIZE] =
    ["#0A0310", "#49007E", "#FF005B", "#FF7D10", "#FFB238"];

/// An ordered set of exactly five colors.
///
/// Colors are kept as given (normally `#RRGGBB`) and written into the
/// markup verbatim. They are not validated here: only the beam variant
/// parses a color, and it reports [`AvatarError::InvalidColor`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; PALETTE_SIZE],
}

impl Palette {
    /// Creates a palette from five colors.
    pub fn new(colors: [impl Into<String>; PALETTE_SIZE]) -> Self {
        Self {
            colors: colors.map(Into::into),
        }
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Picks a color by cycling through the palette.
    pub fn pick(&self, number: u64) -> &str {
        pick_color(number, &self.colors)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = AvatarError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        let actual = colors.len();
        let colors: [String; PALETTE_SIZE] =
            colors.try_into().map_err(|_| AvatarError::PaletteLength {
                expected: PALETTE_SIZE,
                actual,
            })?;

        Ok(Self { colors })
    }
}

impl From<&Palette> for Vec<String> {
    fn from(palette: &Palette) -> Self {
        palette.colors.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors(), DEFAULT_COLORS);
        assert_eq!(palette.pick(0), "#0A0310");
        assert_eq!(palette.pick(7), "#FF005B");
    }

    #[test]
    fn from_vec_requires_five_colors() {
        let four = vec!["#000000".to_string(); 4];
        assert_eq!(
            Palette::try_from(four),
            Err(AvatarError::PaletteLength {
                expected: 5,
                actual: 4
            })
        );

        let five: Vec<String> = ["#1", "#2", "#3", "#4", "#5"].map(String::from).to_vec();
        let palette = Palette::try_from(five).unwrap();
        assert_eq!(palette.pick(9), "#5");
    }
}
