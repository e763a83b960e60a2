//! Typed avatar configuration.

use std::fmt;

use crate::colors::Palette;
use crate::error::AvatarError;
use crate::variant::Variant;

// ============================================================================
// Size
// ============================================================================

/// The rendered `width`/`height` of the document, e.g. `40`, `64px`, `1.5rem`.
///
/// Only the envelope reads this; it never influences shape layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Size {
    value: f64,
    unit: String,
}

impl Size {
    /// Creates a size, lower-casing the unit.
    ///
    /// Fails with [`AvatarError::NegativeSize`] for negative, NaN or infinite
    /// values.
    pub fn new(value: f64, unit: impl AsRef<str>) -> Result<Self, AvatarError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AvatarError::NegativeSize(value));
        }

        Ok(Self {
            value,
            unit: unit.as_ref().to_lowercase(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            value: 40.0,
            unit: String::new(),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

// ============================================================================
// AvatarOptions
// ============================================================================

/// Everything that shapes one avatar besides its name.
///
/// Only `variant` and `palette` reach the generators; the remaining fields
/// are envelope hints.
///
/// # Example
///
/// ```
/// use boring_avatars::{AvatarOptions, Size, Variant};
///
/// let options = AvatarOptions::new()
///     .with_variant(Variant::Beam)
///     .with_size(Size::new(64.0, "PX").unwrap())
///     .with_square(true)
///     .with_class("avatar");
///
/// assert_eq!(options.size.to_string(), "64px");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarOptions {
    /// The visual style.
    pub variant: Variant,

    /// The five colors shapes are filled with.
    pub palette: Palette,

    /// Rendered width and height.
    pub size: Size,

    /// Square mask instead of a circle.
    pub square: bool,

    /// Emit a `<title>` element containing the name.
    pub title: bool,

    /// Classes for the root `<svg>` element.
    pub classes: Vec<String>,
}

impl AvatarOptions {
    /// Creates the default options: marble, default palette, size 40, round.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Adds one class to the root element.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting() {
        assert_eq!(Size::default().to_string(), "40");
        assert_eq!(Size::new(40.0, "px").unwrap().to_string(), "40px");
        assert_eq!(Size::new(1.5, "REM").unwrap().to_string(), "1.5rem");
        assert_eq!(Size::new(0.0, "").unwrap().to_string(), "0");
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(Size::new(-1.0, "px"), Err(AvatarError::NegativeSize(-1.0)));
        assert!(Size::new(f64::NAN, "px").is_err());
    }

    #[test]
    fn infinite_size_is_rejected() {
        assert_eq!(
            Size::new(f64::INFINITY, ""),
            Err(AvatarError::NegativeSize(f64::INFINITY))
        );
        assert!(Size::new(f64::NEG_INFINITY, "px").is_err());
        assert!(Size::new(f64::MAX, "px").is_ok());
    }

    #[test]
    fn defaults() {
        let options = AvatarOptions::new();
        assert_eq!(options.variant, Variant::Marble);
        assert_eq!(options.palette, Palette::default());
        assert!(!options.square);
        assert!(!options.title);
        assert!(options.classes.is_empty());
    }

    #[test]
    fn classes_accumulate() {
        let options = AvatarOptions::new().with_class("single").with_class("double");
        assert_eq!(options.classes, ["single", "double"]);
    }
}
