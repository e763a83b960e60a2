//! Serializable avatar configuration.
//!
//! An [`AvatarProfile`] is the loosely-typed, JSON-friendly mirror of
//! [`AvatarOptions`]. It is what crosses process and language boundaries
//! (CLI flags, config files, the WASM bindings) and is turned into typed
//! options by [`AvatarProfile::validate`], which reports every problem at
//! once instead of stopping at the first.
//!
//! # Example
//!
//! ```
//! use boring_avatars::{AvatarProfile, Variant};
//!
//! let profile = AvatarProfile::new().with_variant("beam").with_square(true);
//!
//! let json = profile.to_json().unwrap();
//! let restored = AvatarProfile::from_json(&json).unwrap();
//!
//! let options = restored.validate().unwrap();
//! assert_eq!(options.variant, Variant::Beam);
//! assert!(options.square);
//! ```

use serde::{Deserialize, Serialize};

use crate::colors::Palette;
use crate::error::AvatarError;
use crate::options::{AvatarOptions, Size};
use crate::variant::Variant;

// ============================================================================
// Size Settings
// ============================================================================

/// Serializable form of [`Size`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct SizeSettings {
    /// Numeric size. Must not be negative.
    pub value: f64,

    /// CSS unit appended to the value (`px`, `rem`, ...). Empty for none.
    #[serde(default)]
    pub unit: String,
}

impl From<&Size> for SizeSettings {
    fn from(size: &Size) -> Self {
        Self {
            value: size.value(),
            unit: size.unit().to_string(),
        }
    }
}

// ============================================================================
// AvatarProfile
// ============================================================================

/// A serializable profile holding every avatar setting.
///
/// Absent fields take their defaults during validation.
///
/// # JSON Format
///
/// ```json
/// {
///   "variant": "ring",
///   "colors": ["#92A1C6", "#146A7C", "#F0AB3D", "#C271B4", "#C20D90"],
///   "size": { "value": 64, "unit": "px" },
///   "square": true,
///   "title": false,
///   "classes": ["avatar"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct AvatarProfile {
    /// Style name. `None` or `""` selects marble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Exactly five colors. `None` selects the built-in palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    /// Rendered size. `None` means `40` with no unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSettings>,

    #[serde(default)]
    pub square: bool,

    #[serde(default)]
    pub title: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl AvatarProfile {
    /// Creates an empty profile where every setting takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_size(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.size = Some(SizeSettings {
            value,
            unit: unit.into(),
        });
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

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Checks every field and builds typed options.
    ///
    /// All failures are collected: one problem is returned as-is, several
    /// come back together as [`AvatarError::Invalid`].
    pub fn validate(&self) -> Result<AvatarOptions, AvatarError> {
        let mut errors = Vec::new();

        let variant = match self.variant.as_deref().map(str::parse::<Variant>) {
            None => Variant::default(),
            Some(Ok(variant)) => variant,
            Some(Err(err)) => {
                errors.push(err);
                Variant::default()
            }
        };

        let palette = match self.colors.clone().map(Palette::try_from) {
            None => Palette::default(),
            Some(Ok(palette)) => palette,
            Some(Err(err)) => {
                errors.push(err);
                Palette::default()
            }
        };

        let size = match self.size.as_ref().map(|s| Size::new(s.value, &s.unit)) {
            None => Size::default(),
            Some(Ok(size)) => size,
            Some(Err(err)) => {
                errors.push(err);
                Size::default()
            }
        };

        AvatarError::collect(errors)?;

        Ok(AvatarOptions {
            variant,
            palette,
            size,
            square: self.square,
            title: self.title,
            classes: self.classes.clone(),
        })
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&AvatarOptions> for AvatarProfile {
    fn from(options: &AvatarOptions) -> Self {
        Self {
            variant: Some(options.variant.to_string()),
            colors: Some((&options.palette).into()),
            size: Some((&options.size).into()),
            square: options.square,
            title: options.title,
            classes: options.classes.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_gives_defaults() {
        let profile = AvatarProfile::from_json("{}").unwrap();
        assert_eq!(profile, AvatarProfile::default());
        assert_eq!(profile.validate().unwrap(), AvatarOptions::default());
    }

    #[test]
    fn profile_json_format() {
        let profile = AvatarProfile::new()
            .with_variant("ring")
            .with_size(64.0, "px")
            .with_class("avatar");

        let json = profile.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"variant":"ring","size":{"value":64.0,"unit":"px"},"square":false,"title":false,"classes":["avatar"]}"#
        );
    }

    #[test]
    fn profile_parses_camel_case_json() {
        let json = r##"{
            "variant": "sunset",
            "colors": ["#111111", "#222222", "#333333", "#444444", "#555555"],
            "size": { "value": 1.5, "unit": "rem" },
            "title": true
        }"##;

        let options = AvatarProfile::from_json(json).unwrap().validate().unwrap();
        assert_eq!(options.variant, Variant::Sunset);
        assert_eq!(options.palette.pick(2), "#333333");
        assert_eq!(options.size.to_string(), "1.5rem");
        assert!(options.title);
        assert!(!options.square);
    }

    #[test]
    fn invalid_variant_alone_is_unwrapped() {
        let err = AvatarProfile::new().with_variant("nonexistent").validate().unwrap_err();
        assert_eq!(err, AvatarError::InvalidVariant("nonexistent".into()));
    }

    #[test]
    fn validation_reports_every_problem() {
        let err = AvatarProfile::new()
            .with_variant("cubist")
            .with_colors(["#000000", "#FFFFFF"])
            .with_size(-3.0, "px")
            .validate()
            .unwrap_err();

        assert_eq!(
            err,
            AvatarError::Invalid(vec![
                AvatarError::InvalidVariant("cubist".into()),
                AvatarError::PaletteLength {
                    expected: 5,
                    actual: 2
                },
                AvatarError::NegativeSize(-3.0),
            ])
        );
    }

    #[test]
    fn malformed_colors_pass_validation() {
        // Colors are only parsed by the beam generator.
        let options = AvatarProfile::new()
            .with_colors(["a", "b", "c", "d", "e"])
            .validate()
            .unwrap();
        assert_eq!(options.palette.pick(0), "a");
    }

    #[test]
    fn options_roundtrip_through_profile() {
        let options = AvatarOptions::new()
            .with_variant(Variant::Pixel)
            .with_size(Size::new(2.0, "em").unwrap())
            .with_title(true)
            .with_class("x");

        let profile = AvatarProfile::from(&options);
        let json = profile.to_json_pretty().unwrap();
        assert!(json.contains("\"variant\": \"pixel\""));

        let restored = AvatarProfile::from_json(&json).unwrap().validate().unwrap();
        assert_eq!(restored, options);
    }
}
