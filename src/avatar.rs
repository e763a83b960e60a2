//! Avatar generation engine and its output.

use std::fmt;
use std::io;

use crate::error::AvatarError;
use crate::options::AvatarOptions;
use crate::profile::AvatarProfile;
use crate::variant::{Fragment, Variant};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`AvatarProfile`].
pub trait Configurable {
    /// Validates a profile and applies its settings.
    ///
    /// On failure the current settings are left untouched.
    fn apply_profile(&mut self, profile: &AvatarProfile) -> Result<(), AvatarError>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> AvatarProfile;
}

// ============================================================================
// Avatar
// ============================================================================

/// A finished SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    markup: String,
    variant: Variant,
}

impl Avatar {
    pub(crate) fn new(markup: String, variant: Variant) -> Self {
        Self { markup, variant }
    }

    /// The style this avatar was drawn in.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    /// Writes the markup to `writer`, e.g. a file or a response body.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.markup.as_bytes())
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl AsRef<str> for Avatar {
    fn as_ref(&self) -> &str {
        &self.markup
    }
}

impl From<Avatar> for String {
    fn from(avatar: Avatar) -> Self {
        avatar.markup
    }
}

// ============================================================================
// AvatarGenerator
// ============================================================================

/// Renders avatars for any number of names with one set of options.
///
/// # Example
///
/// ```
/// use boring_avatars::{AvatarGenerator, AvatarProfile, Configurable, Variant};
///
/// let mut generator = AvatarGenerator::default();
/// generator
///     .apply_profile(&AvatarProfile::new().with_variant("ring"))
///     .unwrap();
///
/// let avatar = generator.render("Mary Baker").unwrap();
/// assert_eq!(avatar.variant(), Variant::Ring);
/// assert!(avatar.as_str().starts_with("<svg viewBox=\"0 0 90 90\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AvatarGenerator {
    /// Settings used for every render. Edit them directly to reconfigure.
    pub options: AvatarOptions,
}

impl AvatarGenerator {
    pub fn new(options: AvatarOptions) -> Self {
        Self { options }
    }

    /// Creates a generator from a profile, reporting every invalid field.
    pub fn from_profile(profile: &AvatarProfile) -> Result<Self, AvatarError> {
        Ok(Self::new(profile.validate()?))
    }

    /// Produces the shapes for `name` without the surrounding document.
    pub fn fragment(&self, name: &str) -> Result<Fragment, AvatarError> {
        crate::generate(name, &self.options)
    }

    /// Produces the complete SVG document for `name`.
    pub fn render(&self, name: &str) -> Result<Avatar, AvatarError> {
        crate::render(name, &self.options)
    }
}

impl Configurable for AvatarGenerator {
    fn apply_profile(&mut self, profile: &AvatarProfile) -> Result<(), AvatarError> {
        self.options = profile.validate()?;
        Ok(())
    }

    fn export_profile(&self) -> AvatarProfile {
        AvatarProfile::from(&self.options)
    }
}
