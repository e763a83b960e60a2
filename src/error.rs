//! Error type shared by every generation and configuration step.

use thiserror::Error;

/// Everything that can stop an avatar from being produced.
///
/// All variants are deterministic input problems: retrying with the same
/// input fails the same way, and a failed call never yields partial markup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AvatarError {
    /// The identifier string was empty.
    #[error("name is empty")]
    EmptyIdentifier,

    /// The variant name is not one of the known styles.
    #[error("invalid variant `{0}`")]
    InvalidVariant(String),

    /// A color could not be parsed as a 6-digit hex value.
    #[error("invalid hex color `{0}`")]
    InvalidColor(String),

    /// The requested render size was negative or not finite.
    #[error("size must be finite and non-negative, got {0}")]
    NegativeSize(f64),

    /// The palette did not contain exactly the expected number of colors.
    #[error("palette must contain exactly {expected} colors, got {actual}")]
    PaletteLength { expected: usize, actual: usize },

    /// Several configuration problems found in one validation pass.
    #[error("invalid configuration: {}", join(.0))]
    Invalid(Vec<AvatarError>),
}

impl AvatarError {
    /// Folds a list of validation failures into a single result.
    ///
    /// No errors is success, a single error is returned as-is, and anything
    /// more is wrapped in [`AvatarError::Invalid`].
    pub fn collect(mut errors: Vec<AvatarError>) -> Result<(), AvatarError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(AvatarError::Invalid(errors)),
        }
    }

    /// Returns the individual errors, flattening an aggregate.
    pub fn errors(&self) -> Vec<&AvatarError> {
        match self {
            AvatarError::Invalid(errors) => errors.iter().flat_map(|e| e.errors()).collect(),
            other => vec![other],
        }
    }
}

fn join(errors: &[AvatarError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
