//! Variant generators.
//!
//! Each style lives in its own module and implements [`Generator`]: first
//! derive a property record from the name's seed, then lay out a fixed list
//! of shapes from it. Generators share nothing but the helpers in
//! [`crate::seed`], and every call recomputes everything from its inputs.

pub mod bauhaus;
pub mod beam;
pub mod marble;
pub mod pixel;
pub mod ring;
pub mod sunset;

pub use bauhaus::Bauhaus;
pub use beam::Beam;
pub use marble::Marble;
pub use pixel::Pixel;
pub use ring::Ring;
pub use sunset::Sunset;

use std::fmt;
use std::str::FromStr;

use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::hash_code;
use crate::shape::Shape;

// ============================================================================
// Variant
// ============================================================================

/// The visual styles an avatar can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Blurred overlapping blobs (the default).
    #[default]
    Marble,
    /// An 8x8 grid of flat squares.
    Pixel,
    /// Geometric rect, circle and line composition.
    Bauhaus,
    /// Concentric half-arcs around a center dot.
    Ring,
    /// Two vertical gradient bands.
    Sunset,
    /// A cartoon face on a tilted rounded square.
    Beam,
}

impl Variant {
    /// All variants, default first.
    pub const ALL: [Variant; 6] = [
        Variant::Marble,
        Variant::Pixel,
        Variant::Bauhaus,
        Variant::Ring,
        Variant::Sunset,
        Variant::Beam,
    ];

    /// Returns the lowercase style name.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Marble => "marble",
            Variant::Pixel => "pixel",
            Variant::Bauhaus => "bauhaus",
            Variant::Ring => "ring",
            Variant::Sunset => "sunset",
            Variant::Beam => "beam",
        }
    }

    /// Side length of the variant's square viewBox.
    pub fn canvas_size(self) -> u32 {
        match self {
            Variant::Marble => Marble::CANVAS,
            Variant::Pixel => Pixel::CANVAS,
            Variant::Bauhaus => Bauhaus::CANVAS,
            Variant::Ring => Ring::CANVAS,
            Variant::Sunset => Sunset::CANVAS,
            Variant::Beam => Beam::CANVAS,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = AvatarError;

    /// Parses a style name. The empty string selects the default marble style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "marble" => Ok(Variant::Marble),
            "pixel" => Ok(Variant::Pixel),
            "bauhaus" => Ok(Variant::Bauhaus),
            "ring" => Ok(Variant::Ring),
            "sunset" => Ok(Variant::Sunset),
            "beam" => Ok(Variant::Beam),
            other => Err(AvatarError::InvalidVariant(other.to_string())),
        }
    }
}

// ============================================================================
// Fragment
// ============================================================================

/// The output of one generator: body shapes plus optional `<defs>` content.
///
/// A fragment is everything the envelope needs to finish the document; it
/// knows nothing about size, mask shape, title or classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The style that produced this fragment.
    pub variant: Variant,

    /// Side length of the viewBox.
    pub canvas: u32,

    /// Body shapes in paint order.
    pub shapes: Vec<Shape>,

    /// Definitions referenced by the shapes (filters, gradients).
    pub defs: Vec<Shape>,
}

impl Fragment {
    /// Creates an empty fragment sized for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            canvas: variant.canvas_size(),
            shapes: Vec::new(),
            defs: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    pub fn with_def(mut self, def: Shape) -> Self {
        self.defs.push(def);
        self
    }

    /// Serializes the body shapes, in order, without any wrapper.
    pub fn body(&self) -> String {
        self.shapes.iter().map(ToString::to_string).collect()
    }

    /// Serializes the definitions, in order, without the `<defs>` wrapper.
    pub fn definitions(&self) -> String {
        self.defs.iter().map(ToString::to_string).collect()
    }
}

// ============================================================================
// Generator
// ============================================================================

/// A variant's two-step pipeline: seed-derived properties, then layout.
pub trait Generator {
    /// The variant this generator draws.
    const VARIANT: Variant;

    /// Side length of the square canvas in user units.
    const CANVAS: u32;

    /// Per-shape values derived from the seed.
    type Properties;

    /// Derives every property from the name and palette.
    ///
    /// Only the beam generator can fail, when its wrapper color is not a
    /// valid hex color.
    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError>;

    /// Lays out the shapes for a set of properties.
    fn layout(properties: &Self::Properties) -> Fragment;

    /// Runs both steps.
    fn generate(name: &str, palette: &Palette) -> Result<Fragment, AvatarError> {
        let properties = Self::properties(name, palette)?;
        Ok(Self::layout(&properties))
    }
}

/// Generates the fragment for `variant`.
///
/// The caller is responsible for rejecting empty names; see
/// [`crate::generate`].
pub fn generate(variant: Variant, name: &str, palette: &Palette) -> Result<Fragment, AvatarError> {
    log::debug!(
        "generating {variant} avatar (seed {}, canvas {})",
        hash_code(name),
        variant.canvas_size()
    );

    match variant {
        Variant::Marble => Marble::generate(name, palette),
        Variant::Pixel => Pixel::generate(name, palette),
        Variant::Bauhaus => Bauhaus::generate(name, palette),
        Variant::Ring => Ring::generate(name, palette),
        Variant::Sunset => Sunset::generate(name, palette),
        Variant::Beam => Beam::generate(name, palette),
    }
}
