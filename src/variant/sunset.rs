//! Sunset: two stacked bands, each a vertical two-stop gradient.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::hash_code;
use crate::shape::{Shape, Tag};

const SIZE: u32 = 80;
const ELEMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct SunsetProperties {
    /// Top band start/end, bottom band start/end.
    pub colors: [String; ELEMENTS],

    /// Suffix that keeps gradient ids unique per name within one document.
    pub id_suffix: String,
}

impl SunsetProperties {
    /// Returns the gradient element id for `band` (0 = top, 1 = bottom).
    pub fn gradient_id(&self, band: usize) -> String {
        format!("gradient_paint{band}_linear_{}", self.id_suffix)
    }
}

/// Generator for [`Variant::Sunset`].
pub struct Sunset;

impl Generator for Sunset {
    const VARIANT: Variant = Variant::Sunset;
    const CANVAS: u32 = SIZE;

    type Properties = SunsetProperties;

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);

        Ok(SunsetProperties {
            colors: std::array::from_fn(|i| palette.pick(seed + i as u64).to_string()),
            id_suffix: name.replace(' ', ""),
        })
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let half = SIZE / 2;
        let [top_start, top_end, bottom_start, bottom_end] = &properties.colors;

        Fragment::new(Self::VARIANT)
            .with_shape(
                Shape::path()
                    .attr("fill", format!("url(#{})", properties.gradient_id(0)))
                    .attr("d", format!("M0 0h{SIZE}v{half}H0z")),
            )
            .with_shape(
                Shape::path()
                    .attr("fill", format!("url(#{})", properties.gradient_id(1)))
                    .attr("d", format!("M0 {half}h{SIZE}v{half}H0z")),
            )
            .with_def(gradient(properties.gradient_id(0), 0, half, top_start, top_end))
            .with_def(gradient(properties.gradient_id(1), half, SIZE, bottom_start, bottom_end))
    }
}

/// A vertical gradient centered horizontally, running from `y1` to `y2`.
fn gradient(id: String, y1: u32, y2: u32, start: &str, end: &str) -> Shape {
    let x = SIZE / 2;

    Shape::new(Tag::LinearGradient)
        .attr("id", id)
        .attr("x1", x)
        .attr("y1", y1)
        .attr("x2", x)
        .attr("y2", y2)
        .attr("gradientUnits", "userSpaceOnUse")
        .child(Shape::new(Tag::Stop).attr("stop-color", start))
        .child(Shape::new(Tag::Stop).attr("offset", 1).attr("stop-color", end))
}
