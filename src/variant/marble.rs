//! Marble: a background with two blurred, overlapping blobs.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::{hash_code, unit};
use crate::shape::{Shape, Tag, Transform};

const SIZE: u32 = 80;
const ELEMENTS: usize = 3;
const FILTER_ID: &str = "prefix__filter0_f";

const FRONT_BLOB: &str =
    "M32.414 59.35L50.376 70.5H72.5v-71H33.728L26.5 13.381l19.057 27.08L32.414 59.35z";
const BACK_BLOB: &str = "M22.216 24L0 46.75l14.108 38.129L78 86l-3.081-59.276-22.378 4.005 12.972 20.186-23.35 27.395L22.215 24z";

/// Seed-derived values for one marble element.
#[derive(Debug, Clone, PartialEq)]
pub struct MarbleElement {
    pub color: String,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

/// Generator for [`Variant::Marble`].
pub struct Marble;

impl Generator for Marble {
    const VARIANT: Variant = Variant::Marble;
    const CANVAS: u32 = SIZE;

    /// Background, front blob, back blob.
    type Properties = [MarbleElement; ELEMENTS];

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);
        let range = u64::from(SIZE / 10);

        Ok(std::array::from_fn(|i| {
            let offset = i as u64;
            let number = seed * (offset + 1);
            MarbleElement {
                color: palette.pick(seed + offset).to_string(),
                translate_x: unit(number, range, 1),
                translate_y: unit(number, range, 2),
                scale: 1.2 + unit(number, u64::from(SIZE / 20), 0) / 10.0,
                rotate: unit(number, 360, 1),
            }
        }))
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let [background, front, back] = properties;
        let center = SIZE / 2;
        // Both blobs share the back element's scale.
        let scale = back.scale;

        let blob = |element: &MarbleElement| {
            Transform::new()
                .translate(element.translate_x, element.translate_y)
                .rotate(element.rotate, center, center)
                .scale(scale)
        };

        Fragment::new(Self::VARIANT)
            .with_shape(
                Shape::rect()
                    .attr("width", SIZE)
                    .attr("height", SIZE)
                    .attr("fill", &background.color),
            )
            .with_shape(
                Shape::path()
                    .attr("filter", format!("url(#{FILTER_ID})"))
                    .attr("d", FRONT_BLOB)
                    .attr("fill", &front.color)
                    .transform(blob(front)),
            )
            .with_shape(
                Shape::path()
                    .attr("filter", format!("url(#{FILTER_ID})"))
                    .attr("style", "mix-blend-mode: overlay;")
                    .attr("d", BACK_BLOB)
                    .attr("fill", &back.color)
                    .transform(blob(back)),
            )
            .with_def(blur_filter())
    }
}

fn blur_filter() -> Shape {
    Shape::new(Tag::Filter)
        .attr("id", FILTER_ID)
        .attr("filterUnits", "userSpaceOnUse")
        .attr("color-interpolation-filters", "sRGB")
        .child(
            Shape::new(Tag::FeFlood)
                .attr("flood-opacity", 0)
                .attr("result", "BackgroundImageFix"),
        )
        .child(
            Shape::new(Tag::FeBlend)
                .attr("in", "SourceGraphic")
                .attr("in2", "BackgroundImageFix")
                .attr("result", "shape"),
        )
        .child(
            Shape::new(Tag::FeGaussianBlur)
                .attr("stdDeviation", 7)
                .attr("result", "effect1_foregroundBlur"),
        )
}
