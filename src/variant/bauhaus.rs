//! Bauhaus: a rect, a circle and a line over a flat background.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::{boolean, hash_code, unit};
use crate::shape::{Shape, Transform};

const SIZE: u32 = 80;
const ELEMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct BauhausElement {
    pub color: String,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub is_square: bool,
}

/// Generator for [`Variant::Bauhaus`].
pub struct Bauhaus;

impl Generator for Bauhaus {
    const VARIANT: Variant = Variant::Bauhaus;
    const CANVAS: u32 = SIZE;

    /// Background, rect, circle, line.
    type Properties = [BauhausElement; ELEMENTS];

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);
        let is_square = boolean(seed, 2);

        Ok(std::array::from_fn(|i| {
            let offset = i as u64;
            let number = seed * (offset + 1);
            // Later elements get a tighter translation range.
            let range = u64::from(SIZE / 2) - (offset + 17);
            BauhausElement {
                color: palette.pick(seed + offset).to_string(),
                translate_x: unit(number, range, 1),
                translate_y: unit(number, range, 2),
                rotate: unit(number, 360, 0),
                is_square,
            }
        }))
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let [background, rect, circle, line] = properties;
        let center = SIZE / 2;
        let rect_height = if background.is_square { SIZE } else { SIZE / 8 };

        Fragment::new(Self::VARIANT)
            .with_shape(
                Shape::rect()
                    .attr("width", SIZE)
                    .attr("height", SIZE)
                    .attr("fill", &background.color),
            )
            .with_shape(
                Shape::rect()
                    .attr("x", (SIZE - 60) / 2)
                    .attr("y", (SIZE - 20) / 2)
                    .attr("width", SIZE)
                    .attr("height", rect_height)
                    .attr("fill", &rect.color)
                    .transform(
                        Transform::new()
                            .translate(rect.translate_x, rect.translate_y)
                            .rotate(rect.rotate, center, center),
                    ),
            )
            .with_shape(
                Shape::circle()
                    .attr("cx", center)
                    .attr("cy", center)
                    .attr("fill", &circle.color)
                    .attr("r", SIZE / 5)
                    .transform(Transform::new().translate(circle.translate_x, circle.translate_y)),
            )
            .with_shape(
                Shape::line()
                    .attr("x1", 0)
                    .attr("y1", center)
                    .attr("x2", SIZE)
                    .attr("y2", center)
                    .attr("stroke-width", 2)
                    .attr("stroke", &line.color)
                    .transform(
                        Transform::new()
                            .translate(line.translate_x, line.translate_y)
                            .rotate(line.rotate, center, center),
                    ),
            )
    }
}
