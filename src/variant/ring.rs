//! Ring: two halftone bands, three nested arcs and a center dot.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::hash_code;
use crate::shape::Shape;

const SIZE: u32 = 90;
const PICKS: usize = 5;

/// Which of the five picks fills each of the nine slots.
pub const SLOTS: [usize; 9] = [0, 1, 1, 2, 2, 3, 3, 0, 4];

/// Paths for the first eight slots; the ninth is the center circle.
const PATHS: [&str; 8] = [
    "M0 0h90v45H0z",
    "M0 45h90v45H0z",
    "M83 45a38 38 0 00-76 0h76z",
    "M83 45a38 38 0 01-76 0h76z",
    "M77 45a32 32 0 10-64 0h64z",
    "M77 45a32 32 0 11-64 0h64z",
    "M71 45a26 26 0 00-52 0h52z",
    "M71 45a26 26 0 01-52 0h52z",
];

/// Generator for [`Variant::Ring`].
pub struct Ring;

impl Generator for Ring {
    const VARIANT: Variant = Variant::Ring;
    const CANVAS: u32 = SIZE;

    /// Fill for each slot, in paint order.
    type Properties = [String; SLOTS.len()];

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);
        let picks: [&str; PICKS] = std::array::from_fn(|i| palette.pick(seed + i as u64));

        Ok(SLOTS.map(|slot| picks[slot].to_string()))
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let [arcs @ .., center] = properties;
        let center_dot = SIZE / 2;

        Fragment::new(Self::VARIANT)
            .with_shapes(
                PATHS
                    .iter()
                    .zip(arcs)
                    .map(|(d, fill)| Shape::path().attr("d", d).attr("fill", fill)),
            )
            .with_shape(
                Shape::circle()
                    .attr("cx", center_dot)
                    .attr("cy", center_dot)
                    .attr("r", 23)
                    .attr("fill", center),
            )
    }
}
