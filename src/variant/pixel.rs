//! Pixel: an 8x8 grid of flat-colored squares.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::error::AvatarError;
use crate::seed::hash_code;
use crate::shape::Shape;

const SIZE: u32 = 80;
const CELL: u32 = 10;
const CELLS: usize = 64;

/// Column order of the grid walk: even columns first, then odd ones.
const COLUMNS: [u32; 8] = [0, 20, 40, 60, 10, 30, 50, 70];

/// Returns the `(x, y)` origin of every cell, in emission order.
///
/// The walk covers the whole top row first (in [`COLUMNS`] order), then
/// each column top to bottom for the remaining seven rows.
pub fn cell_origins() -> impl Iterator<Item = (u32, u32)> {
    let top = COLUMNS.iter().map(|&x| (x, 0));
    let rest = COLUMNS
        .iter()
        .flat_map(|&x| (1..SIZE / CELL).map(move |row| (x, row * CELL)));
    top.chain(rest)
}

/// Generator for [`Variant::Pixel`].
pub struct Pixel;

impl Generator for Pixel {
    const VARIANT: Variant = Variant::Pixel;
    const CANVAS: u32 = SIZE;

    /// One color per cell, in emission order.
    type Properties = Vec<String>;

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);

        // Cell `i` picks with `seed mod (i + 1)`, not `seed + i`. Early cells
        // correlate more strongly as a result; existing avatars depend on it.
        Ok((0..CELLS as u64)
            .map(|i| palette.pick(seed % (i + 1)).to_string())
            .collect())
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let cells = cell_origins().zip(properties).map(|((x, y), color)| {
            Shape::rect()
                .attr_opt("x", (x != 0).then_some(x))
                .attr_opt("y", (y != 0).then_some(y))
                .attr("width", CELL)
                .attr("height", CELL)
                .attr("fill", color)
        });

        Fragment::new(Self::VARIANT).with_shapes(cells)
    }
}
