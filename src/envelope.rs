//! Wraps a generated fragment into a complete SVG document.
//!
//! The envelope is the same for every variant: a root `<svg>` sized from the
//! options, an optional `<title>`, a round or square mask over the whole
//! canvas, the fragment's shapes inside the masked group and, when the
//! fragment carries any, a trailing `<defs>` block.

use std::fmt::Write;

use crate::options::AvatarOptions;
use crate::seed::hash_code;
use crate::shape::{Shape, escape};
use crate::variant::Fragment;

/// Returns the mask element id for a fragment.
///
/// Derived from the variant, the seed and the mask shape, so repeated renders
/// are byte-identical and avatars on one page only share a mask when it is
/// the same outline.
pub fn mask_id(fragment: &Fragment, name: &str, square: bool) -> String {
    let suffix = if square { "_sq" } else { "" };
    format!("mask__{}_{}{suffix}", fragment.variant, hash_code(name))
}

/// Returns the mask outline: the full canvas, rounded unless `square`.
pub fn mask_shape(canvas: u32, square: bool) -> Shape {
    Shape::rect()
        .attr("width", canvas)
        .attr("height", canvas)
        .attr_opt("rx", (!square).then_some(canvas * 2))
        .attr("fill", "#FFFFFF")
}

/// Assembles the final markup for `fragment`.
pub fn assemble(fragment: &Fragment, options: &AvatarOptions, name: &str) -> String {
    let canvas = fragment.canvas;
    let size = escape(&options.size.to_string());
    let mask = mask_id(fragment, name, options.square);

    let mut svg = String::new();

    // Writing into a String cannot fail, so the fmt::Results are discarded.
    let _ = write!(
        svg,
        r#"<svg viewBox="0 0 {canvas} {canvas}" fill="none" role="img" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}""#
    );

    if !options.classes.is_empty() {
        let _ = write!(svg, r#" class="{}""#, escape(&options.classes.join(" ")));
    }

    svg.push('>');

    if options.title {
        let _ = write!(svg, "<title>{}</title>", escape(name));
    }

    let _ = write!(
        svg,
        r#"<mask id="{mask}" maskUnits="userSpaceOnUse" x="0" y="0" width="{canvas}" height="{canvas}">{}</mask>"#,
        mask_shape(canvas, options.square)
    );

    let _ = write!(svg, r#"<g mask="url(#{mask})">{}</g>"#, fragment.body());

    if !fragment.defs.is_empty() {
        let _ = write!(svg, "<defs>{}</defs>", fragment.definitions());
    }

    svg.push_str("</svg>");
    svg
}
