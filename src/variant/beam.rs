//! Beam: a face drawn on a tilted, rounded square.
//!
//! The wrapper square and the face each get their own translation. Small
//! wrapper offsets are pushed outward so the tilt is visible, and once the
//! wrapper moves far enough the face follows it at half the distance.

use super::{Fragment, Generator, Variant};
use crate::colors::Palette;
use crate::contrast::contrast;
use crate::error::AvatarError;
use crate::seed::{boolean, hash_code, unit};
use crate::shape::{Shape, Transform, whole};

const SIZE: u32 = 36;

/// Seed-derived values for a beam avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamProperties {
    pub wrapper_color: String,
    pub face_color: &'static str,
    pub background_color: String,
    pub wrapper_translate_x: f64,
    pub wrapper_translate_y: f64,
    pub wrapper_rotate: f64,
    pub wrapper_scale: f64,
    pub is_mouth_open: bool,
    pub is_circle: bool,
    pub eye_spread: f64,
    pub mouth_spread: f64,
    pub face_rotate: f64,
    pub face_translate_x: f64,
    pub face_translate_y: f64,
}

/// Pushes an offset below 5 outward by a ninth of the canvas.
fn nudge(offset: f64) -> f64 {
    if offset < 5.0 {
        offset + f64::from(SIZE / 9)
    } else {
        offset
    }
}

/// Uses half the wrapper offset once it passes a sixth of the canvas.
fn follow(wrapper: f64, own: f64) -> f64 {
    if wrapper > f64::from(SIZE / 6) {
        wrapper / 2.0
    } else {
        own
    }
}

/// Generator for [`Variant::Beam`].
pub struct Beam;

impl Generator for Beam {
    const VARIANT: Variant = Variant::Beam;
    const CANVAS: u32 = SIZE;

    type Properties = BeamProperties;

    fn properties(name: &str, palette: &Palette) -> Result<Self::Properties, AvatarError> {
        let seed = hash_code(name);
        let wrapper_color = palette.pick(seed);
        let face_color = contrast(wrapper_color)?;

        let wrapper_translate_x = nudge(unit(seed, 10, 1));
        let wrapper_translate_y = nudge(unit(seed, 10, 2));

        Ok(BeamProperties {
            wrapper_color: wrapper_color.to_string(),
            face_color,
            background_color: palette.pick(seed + 13).to_string(),
            wrapper_translate_x,
            wrapper_translate_y,
            wrapper_rotate: unit(seed, 360, 0),
            wrapper_scale: 1.0 + unit(seed, u64::from(SIZE / 12), 0) / 10.0,
            is_mouth_open: boolean(seed, 2),
            is_circle: boolean(seed, 1),
            eye_spread: unit(seed, 5, 0),
            mouth_spread: unit(seed, 3, 0),
            face_rotate: unit(seed, 10, 3),
            face_translate_x: follow(wrapper_translate_x, unit(seed, 8, 1)),
            face_translate_y: follow(wrapper_translate_y, unit(seed, 7, 2)),
        })
    }

    fn layout(properties: &Self::Properties) -> Fragment {
        let center = SIZE / 2;
        let corner_radius = if properties.is_circle { SIZE } else { SIZE / 6 };
        let face = properties.face_color;
        let mouth_y = whole(19.0 + properties.mouth_spread);

        let mouth = if properties.is_mouth_open {
            Shape::path()
                .attr("d", format!("M15 {mouth_y}c2 1 4 1 6 0"))
                .attr("stroke", face)
                .attr("fill", "none")
                .attr("stroke-linecap", "round")
        } else {
            Shape::path()
                .attr("d", format!("M13,{mouth_y} a1,0.75 0 0,0 10,0"))
                .attr("fill", face)
        };

        let eye = |x: f64| {
            Shape::rect()
                .attr("x", whole(x))
                .attr("y", 14)
                .attr("width", 1.5)
                .attr("height", 2)
                .attr("rx", 1)
                .attr("stroke", "none")
                .attr("fill", face)
        };

        Fragment::new(Self::VARIANT)
            .with_shape(
                Shape::rect()
                    .attr("width", SIZE)
                    .attr("height", SIZE)
                    .attr("fill", &properties.background_color),
            )
            .with_shape(
                Shape::rect()
                    .attr("x", 0)
                    .attr("y", 0)
                    .attr("width", SIZE)
                    .attr("height", SIZE)
                    .transform(
                        Transform::new()
                            .translate(properties.wrapper_translate_x, properties.wrapper_translate_y)
                            .rotate(properties.wrapper_rotate, center, center)
                            .scale(properties.wrapper_scale),
                    )
                    .attr("fill", &properties.wrapper_color)
                    .attr("rx", corner_radius),
            )
            .with_shape(
                Shape::group()
                    .transform(
                        Transform::new()
                            .translate(properties.face_translate_x, properties.face_translate_y)
                            .rotate(properties.face_rotate, center, center),
                    )
                    .child(mouth)
                    .child(eye(14.0 - properties.eye_spread))
                    .child(eye(20.0 + properties.eye_spread)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str) -> String {
        Beam::generate(name, &Palette::default()).unwrap().body()
    }

    #[test]
    fn mary_baker_markup() {
        assert_eq!(
            body("Mary Baker"),
            concat!(
                r##"<rect width="36" height="36" fill="#FF7D10"></rect>"##,
                r##"<rect x="0" y="0" width="36" height="36" transform="translate(4 4) rotate(340 18 18) scale(1.1)" fill="#0A0310" rx="36"></rect>"##,
                r##"<g transform="translate(-4 -1) rotate(-0 18 18)">"##,
                r##"<path d="M15 20c2 1 4 1 6 0" stroke="#FFFFFF" fill="none" stroke-linecap="round"></path>"##,
                r##"<rect x="14" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#FFFFFF"></rect>"##,
                r##"<rect x="20" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#FFFFFF"></rect>"##,
                "</g>",
            )
        );
    }

    #[test]
    fn amelia_earhart_markup() {
        assert_eq!(
            body("Amelia Earhart"),
            concat!(
                r##"<rect width="36" height="36" fill="#FF005B"></rect>"##,
                r##"<rect x="0" y="0" width="36" height="36" transform="translate(0 0) rotate(324 18 18) scale(1)" fill="#FFB238" rx="36"></rect>"##,
                r##"<g transform="translate(-4 -4) rotate(-4 18 18)">"##,
                r##"<path d="M15 19c2 1 4 1 6 0" stroke="#000000" fill="none" stroke-linecap="round"></path>"##,
                r##"<rect x="10" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#000000"></rect>"##,
                r##"<rect x="24" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#000000"></rect>"##,
                "</g>",
            )
        );
    }

    #[test]
    fn closed_mouth_and_square_corners() {
        assert_eq!(
            body("Margaret Brent"),
            concat!(
                r##"<rect width="36" height="36" fill="#FFB238"></rect>"##,
                r##"<rect x="0" y="0" width="36" height="36" transform="translate(6 6) rotate(356 18 18) scale(1.2)" fill="#49007E" rx="6"></rect>"##,
                r##"<g transform="translate(4 1) rotate(6 18 18)">"##,
                r##"<path d="M13,21 a1,0.75 0 0,0 10,0" fill="#FFFFFF"></path>"##,
                r##"<rect x="13" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#FFFFFF"></rect>"##,
                r##"<rect x="21" y="14" width="1.5" height="2" rx="1" stroke="none" fill="#FFFFFF"></rect>"##,
                "</g>",
            )
        );
    }

    #[test]
    fn small_offsets_are_nudged_by_signed_value() {
        // Mary Roebling: primary offsets are 5 (kept) and -5 (nudged to -1).
        let properties = Beam::properties("Mary Roebling", &Palette::default()).unwrap();
        assert_eq!(properties.wrapper_translate_x, 5.0);
        assert_eq!(properties.wrapper_translate_y, -1.0);
        assert_eq!(properties.face_translate_x, 3.0);
        assert_eq!(properties.face_translate_y, -4.0);
    }

    #[test]
    fn face_follows_large_wrapper_offsets() {
        assert_eq!(nudge(-9.0), -5.0);
        assert_eq!(nudge(4.0), 8.0);
        assert_eq!(nudge(5.0), 5.0);

        assert_eq!(follow(8.0, -3.0), 4.0);
        assert_eq!(follow(7.0, -3.0), 3.5);
        assert_eq!(follow(6.0, -3.0), -3.0);
    }

    #[test]
    fn face_color_contrasts_wrapper() {
        let properties = Beam::properties("Sarah Winnemucca", &Palette::default()).unwrap();
        assert_eq!(properties.wrapper_color, "#49007E");
        assert_eq!(properties.face_color, "#FFFFFF");

        let properties = Beam::properties("Amelia Earhart", &Palette::default()).unwrap();
        assert_eq!(properties.face_color, "#000000");
    }

    #[test]
    fn malformed_wrapper_color_fails() {
        let palette = Palette::new(["#0A0310", "#49007E", "#FF005B", "#FF7D10", "#FFB2"]);
        // Amelia Earhart picks index 4 for the wrapper.
        assert_eq!(
            Beam::generate("Amelia Earhart", &palette),
            Err(AvatarError::InvalidColor("#FFB2".into()))
        );
        // Mary Baker's wrapper is index 0, so the bad entry is never parsed.
        assert!(Beam::generate("Mary Baker", &palette).is_ok());
    }
}
