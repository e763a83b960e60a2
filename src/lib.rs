//! boring-avatars: deterministic SVG avatars from a name
//!
//! Every avatar is a pure function of a name, a five-color palette and one of
//! six visual styles. The same inputs always give byte-identical markup, so
//! avatars can be regenerated anywhere instead of stored.
//!
//! # Example
//!
//! ```
//! use boring_avatars::{AvatarOptions, Variant};
//!
//! let options = AvatarOptions::new().with_variant(Variant::Beam).with_square(true);
//! let avatar = boring_avatars::render("Mary Baker", &options).unwrap();
//!
//! assert!(avatar.as_str().starts_with("<svg viewBox=\"0 0 36 36\""));
//! assert!(avatar.as_str().ends_with("</svg>"));
//! ```
//!
//! # Shapes Without the Document
//!
//! [`generate`] stops before the envelope and returns the variant's shape
//! list, for callers that embed avatars into their own markup:
//!
//! ```
//! use boring_avatars::{AvatarOptions, Tag, Variant};
//!
//! let options = AvatarOptions::new().with_variant(Variant::Pixel);
//! let fragment = boring_avatars::generate("Amelia Earhart", &options).unwrap();
//!
//! assert_eq!(fragment.shapes.len(), 64);
//! assert!(fragment.shapes.iter().all(|shape| shape.tag() == Tag::Rect));
//! ```
//!
//! # Serializable Profiles
//!
//! For configuration files and the JS bindings, use [`AvatarProfile`] with
//! the [`Configurable`] trait:
//!
//! ```
//! use boring_avatars::{AvatarGenerator, AvatarProfile, Configurable};
//!
//! let profile = AvatarProfile::from_json(r#"{"variant":"bauhaus","title":true}"#).unwrap();
//!
//! let mut generator = AvatarGenerator::default();
//! generator.apply_profile(&profile).unwrap();
//!
//! let avatar = generator.render("Margaret Brent").unwrap();
//! assert!(avatar.as_str().contains("<title>Margaret Brent</title>"));
//! ```

mod avatar;
mod colors;
pub mod contrast;
mod envelope;
mod error;
mod options;
mod profile;
pub mod seed;
mod shape;
pub mod variant;

#[cfg(feature = "tsify")]
mod wasm;

pub use avatar::{Avatar, AvatarGenerator, Configurable};
pub use colors::{DEFAULT_COLORS, PALETTE_SIZE, Palette};
pub use envelope::assemble;
pub use error::AvatarError;
pub use options::{AvatarOptions, Size};
pub use profile::{AvatarProfile, SizeSettings};
pub use shape::{Shape, Tag, Transform};
pub use variant::{Fragment, Generator, Variant};

/// Produces the shape list for `name` in the configured variant.
///
/// Only `variant` and `palette` are read from `options`; the rest are
/// envelope hints used by [`render`].
pub fn generate(name: &str, options: &AvatarOptions) -> Result<Fragment, AvatarError> {
    if name.is_empty() {
        return Err(AvatarError::EmptyIdentifier);
    }

    variant::generate(options.variant, name, &options.palette)
}

/// Produces the complete SVG document for `name`.
pub fn render(name: &str, options: &AvatarOptions) -> Result<Avatar, AvatarError> {
    let fragment = generate(name, options)?;
    let markup = envelope::assemble(&fragment, options, name);
    Ok(Avatar::new(markup, fragment.variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(generate("", &AvatarOptions::new()), Err(AvatarError::EmptyIdentifier));
        for variant in Variant::ALL {
            let options = AvatarOptions::new().with_variant(variant);
            assert_eq!(render("", &options), Err(AvatarError::EmptyIdentifier));
        }
    }

    #[test]
    fn default_options_draw_marble() {
        let fragment = generate("Mary Baker", &AvatarOptions::new()).unwrap();
        assert_eq!(fragment.variant, Variant::Marble);
        assert_eq!(fragment.canvas, 80);
        assert_eq!(fragment.shapes.len(), 3);
        assert_eq!(fragment.shapes[0].fill(), Some("#0A0310"));
    }

    #[test]
    fn render_wraps_the_fragment() {
        let options = AvatarOptions::new().with_variant(Variant::Ring);
        let fragment = generate("Mary Baker", &options).unwrap();
        let avatar = render("Mary Baker", &options).unwrap();

        assert_eq!(avatar.variant(), Variant::Ring);
        assert!(avatar.as_str().contains(&format!(
            r#"<g mask="url(#mask__ring_629664820)">{}</g></svg>"#,
            fragment.body()
        )));
    }

    #[test]
    fn palette_changes_colors_only() {
        let custom = Palette::new(["#111111", "#222222", "#333333", "#444444", "#555555"]);
        for variant in Variant::ALL {
            let default = generate("Sarah Winnemucca", &AvatarOptions::new().with_variant(variant)).unwrap();
            let recolored = generate(
                "Sarah Winnemucca",
                &AvatarOptions::new().with_variant(variant).with_palette(custom.clone()),
            )
            .unwrap();

            assert_eq!(default.shapes.len(), recolored.shapes.len(), "{variant}");
            assert_ne!(default, recolored, "{variant}");
        }
    }

    #[test]
    fn envelope_hints_do_not_change_shapes() {
        let plain = AvatarOptions::new().with_variant(Variant::Bauhaus);
        let decorated = plain
            .clone()
            .with_square(true)
            .with_title(true)
            .with_size(Size::new(128.0, "px").unwrap())
            .with_class("avatar");

        assert_eq!(
            generate("Amelia Earhart", &plain).unwrap(),
            generate("Amelia Earhart", &decorated).unwrap()
        );
    }
}
