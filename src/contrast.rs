//! Black-or-white foreground selection for a background color.

use std::str::FromStr;

use palette::Srgb;

use crate::error::AvatarError;

/// Foreground used on light backgrounds.
pub const BLACK: &str = "#000000";

/// Foreground used on dark backgrounds.
pub const WHITE: &str = "#FFFFFF";

/// Parses a `#RRGGBB` (or bare `RRGGBB`) string into 8-bit sRGB.
///
/// Exactly six hex digits are accepted; shorthand `#RGB` is rejected.
pub fn parse_hex(color: &str) -> Result<Srgb<u8>, AvatarError> {
    let digits = color.strip_prefix('#').unwrap_or(color);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AvatarError::InvalidColor(color.to_string()));
    }

    Srgb::<u8>::from_str(digits).map_err(|_| AvatarError::InvalidColor(color.to_string()))
}

/// Returns the YIQ luma of a color, `(299 R + 587 G + 114 B) / 1000`,
/// truncated to an integer.
pub fn luma(color: Srgb<u8>) -> u32 {
    let (r, g, b) = color.into_components();
    (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000
}

/// Picks [`BLACK`] or [`WHITE`], whichever reads better on `color`.
///
/// ```
/// use boring_avatars::contrast::contrast;
///
/// assert_eq!(contrast("#0A0310").unwrap(), "#FFFFFF");
/// assert_eq!(contrast("#FFB238").unwrap(), "#000000");
/// assert!(contrast("ABC").is_err());
/// ```
pub fn contrast(color: &str) -> Result<&'static str, AvatarError> {
    let rgb = parse_hex(color)?;

    if luma(rgb) >= 128 { Ok(BLACK) } else { Ok(WHITE) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_colors_get_white() {
        assert_eq!(contrast("#0A0310").unwrap(), WHITE);
        assert_eq!(contrast("#49007E").unwrap(), WHITE);
        assert_eq!(contrast("000000").unwrap(), WHITE);
    }

    #[test]
    fn light_colors_get_black() {
        assert_eq!(contrast("#FFB238").unwrap(), BLACK);
        assert_eq!(contrast("#ffffff").unwrap(), BLACK);
    }

    #[test]
    fn luma_threshold() {
        assert_eq!(luma(Srgb::<u8>::new(0x80, 0x80, 0x80)), 128);
        assert_eq!(contrast("#808080").unwrap(), BLACK);
        assert_eq!(luma(Srgb::<u8>::new(0x7F, 0x7F, 0x7F)), 127);
        assert_eq!(contrast("#7F7F7F").unwrap(), WHITE);
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            contrast("zzzzzz"),
            Err(AvatarError::InvalidColor("zzzzzz".into()))
        );
        assert!(contrast("#12345g").is_err());
        assert!(contrast("+12345").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(contrast("ABC"), Err(AvatarError::InvalidColor("ABC".into())));
        assert!(contrast("#FFFFFFF").is_err());
        assert!(contrast("").is_err());
        assert!(contrast("#").is_err());
    }

    #[test]
    fn rejects_multibyte_without_panicking() {
        assert!(contrast("ééé").is_err());
    }
}
