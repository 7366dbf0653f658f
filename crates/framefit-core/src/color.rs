//! CSS hex color parsing for background fills.
//!
//! The UI hands background colors over as CSS hex strings (the value of an
//! `<input type="color">`), so the core accepts `#rgb`, `#rrggbb` and
//! `#rrggbbaa` notation.

/// An RGBA color used for canvas fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white, the default padding background.
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Parse a CSS hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` (case-insensitive).
    /// Returns `None` for anything else.
    pub fn parse_hex(input: &str) -> Option<Color> {
        let hex = input.strip_prefix('#')?;
        // Byte-index slicing below requires single-byte characters
        if !hex.is_ascii() {
            return None;
        }
        let hex = match hex.len() {
            // Expand shorthand: #abc -> #aabbcc
            3 => hex
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };
        let (rgb, alpha) = if hex.len() == 6 {
            (hex.as_str(), "ff")
        } else {
            hex.split_at(6)
        };
        let r = u8::from_str_radix(&rgb[0..2], 16).ok()?;
        let g = u8::from_str_radix(&rgb[2..4], 16).ok()?;
        let b = u8::from_str_radix(&rgb[4..6], 16).ok()?;
        let a = u8::from_str_radix(alpha, 16).ok()?;
        Some(Color { r, g, b, a })
    }

    /// Convert to the image crate's pixel type.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_hex() {
        let c = Color::parse_hex("#ffffff").unwrap();
        assert_eq!(c, Color::WHITE);

        let c = Color::parse_hex("#102030").unwrap();
        assert_eq!(
            c,
            Color {
                r: 0x10,
                g: 0x20,
                b: 0x30,
                a: 0xff
            }
        );
    }

    #[test]
    fn test_parse_shorthand() {
        let c = Color::parse_hex("#fff").unwrap();
        assert_eq!(c, Color::WHITE);

        let c = Color::parse_hex("#1a2").unwrap();
        assert_eq!(
            c,
            Color {
                r: 0x11,
                g: 0xaa,
                b: 0x22,
                a: 0xff
            }
        );
    }

    #[test]
    fn test_parse_with_alpha() {
        let c = Color::parse_hex("#ffffff80").unwrap();
        assert_eq!(c.a, 0x80);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Color::parse_hex("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("#AbCdEf"), Color::parse_hex("#abcdef"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::parse_hex(""), None);
        assert_eq!(Color::parse_hex("ffffff"), None); // missing '#'
        assert_eq!(Color::parse_hex("#ffff"), None); // bad length
        assert_eq!(Color::parse_hex("#gggggg"), None); // non-hex digits
        assert_eq!(Color::parse_hex("white"), None);
    }

    #[test]
    fn test_parse_rejects_multi_byte_input() {
        // Multi-byte characters can hit the accepted byte lengths; they
        // must return None, not panic on a char boundary.
        assert_eq!(Color::parse_hex("#あ"), None); // 3 bytes, shorthand arm
        assert_eq!(Color::parse_hex("#ああ"), None); // 6 bytes
        assert_eq!(Color::parse_hex("#ffあが"), None); // 8 bytes
        assert_eq!(Color::parse_hex("#é"), None); // 2 bytes
    }

    #[test]
    fn test_to_rgba() {
        let c = Color {
            r: 1,
            g: 2,
            b: 3,
            a: 4,
        };
        assert_eq!(c.to_rgba(), image::Rgba([1, 2, 3, 4]));
    }
}
