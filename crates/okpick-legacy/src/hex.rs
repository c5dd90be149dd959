//! Hex color strings.
//!
//! Accepted forms, with or without a leading `#`, in any letter case:
//!
//! | Digits | Example | Meaning |
//! |--------|---------|---------|
//! | 1 | `a` | gray, nibble repeated: `aaaaaa` |
//! | 2 | `3c` | gray, byte repeated: `3c3c3c` |
//! | 3 | `f80` | each nibble doubled: `ff8800` |
//! | 6 | `ff8800` | full form |

use okpick_core::{Color, Error, Result};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex color string into RGB (0..255).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the string has an unsupported
/// length or contains a non-hex character.
///
/// # Example
///
/// ```rust
/// use okpick_core::Color;
/// use okpick_legacy::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#fff").unwrap(), Color::WHITE);
/// assert_eq!(hex_to_rgb("80").unwrap(), Color::splat(128.0));
/// assert!(hex_to_rgb("zz").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Color> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let nibbles = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| {
            Error::invalid_argument(format!("invalid hex color {hex:?}: non-hex digit"))
        })?;

    let bytes = match nibbles.as_slice() {
        &[x] => [x * 17; 3],
        &[x, y] => [x * 16 + y; 3],
        &[r, g, b] => [r * 17, g * 17, b * 17],
        &[r1, r2, g1, g2, b1, b2] => [r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2],
        _ => {
            return Err(Error::invalid_argument(format!(
                "invalid hex color {hex:?}: expected 1, 2, 3 or 6 digits, got {}",
                nibbles.len()
            )));
        }
    };
    Ok(Color::from_rgb8(bytes))
}

/// Formats RGB (0..255) as lowercase `#rrggbb`.
///
/// Channels are rounded and clamped to 0..255.
pub fn rgb_to_hex(rgb: Color) -> String {
    let [r, g, b] = rgb.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms() {
        assert_eq!(hex_to_rgb("#fff").unwrap(), Color::WHITE);
        assert_eq!(hex_to_rgb("f00").unwrap(), Color::new(255.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb("#A").unwrap(), Color::splat(170.0));
        assert_eq!(hex_to_rgb("3C").unwrap(), Color::splat(60.0));
        assert_eq!(hex_to_rgb("#FF8800").unwrap(), Color::new(255.0, 136.0, 0.0));
        assert_eq!(hex_to_rgb("  #0a0b0c ").unwrap(), Color::new(10.0, 11.0, 12.0));
    }

    #[test]
    fn test_invalid() {
        for bad in ["zz", "", "#", "12345", "#1234", "ff88001", "#gg0000", "##fff"] {
            let err = hex_to_rgb(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?}");
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(rgb_to_hex(Color::new(255.0, 136.0, 0.0)), "#ff8800");
        assert_eq!(rgb_to_hex(Color::new(-3.0, 127.6, 300.0)), "#0080ff");
    }

    #[test]
    fn test_roundtrip() {
        for hex in ["#000000", "#123abc", "#ffffff", "#7f7f80"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), hex);
        }
    }
}
