//! Hex colour parsing for image backgrounds.

/// Convert a hex colour string to RGB.
///
/// Accepts `#rrggbb` and `rrggbb`.
///
/// # Example
///
/// ```
/// use texshot_core::color::hex2rgb;
/// assert_eq!(hex2rgb("#ffffff"), Some((255, 255, 255)));
/// assert_eq!(hex2rgb("nope"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Convert a hex colour string to RGBA.
///
/// Accepts `#rrggbb` (opaque), `#rrggbbaa`, and the keyword `transparent`.
pub fn hex2rgba(hex: &str) -> Option<[u8; 4]> {
    let trimmed = hex.trim();
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Some([0, 0, 0, 0]);
    }

    let digits = trimmed.trim_start_matches('#');
    match digits.len() {
        6 => hex2rgb(digits).map(|(r, g, b)| [r, g, b, 255]),
        8 if digits.is_ascii() => {
            let (r, g, b) = hex2rgb(&digits[0..6])?;
            let a = u8::from_str_radix(&digits[6..8], 16).ok()?;
            Some([r, g, b, a])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex2rgb() {
        assert_eq!(hex2rgb("#3852c6"), Some((0x38, 0x52, 0xc6)));
        assert_eq!(hex2rgb("c62525"), Some((0xc6, 0x25, 0x25)));
        assert_eq!(hex2rgb("#fff"), None);
        assert_eq!(hex2rgb("#gggggg"), None);
    }

    #[test]
    fn test_hex2rgba() {
        assert_eq!(hex2rgba("#ffffff"), Some([255, 255, 255, 255]));
        assert_eq!(hex2rgba("#00000080"), Some([0, 0, 0, 0x80]));
        assert_eq!(hex2rgba("transparent"), Some([0, 0, 0, 0]));
        assert_eq!(hex2rgba("white"), None);
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(hex2rgb("#ffé0f"), None);
    }
}
