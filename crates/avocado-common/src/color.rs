//! Color names and hex codes accepted by chart settings

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Named colors understood in settings, matching the usual web color names
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("lightblue", Rgb(173, 216, 230)),
    ("purple", Rgb(128, 0, 128)),
    ("orange", Rgb(255, 165, 0)),
    ("yellow", Rgb(255, 255, 0)),
    ("gray", Rgb(128, 128, 128)),
    ("grey", Rgb(128, 128, 128)),
    ("brown", Rgb(165, 42, 42)),
    ("pink", Rgb(255, 192, 203)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
];

/// Parse a color given as a name (`"red"`) or a hex code (`"#FF0000"`)
pub fn parse_color(color_str: &str) -> Option<Rgb> {
    let trimmed = color_str.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(Rgb(r, g, b));
            }
        }
        return None;
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, rgb)| *rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#FF0000"), Some(Rgb(255, 0, 0)));
        assert_eq!(parse_color("#00ff00"), Some(Rgb(0, 255, 0)));
        assert_eq!(parse_color("#ZZ0000"), None);
        assert_eq!(parse_color("#FFF"), None);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Some(Rgb(255, 0, 0)));
        assert_eq!(parse_color("LightBlue"), Some(Rgb(173, 216, 230)));
        assert_eq!(parse_color(" purple "), Some(Rgb(128, 0, 128)));
        assert_eq!(parse_color("chartreuse-ish"), None);
    }
}
