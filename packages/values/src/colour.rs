//! Colour values in the `AARRGGBB` skin file notation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ARGB colour with 8-bit channels, written as `AARRGGBB` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for Colour {
    fn default() -> Self {
        // Opaque white, the engine's colour identity
        Self {
            alpha: 0xFF,
            red: 0xFF,
            green: 0xFF,
            blue: 0xFF,
        }
    }
}

impl Colour {
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let argb = u32::from_str_radix(text, 16).ok()?;
        Some(Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

/// Four corner colours for gradient fills.
///
/// Canonical text is the four-corner form; a lone `AARRGGBB` is accepted on
/// parse and applied to every corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColourRect {
    pub top_left: Colour,
    pub top_right: Colour,
    pub bottom_left: Colour,
    pub bottom_right: Colour,
}

impl ColourRect {
    pub const fn uniform(colour: Colour) -> Self {
        Self {
            top_left: colour,
            top_right: colour,
            bottom_left: colour,
            bottom_right: colour,
        }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [single] if !single.contains(':') => Some(Self::uniform(Colour::try_parse(single)?)),
            [tl, tr, bl, br] => Some(Self {
                top_left: Colour::try_parse(tl.strip_prefix("tl:")?)?,
                top_right: Colour::try_parse(tr.strip_prefix("tr:")?)?,
                bottom_left: Colour::try_parse(bl.strip_prefix("bl:")?)?,
                bottom_right: Colour::try_parse(br.strip_prefix("br:")?)?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for ColourRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tl:{} tr:{} bl:{} br:{}",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_round_trip() {
        let colour = Colour::argb(0xFF, 0x12, 0xAB, 0x00);
        assert_eq!(colour.to_string(), "FF12AB00");
        assert_eq!(Colour::try_parse("FF12AB00"), Some(colour));
        // lowercase accepted, uppercase canonical
        assert_eq!(Colour::try_parse("ff12ab00"), Some(colour));
    }

    #[test]
    fn test_colour_rejects_malformed() {
        assert_eq!(Colour::try_parse("FF12AB"), None);
        assert_eq!(Colour::try_parse("FF12AB001"), None);
        assert_eq!(Colour::try_parse("GG12AB00"), None);
    }

    #[test]
    fn test_colour_rect_round_trip() {
        let rect = ColourRect {
            top_left: Colour::argb(0xFF, 0, 0, 0),
            top_right: Colour::argb(0xFF, 0xFF, 0, 0),
            bottom_left: Colour::argb(0xFF, 0, 0xFF, 0),
            bottom_right: Colour::argb(0xFF, 0, 0, 0xFF),
        };
        let text = "tl:FF000000 tr:FFFF0000 bl:FF00FF00 br:FF0000FF";
        assert_eq!(rect.to_string(), text);
        assert_eq!(ColourRect::try_parse(text), Some(rect));
    }

    #[test]
    fn test_colour_rect_single_colour_form() {
        let rect = ColourRect::try_parse("FF00FF00").unwrap();
        assert_eq!(rect, ColourRect::uniform(Colour::argb(0xFF, 0, 0xFF, 0)));
    }

    #[test]
    fn test_colour_rect_rejects_misordered_corners() {
        assert_eq!(
            ColourRect::try_parse("tr:FF000000 tl:FFFF0000 bl:FF00FF00 br:FF0000FF"),
            None
        );
    }
}
