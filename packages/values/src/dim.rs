//! Unified-dimension types: scale-relative plus absolute-pixel offsets.
//!
//! Textual forms match the skin file format: `{scale,offset}` for a single
//! dimension, with vectors/sizes/rects nesting one brace level, e.g.
//! `{{0,10},{0.5,0}}`. Floats print in shortest round-trip form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dimension: `scale` of the parent extent plus `offset` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UDim {
    pub scale: f32,
    pub offset: f32,
}

/// A 2D point/offset of two [`UDim`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UVector2 {
    pub x: UDim,
    pub y: UDim,
}

/// A size of two [`UDim`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct USize {
    pub width: UDim,
    pub height: UDim,
}

/// A rectangle of four [`UDim`] edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct URect {
    pub left: UDim,
    pub top: UDim,
    pub right: UDim,
    pub bottom: UDim,
}

impl UDim {
    pub const fn new(scale: f32, offset: f32) -> Self {
        Self { scale, offset }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let parts = split_braced(text.trim())?;
        if parts.len() != 2 {
            return None;
        }
        Some(Self {
            scale: parse_f32(parts[0])?,
            offset: parse_f32(parts[1])?,
        })
    }
}

impl UVector2 {
    pub const fn new(x: UDim, y: UDim) -> Self {
        Self { x, y }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let [x, y] = parse_dims(text)?;
        Some(Self { x, y })
    }
}

impl USize {
    pub const fn new(width: UDim, height: UDim) -> Self {
        Self { width, height }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let [width, height] = parse_dims(text)?;
        Some(Self { width, height })
    }
}

impl URect {
    pub const fn new(left: UDim, top: UDim, right: UDim, bottom: UDim) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let [left, top, right, bottom] = parse_dims(text)?;
        Some(Self {
            left,
            top,
            right,
            bottom,
        })
    }
}

impl fmt::Display for UDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.scale, self.offset)
    }
}

impl fmt::Display for UVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}

impl fmt::Display for USize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.width, self.height)
    }
}

impl fmt::Display for URect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{}}}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn parse_f32(text: &str) -> Option<f32> {
    text.trim().parse().ok()
}

/// Parse a braced list of exactly `N` nested [`UDim`]s.
fn parse_dims<const N: usize>(text: &str) -> Option<[UDim; N]> {
    let parts = split_braced(text.trim())?;
    if parts.len() != N {
        return None;
    }
    let mut dims = [UDim::default(); N];
    for (slot, part) in dims.iter_mut().zip(parts) {
        *slot = UDim::try_parse(part)?;
    }
    Some(dims)
}

/// Strip one outer brace pair and split at top-level commas.
pub(crate) fn split_braced(text: &str) -> Option<Vec<&str>> {
    let inner = text.strip_prefix('{')?.strip_suffix('}')?;
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&inner[start..]);
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udim_round_trip() {
        let dim = UDim::new(0.5, 10.0);
        assert_eq!(dim.to_string(), "{0.5,10}");
        assert_eq!(UDim::try_parse("{0.5,10}"), Some(dim));
        assert_eq!(UDim::try_parse(" { 0.5 , 10 } "), Some(dim));
    }

    #[test]
    fn test_udim_rejects_malformed() {
        assert_eq!(UDim::try_parse("0.5,10"), None);
        assert_eq!(UDim::try_parse("{0.5}"), None);
        assert_eq!(UDim::try_parse("{0.5,10,3}"), None);
        assert_eq!(UDim::try_parse("{a,b}"), None);
        assert_eq!(UDim::try_parse("{0.5,10"), None);
    }

    #[test]
    fn test_usize_round_trip() {
        let size = USize::new(UDim::new(0.0, 32.0), UDim::new(1.0, -4.0));
        assert_eq!(size.to_string(), "{{0,32},{1,-4}}");
        assert_eq!(USize::try_parse("{{0,32},{1,-4}}"), Some(size));
    }

    #[test]
    fn test_urect_round_trip() {
        let rect = URect::new(
            UDim::new(0.0, 0.0),
            UDim::new(0.0, 0.0),
            UDim::new(1.0, 0.0),
            UDim::new(1.0, 0.0),
        );
        assert_eq!(rect.to_string(), "{{0,0},{0,0},{1,0},{1,0}}");
        assert_eq!(URect::try_parse(&rect.to_string()), Some(rect));
    }

    #[test]
    fn test_uvector2_rejects_wrong_arity() {
        assert_eq!(UVector2::try_parse("{{0,0},{0,0},{0,0}}"), None);
    }
}
