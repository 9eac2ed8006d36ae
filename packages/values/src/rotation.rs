//! Rotation values: quaternions and their Euler-degree editing view.
//!
//! Skin files store rotations as quaternions (`w:1 x:0 y:0 z:0`); editors
//! present an `x:{x} y:{y} z:{z}` degrees view. Conversion happens on parse
//! and on component recomposition, never piecewise.

use crate::range::NumericRange;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Euler rotation in degrees, applied in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XyzRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Quaternion {
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Parse `w:_ x:_ y:_ z:_`, or the Euler `x:_ y:_ z:_` form which is
    /// converted to a quaternion on the spot.
    pub fn try_parse(text: &str) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [w, x, y, z] => Some(Self {
                w: labelled_f32(w, "w:")?,
                x: labelled_f32(x, "x:")?,
                y: labelled_f32(y, "y:")?,
                z: labelled_f32(z, "z:")?,
            }),
            [_, _, _] => XyzRotation::try_parse(text).map(|euler| Self::from_euler(euler)),
            _ => None,
        }
    }

    /// Build a quaternion from Euler degrees (X, Y, Z application order).
    ///
    /// All four scalars are derived in one computation so callers can swap
    /// a whole quaternion atomically.
    pub fn from_euler(euler: XyzRotation) -> Self {
        let half = |deg: f32| deg.to_radians() * 0.5;
        let (sx, cx) = half(euler.x).sin_cos();
        let (sy, cy) = half(euler.y).sin_cos();
        let (sz, cz) = half(euler.z).sin_cos();

        Self {
            w: cx * cy * cz + sx * sy * sz,
            x: sx * cy * cz - cx * sy * sz,
            y: cx * sy * cz + sx * cy * sz,
            z: cx * cy * sz - sx * sy * cz,
        }
    }

    /// Convert back to Euler degrees, wrapped into the editing range.
    pub fn to_euler(&self) -> XyzRotation {
        let Quaternion { w, x, y, z } = *self;

        let sin_pitch = 2.0 * (w * y - z * x);
        // Guard the asin domain at the gimbal poles
        let pitch = if sin_pitch.abs() >= 1.0 {
            std::f32::consts::FRAC_PI_2.copysign(sin_pitch)
        } else {
            sin_pitch.asin()
        };
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        let range = NumericRange::DEGREES;
        XyzRotation {
            x: range.apply(roll.to_degrees()),
            y: range.apply(pitch.to_degrees()),
            z: range.apply(yaw.to_degrees()),
        }
    }
}

impl XyzRotation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [x, y, z] => Some(Self {
                x: labelled_f32(x, "x:")?,
                y: labelled_f32(y, "y:")?,
                z: labelled_f32(z, "z:")?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w:{} x:{} y:{} z:{}", self.w, self.x, self.y, self.z)
    }
}

impl fmt::Display for XyzRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{} y:{} z:{}", self.x, self.y, self.z)
    }
}

fn labelled_f32(token: &str, label: &str) -> Option<f32> {
    token.strip_prefix(label)?.parse().ok()
}
