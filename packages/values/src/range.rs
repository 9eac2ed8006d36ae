//! Numeric editing ranges for scalar components.

use serde::{Deserialize, Serialize};

/// Range constraint applied to a scalar component while editing.
///
/// Non-wrapping ranges clamp out-of-range input; wrapping ranges fold it
/// back modulo the range span. Rotation degrees use a wrapping
/// `[-360, 360)` range so spinner edits can cross the boundary freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f32,
    pub max: f32,
    pub wrapping: bool,
}

impl NumericRange {
    /// Euler rotation degrees, wrapping.
    pub const DEGREES: NumericRange = NumericRange {
        min: -360.0,
        max: 360.0,
        wrapping: true,
    };

    /// 8-bit colour channel, clamping.
    pub const COLOUR_CHANNEL: NumericRange = NumericRange {
        min: 0.0,
        max: 255.0,
        wrapping: false,
    };

    pub const fn new(min: f32, max: f32, wrapping: bool) -> Self {
        Self { min, max, wrapping }
    }

    /// Constrain `value` to this range.
    pub fn apply(&self, value: f32) -> f32 {
        if self.wrapping {
            let span = self.max - self.min;
            if span <= 0.0 {
                return self.min;
            }
            let mut folded = (value - self.min) % span;
            if folded < 0.0 {
                folded += span;
            }
            self.min + folded
        } else {
            value.clamp(self.min, self.max)
        }
    }
}
