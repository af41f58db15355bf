//! Tolerance windows and left/right comparison

use serde::{Deserialize, Serialize};
use std::fmt;

/// Check `target - tolerance <= value <= target + tolerance` (closed on both ends)
pub fn is_within_range(value: f32, target: f32, tolerance: f32) -> bool {
    value >= target - tolerance && value <= target + tolerance
}

/// A target joint angle and the tolerance accepted around it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleTarget {
    /// Ideal angle in degrees
    pub degrees: f32,
    /// Accepted deviation either side, in degrees
    pub tolerance: f32,
}

impl AngleTarget {
    pub const fn new(degrees: f32, tolerance: f32) -> Self {
        Self { degrees, tolerance }
    }

    pub fn contains(&self, value: f32) -> bool {
        is_within_range(value, self.degrees, self.tolerance)
    }

    /// Lowest accepted angle
    pub fn lower(&self) -> f32 {
        self.degrees - self.tolerance
    }

    /// Highest accepted angle
    pub fn upper(&self) -> f32 {
        self.degrees + self.tolerance
    }
}

/// Body side, from the subject's point of view (MediaPipe convention)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Select the value belonging to this side
    pub fn pick<T>(self, left: T, right: T) -> T {
        match self {
            Side::Left => left,
            Side::Right => right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side whose angle deviates more from `target`. Ties go to the right side.
pub fn worse_side(left_angle: f32, right_angle: f32, target: f32) -> Side {
    let left_diff = (left_angle - target).abs();
    let right_diff = (right_angle - target).abs();

    if left_diff > right_diff {
        Side::Left
    } else {
        Side::Right
    }
}
