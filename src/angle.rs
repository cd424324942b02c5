//! Named circle fractions and angle conversions.
//!
//! All angles are radians in canvas orientation: x grows right, y grows down,
//! so increasing angles sweep clockwise on screen.

use std::f64::consts::PI;

pub const SIXTEENTH_TURN: f64 = PI / 8.0;
pub const EIGHTH_TURN: f64 = PI / 4.0;
pub const QUARTER_TURN: f64 = PI / 2.0;
pub const HALF_TURN: f64 = PI;
pub const FULL_TURN: f64 = PI * 2.0;

pub const RADIAN_TO_DEGREE: f64 = 180.0 / PI;
pub const DEGREE_TO_RADIAN: f64 = PI / 180.0;

/// Sweep direction of an arc as seen on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Increasing angles
    Clockwise,
    /// Decreasing angles
    CounterClockwise,
}

impl Orientation {
    /// Sign applied to angular quantities swept in this orientation
    pub fn direction(self) -> f64 {
        match self {
            Orientation::Clockwise => 1.0,
            Orientation::CounterClockwise => -1.0,
        }
    }

    pub fn is_counter_clockwise(self) -> bool {
        self == Orientation::CounterClockwise
    }
}

/// Signed sweep from `start` to `end` travelling in `orientation`.
///
/// The result lies in `[0, 2π)` for clockwise and `(-2π, 0]` for
/// counter-clockwise sweeps, so angles reported by `atan2` on either side of
/// the ±π cut still give the short way round the intended direction.
pub fn sweep(start: f64, end: f64, orientation: Orientation) -> f64 {
    let raw = (end - start).rem_euclid(FULL_TURN);
    match orientation {
        Orientation::Clockwise => raw,
        Orientation::CounterClockwise if raw == 0.0 => 0.0,
        Orientation::CounterClockwise => raw - FULL_TURN,
    }
}

/// Whole degrees, as printed on blueprints
pub fn to_whole_degrees(radians: f64) -> i64 {
    (radians * RADIAN_TO_DEGREE).round() as i64
}
