//! Math helpers.
//!
//! Angles are carried in degrees throughout the simulation and only converted
//! to radians at the point of use.

use std::f64::consts::PI;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Converts degrees to radians as `deg * 2π / 360`.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * 2.0 * PI / FULL_TURN_DEG
}

/// Wraps a heading into `[0, 360)`.
///
/// Uses a truncating remainder and adds a full turn to negative results.
/// For inputs already in `[0, 360)` shifted by less than a full turn this is
/// an exact wrap-around.
pub fn wrap_heading(deg: f64) -> f64 {
    let mut wrapped = deg % FULL_TURN_DEG;
    if wrapped < 0.0 {
        wrapped += FULL_TURN_DEG;
    }
    // A tiny negative remainder rounds up to exactly 360 above.
    if wrapped >= FULL_TURN_DEG {
        wrapped -= FULL_TURN_DEG;
    }
    wrapped
}

/// Rounds half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Compares against the floor instead of adding 0.5 first, which would round
/// up values just below one half and odd integers past 2^52.
pub fn js_round(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit direction for a heading in degrees (0 = +x, 90 = +y).
    pub fn from_heading(deg: f64) -> Self {
        let rad = deg_to_rad(deg);
        Self::new(rad.cos(), rad.sin())
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_heading_keeps_range() {
        assert_eq!(wrap_heading(0.0), 0.0);
        assert_eq!(wrap_heading(360.0), 0.0);
        assert_eq!(wrap_heading(365.0), 5.0);
        assert_eq!(wrap_heading(-5.0), 355.0);
        assert_eq!(wrap_heading(-1e-20), 0.0);
    }

    #[test]
    fn js_round_half_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(js_round(0.49), 0.0);
    }

    #[test]
    fn js_round_edges() {
        assert_eq!(js_round(0.49999999999999994), 0.0);
        assert_eq!(js_round(4503599627370497.0), 4503599627370497.0);
        assert_eq!(js_round(-0.5), 0.0);
        assert_eq!(js_round(-4503599627370497.0), -4503599627370497.0);
    }

    #[test]
    fn heading_zero_points_along_x() {
        let d = Vec2::from_heading(0.0);
        assert_eq!(d, Vec2::new(1.0, 0.0));
        let d = Vec2::from_heading(90.0);
        assert!(d.x.abs() < 1e-12);
        assert!((d.y - 1.0).abs() < 1e-12);
    }
}
