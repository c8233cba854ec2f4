//! The spiral geometry transform: unrolled angle in, screen radius out.
//!
//! The unrolled parameter theta winds one full turn per day. Two render
//! modes share one power law:
//!
//! - continuous: `r = scale * clamp((theta + rotation) / theta_max)^exp`,
//!   a smooth outward wind.
//! - circle mode: `(theta + rotation) / TAU` is quantized *upward* to the
//!   next whole day count before the same power law, so all 24 hours of a
//!   day collapse onto one ring radius.
//!
//! Visibility follows the snail-shell rule: the drawn range always ends one
//! full turn short of `theta_max - rotation`, so the spiral terminates at
//! the bottom like a shell instead of at an arbitrary angle, and one extra
//! turn is included below the nominal start so the innermost rings stay
//! populated while rotating. Out-of-window values clamp; nothing ever
//! extrapolates past the day grid.

use crate::segment::SEGMENT_THETA;
use crate::segment::SegmentAddress;
use crate::window::TAU;
use crate::window::Window;

/// The [min, max] interval of unrolled theta currently drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThetaRange {
    pub min: f64,
    pub max: f64,
}

impl ThetaRange {
    /// Intersect an interval with this range. `None` when nothing survives.
    pub fn clip(&self, start: f64, end: f64) -> Option<(f64, f64)> {
        let lo = start.max(self.min);
        let hi = end.min(self.max);
        if lo < hi {
            return Some((lo, hi));
        }
        return None;
    }

    pub fn contains(&self, theta: f64) -> bool {
        return theta >= self.min && theta <= self.max;
    }
}

/// Exponent of the power law, guarded against degenerate configuration.
fn exponent(window: &Window) -> f64 {
    if window.radius_exponent > 0.0 {
        return window.radius_exponent;
    }
    return 1.0;
}

/// Radius at `theta` in screen units, in the window's render mode.
pub fn radius(theta: f64, window: &Window) -> f64 {
    let theta_max = window.theta_max();
    if theta_max <= 0.0 {
        return 0.0;
    }
    let turns = (theta + window.rotation) / TAU;
    let frac = if window.circle_mode {
        // Quantize up to the next whole day so a day's hours share a ring.
        (turns.ceil() * TAU / theta_max).clamp(0.0, 1.0)
    } else {
        (turns * TAU / theta_max).clamp(0.0, 1.0)
    };
    return window.spiral_scale * frac.powf(exponent(window));
}

/// The snail-shell visibility window for a given rotation.
pub fn visibility_range(rotation: f64, theta_max: f64) -> ThetaRange {
    let max = theta_max - rotation - TAU;
    return ThetaRange {
        min: max - theta_max - TAU,
        max,
    };
}

/// Resolve a screen point (polar: on-screen angle, radius) back to the hour
/// segment it falls on, or `None` when it misses the spiral.
///
/// This is the inverse used for pointer hit-testing: undo the power law to
/// find which turn of the spiral carries this radius, then pick the unrolled
/// theta congruent to `angle` on that turn, and floor it onto the hour grid.
pub fn hit_test(angle: f64, radius_px: f64, window: &Window) -> Option<SegmentAddress> {
    if window.spiral_scale <= 0.0 || window.days == 0 {
        return None;
    }
    let frac = radius_px / window.spiral_scale;
    if !(0.0..=1.0).contains(&frac) {
        return None;
    }
    let theta_max = window.theta_max();
    let turns = frac.powf(1.0 / exponent(window)) * theta_max / TAU;

    let theta = if window.circle_mode {
        // Nearest whole-day ring; theta must land inside that ring's turn,
        // at the on-screen angle.
        let ring = turns.round();
        let base = (ring - 1.0) * TAU - window.rotation;
        let k = ((base - angle) / TAU).ceil();
        angle + k * TAU
    } else {
        // Continuous: choose the turn whose theta is closest to the exact
        // inverse while staying congruent to the on-screen angle.
        let exact = turns * TAU - window.rotation;
        let k = ((exact - angle) / TAU).round();
        angle + k * TAU
    };

    if !visibility_range(window.rotation, theta_max).contains(theta) {
        return None;
    }
    let abs_pos = (theta / SEGMENT_THETA).floor() as i64;
    if abs_pos < 0 || abs_pos >= window.total_visible_hours() {
        return None;
    }
    return Some(SegmentAddress::new(abs_pos.div_euclid(24), abs_pos.rem_euclid(24)));
}
