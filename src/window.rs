//! The visible window: everything the view controller knows, as one value.
//!
//! The original design kept rotation, day count and curve shape as mutable
//! fields on a global controller; here they travel together as an explicit
//! `Window` passed into every computation, so each function stays pure and
//! the layout cache can compare windows by value to decide when to rebuild.

use crate::segment::HOUR_MS;

/// Full circle in the unrolled angular parameter.
pub const TAU: f64 = std::f64::consts::TAU;

/// How overlapping events are composited into radial slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StackMode {
    /// Every event in a cluster keeps one constant-thickness band.
    #[default]
    Uniform,
    /// Later arrivals overlay a shrinking sliver on top of earlier bands.
    Stacked,
}

/// The view state for one frame. Recomputed on every interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    /// Instant defining hour 0 of the window, unix milliseconds.
    pub reference_ms: i64,
    /// Count of 24-hour periods visible.
    pub days: u32,
    /// Signed view rotation in radians.
    pub rotation: f64,
    /// Exponent of the radius power law. 1.0 is a linear spiral.
    pub radius_exponent: f64,
    /// Maximum-radius scale factor in screen units.
    pub spiral_scale: f64,
    /// Collapse the spiral into concentric day-rings.
    pub circle_mode: bool,
    /// Slice compositing strategy.
    pub stack_mode: StackMode,
}

impl Window {
    /// A window of `days` days starting at `reference_ms`, defaults elsewhere.
    pub fn new(reference_ms: i64, days: u32) -> Window {
        return Window {
            reference_ms,
            days,
            rotation: 0.0,
            radius_exponent: 1.0,
            spiral_scale: 1.0,
            circle_mode: false,
            stack_mode: StackMode::default(),
        };
    }

    /// Inclusive start of the window, unix milliseconds.
    pub fn start_ms(&self) -> i64 {
        return self.reference_ms;
    }

    /// Exclusive end of the window, unix milliseconds.
    pub fn end_ms(&self) -> i64 {
        return self.reference_ms + self.days as i64 * 24 * HOUR_MS;
    }

    /// Hours addressable by segment ids: `(days - 1) * 24`.
    pub fn total_visible_hours(&self) -> i64 {
        return (self.days.max(1) as i64 - 1) * 24;
    }

    /// Total unrolled angular extent of the window: one turn per day.
    pub fn theta_max(&self) -> f64 {
        return self.days as f64 * TAU;
    }
}
