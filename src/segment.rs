//! Hour-segment addressing: the single source of truth for where an hour
//! lives on the spiral.
//!
//! Every hour inside the window has three equivalent names:
//!
//! 1. A `(day, hour_of_day)` address on the day grid.
//! 2. A flat position `abs_pos = day * 24 + hour_of_day`, hours since the
//!    reference instant.
//! 3. A `segment_id`, counted *backward* from the outer edge of the visible
//!    range: `segment_id = total_visible_hours - abs_pos - 1`. Segment 0 is
//!    the outermost drawn hour; ids grow toward the reference instant.
//!
//! The backward count is what the rest of the engine keys on, so the
//! bijection here must stay exact: `address -> id -> address` is the
//! identity for every id in `[0, total_visible_hours)`. Only
//! `(days - 1) * 24` hours are addressable; the window's final day is the
//! extra turn the snail-shell visibility rule winds past the nominal end.
//!
//! Angularly, hour `abs_pos` spans `[abs_pos, abs_pos + 1] * TAU / 24` in
//! the unrolled parameter, so at rotation 0 the last addressable hour ends
//! exactly at the visibility maximum `(days - 1) * TAU`.

use crate::window::TAU;
use crate::window::Window;

/// One hour in unix milliseconds.
pub const HOUR_MS: i64 = 3_600_000;

/// Unrolled angular width of one hour segment.
pub const SEGMENT_THETA: f64 = TAU / 24.0;

/// A (day, hour-of-day) pair on the window's day grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentAddress {
    /// Day index within the window, 0-based.
    pub day: i64,
    /// Hour of that day, in [0, 24).
    pub hour: i64,
}

impl SegmentAddress {
    pub fn new(day: i64, hour: i64) -> SegmentAddress {
        return SegmentAddress { day, hour };
    }

    /// Hours since the reference instant.
    pub fn abs_pos(&self) -> i64 {
        return self.day * 24 + self.hour;
    }

    /// The backward-counted segment id for this address.
    pub fn segment_id(&self, window: &Window) -> i64 {
        return window.total_visible_hours() - self.abs_pos() - 1;
    }

    /// Recover an address from its segment id.
    pub fn from_segment_id(id: i64, window: &Window) -> SegmentAddress {
        let abs_pos = window.total_visible_hours() - id - 1;
        return SegmentAddress {
            day: abs_pos.div_euclid(24),
            hour: abs_pos.rem_euclid(24),
        };
    }

    /// The [start, end) instants of this hour, unix milliseconds.
    pub fn hour_bounds_ms(&self, window: &Window) -> (i64, i64) {
        let start = window.reference_ms + self.abs_pos() * HOUR_MS;
        return (start, start + HOUR_MS);
    }

    /// The unrolled angular interval this segment occupies.
    pub fn theta_span(&self) -> (f64, f64) {
        let start = self.abs_pos() as f64 * SEGMENT_THETA;
        return (start, start + SEGMENT_THETA);
    }
}

/// Absolute hour index of an instant relative to the window's reference.
/// Floors toward negative infinity, so instants before the reference get
/// negative hours rather than rounding toward zero.
pub fn absolute_hour(ms: i64, window: &Window) -> i64 {
    return (ms - window.reference_ms).div_euclid(HOUR_MS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_id_counts_backward() {
        let w = Window::new(0, 7);
        // 144 addressable hours; the first hour of day 0 is the last id.
        assert_eq!(SegmentAddress::new(0, 0).segment_id(&w), 143);
        assert_eq!(SegmentAddress::new(5, 23).segment_id(&w), 0);
    }

    #[test]
    fn round_trip_is_identity() {
        let w = Window::new(0, 7);
        for id in 0..w.total_visible_hours() {
            let addr = SegmentAddress::from_segment_id(id, &w);
            assert_eq!(addr.segment_id(&w), id);
            assert!(addr.hour >= 0 && addr.hour < 24);
        }
    }

    #[test]
    fn hour_bounds_follow_the_grid() {
        let w = Window::new(1_000_000, 3);
        let (start, end) = SegmentAddress::new(1, 5).hour_bounds_ms(&w);
        assert_eq!(start, 1_000_000 + 29 * HOUR_MS);
        assert_eq!(end, start + HOUR_MS);
    }

    #[test]
    fn absolute_hour_floors() {
        let w = Window::new(0, 1);
        assert_eq!(absolute_hour(0, &w), 0);
        assert_eq!(absolute_hour(HOUR_MS - 1, &w), 0);
        assert_eq!(absolute_hour(HOUR_MS, &w), 1);
        assert_eq!(absolute_hour(-1, &w), -1);
    }

    #[test]
    fn last_segment_ends_at_visibility_max() {
        let w = Window::new(0, 7);
        let last = SegmentAddress::from_segment_id(0, &w);
        let (_, theta_end) = last.theta_span();
        assert!((theta_end - (w.days as f64 - 1.0) * TAU).abs() < 1e-9);
    }
}
