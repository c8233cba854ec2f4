//! The event-hour overlap resolver.
//!
//! For one hour segment, find every event intersecting it and express the
//! intersection as minute offsets inside the hour. Minute 60 means "runs to
//! the end of the hour": an overlap ending exactly on the hour boundary
//! reports 60, never 0, so downstream fraction math can treat the hour as
//! the closed span [0, 60].
//!
//! No ordering is implied by the output; stacking order is the lane
//! packer's concern.

use smallvec::SmallVec;

use crate::event::Event;
use crate::segment::SegmentAddress;
use crate::window::Window;

/// One event's intersection with one hour segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourEvent {
    /// Index of the event in the caller's slice.
    pub event: usize,
    pub color: u32,
    /// Minute the overlap enters the hour, in [0, 60].
    pub start_minute: f64,
    /// Minute the overlap leaves the hour, in [0, 60].
    pub end_minute: f64,
    /// The event's full duration in minutes, not just this hour's share.
    pub duration_minutes: f64,
    /// The event's global start instant, unix milliseconds.
    pub start_ms: i64,
    /// The event's global end instant, unix milliseconds.
    pub end_ms: i64,
}

/// All events active in the given hour segment, with fractional minutes.
pub fn events_in_hour(
    events: &[Event],
    window: &Window,
    addr: SegmentAddress,
) -> SmallVec<[HourEvent; 8]> {
    let (hour_start, hour_end) = addr.hour_bounds_ms(window);
    let mut active = SmallVec::new();
    for (index, event) in events.iter().enumerate() {
        if !event.overlaps(hour_start, hour_end) {
            continue;
        }
        let overlap_start = event.start_ms.max(hour_start);
        let overlap_end = event.end_ms.min(hour_end);
        let start_minute = ((overlap_start - hour_start) as f64 / 60_000.0).clamp(0.0, 60.0);
        // A reversed event degrades to a degenerate span, never end < start.
        let end_minute = ((overlap_end - hour_start) as f64 / 60_000.0)
            .clamp(0.0, 60.0)
            .max(start_minute);
        active.push(HourEvent {
            event: index,
            color: event.color,
            start_minute,
            end_minute,
            duration_minutes: event.duration_minutes(),
            start_ms: event.start_ms,
            end_ms: event.end_ms,
        });
    }
    return active;
}
