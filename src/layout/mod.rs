//! The overlap-resolution and lane-assignment engine.
//!
//! Data flows bottom-up: the overlap resolver finds what is active in an
//! hour, the per-hour packer and the window-wide persistent assigner turn
//! overlap into lane indices, the component grouper sizes clusters, and the
//! slice compositor folds all of it into drawable rectangles. The layout
//! cache memoizes the window-wide computations so interaction pays for
//! geometry only, not for re-packing.

pub mod cache;
pub mod components;
pub mod lanes;
pub mod overlap;
pub mod packer;
pub mod slices;
pub mod union_find;

use crate::event::Event;
use crate::segment::SegmentAddress;
use crate::spiral;
use crate::window::Window;

pub use cache::LayoutCache;
pub use cache::LayoutEntry;
pub use slices::Slice;

/// Assemble every visible slice for one frame.
///
/// Ensures the cache, walks the hour segments whose angular span intersects
/// the visibility range, and composes slices for each. This is the one call
/// a render loop needs per frame; everything below it is pure.
pub fn frame_slices(
    cache: &mut LayoutCache,
    window: &Window,
    events: &[Event],
    version: u64,
) -> Vec<Slice> {
    let entry = cache.ensure(window, events, version);
    let visible = spiral::visibility_range(window.rotation, window.theta_max());

    let mut out = Vec::new();
    for id in 0..window.total_visible_hours() {
        let addr = SegmentAddress::from_segment_id(id, window);
        let (theta_start, theta_end) = addr.theta_span();
        if visible.clip(theta_start, theta_end).is_none() {
            continue;
        }
        let active = overlap::events_in_hour(events, window, addr);
        if active.is_empty() {
            continue;
        }
        out.extend(slices::compose(
            addr,
            &active,
            events,
            &entry.lanes,
            &entry.components,
            window,
            &visible,
        ));
    }
    return out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventUid;
    use crate::segment::HOUR_MS;

    fn event(uid: &str, start_hours: f64, end_hours: f64) -> Event {
        Event {
            uid: EventUid::new(uid),
            start_ms: (start_hours * HOUR_MS as f64) as i64,
            end_ms: (end_hours * HOUR_MS as f64) as i64,
            color: 0,
            calendar: String::new(),
        }
    }

    #[test]
    fn empty_event_set_yields_no_slices() {
        let mut cache = LayoutCache::new();
        let w = Window::new(0, 7);
        assert!(frame_slices(&mut cache, &w, &[], 0).is_empty());
    }

    #[test]
    fn one_event_yields_one_slice_per_hour() {
        let mut cache = LayoutCache::new();
        let w = Window::new(0, 7);
        let events = [event("a", 10.0, 13.0)];
        let slices = frame_slices(&mut cache, &w, &events, 1);
        assert_eq!(slices.len(), 3);
        for slice in &slices {
            assert_eq!(slice.event, events[0].uid);
            assert_eq!((slice.radial_start, slice.radial_end), (0.0, 1.0));
        }
    }

    #[test]
    fn rotating_far_enough_hides_segments() {
        let mut cache = LayoutCache::new();
        let mut w = Window::new(0, 7);
        let events = [event("a", 10.0, 13.0)];
        assert_eq!(frame_slices(&mut cache, &w, &events, 1).len(), 3);
        // Rotate the visible range entirely past the event's segments.
        w.rotation = w.theta_max() + crate::window::TAU;
        assert!(frame_slices(&mut cache, &w, &events, 1).is_empty());
    }
}
