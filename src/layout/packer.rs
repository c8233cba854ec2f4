//! Greedy per-hour lane packing.
//!
//! Classical interval-graph coloring restricted to one hour: sort the
//! hour's overlaps so longer and earlier events come first, then give each
//! one the lowest lane whose previous occupant has already ended. Lane
//! count therefore equals the maximum simultaneous overlap within the hour.
//!
//! The sort order (duration descending, global start ascending, in-hour
//! start ascending, in-hour end ascending) is what keeps lane numbers
//! visually calm: a long-running event wins lane 0 in every hour it
//! touches, so it does not jump radially as the view scrolls.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use super::overlap::HourEvent;

/// Lane layout of one hour: event index to lane, plus the lane count.
#[derive(Clone, Debug, Default)]
pub struct HourPacking {
    /// Lane per event, keyed by the event's index in the caller's slice.
    pub lanes: FxHashMap<usize, u32>,
    /// Number of lanes used; the hour's maximum simultaneous overlap.
    pub lanes_used: u32,
}

/// Packing priority: longer first, then earlier, then by in-hour position.
fn priority(a: &HourEvent, b: &HourEvent) -> Ordering {
    return b
        .duration_minutes
        .partial_cmp(&a.duration_minutes)
        .unwrap_or(Ordering::Equal)
        .then(a.start_ms.cmp(&b.start_ms))
        .then(a.start_minute.partial_cmp(&b.start_minute).unwrap_or(Ordering::Equal))
        .then(a.end_minute.partial_cmp(&b.end_minute).unwrap_or(Ordering::Equal));
}

/// Assign a lane to every event of one hour.
pub fn pack_hour(active: &[HourEvent]) -> HourPacking {
    let mut order: Vec<&HourEvent> = active.iter().collect();
    order.sort_by(|a, b| priority(a, b));

    let mut lanes = FxHashMap::default();
    // Last occupied end minute per lane.
    let mut lane_ends: Vec<f64> = Vec::new();
    for hour_event in order {
        let lane = lane_ends
            .iter()
            .position(|&end| end <= hour_event.start_minute)
            .unwrap_or(lane_ends.len());
        if lane == lane_ends.len() {
            lane_ends.push(hour_event.end_minute);
        } else {
            lane_ends[lane] = hour_event.end_minute;
        }
        lanes.insert(hour_event.event, lane as u32);
    }

    return HourPacking {
        lanes,
        lanes_used: lane_ends.len() as u32,
    };
}
