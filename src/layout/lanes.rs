//! Persistent window lane assignment.
//!
//! The per-hour packer keeps a single hour tidy, but an event crossing an
//! hour boundary must not change lanes as the spiral rotates. This sweep
//! assigns every event one lane for the entire visible window.
//!
//! Boundary points are swept in time order with two rules that make the
//! result both minimal and stable:
//!
//! - At equal timestamps, ends are processed before starts, so a lane
//!   vacated at time T is immediately reusable by an event starting at T.
//! - Simultaneous starts are ordered (total duration descending, global
//!   start ascending), matching the per-hour packer's tie-break, so both
//!   layers agree on who deserves the low lanes.
//!
//! Lanes come from a min-heap free pool: the smallest free index is always
//! reused first. For interval graphs this greedy sweep is optimal - the
//! number of lanes equals the maximum simultaneous overlap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::event::Event;
use crate::event::EventUid;
use crate::window::Window;

/// Stable lane per event for one window.
#[derive(Clone, Debug, Default)]
pub struct PersistentLanes {
    pub lanes: FxHashMap<EventUid, u32>,
    /// Total lanes allocated; the window's maximum simultaneous overlap.
    pub lanes_used: u32,
}

impl PersistentLanes {
    /// Lane for an event, defaulting to 0 for unknown or degenerate events.
    pub fn lane(&self, uid: &EventUid) -> u32 {
        return self.lanes.get(uid).copied().unwrap_or(0);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BoundaryKind {
    End,
    Start,
}

struct Boundary {
    time_ms: i64,
    kind: BoundaryKind,
    event: usize,
    /// Global duration, for simultaneous-start priority.
    duration_ms: i64,
    start_ms: i64,
}

/// Sweep the window and assign one lane per event.
pub fn assign(events: &[Event], window: &Window) -> PersistentLanes {
    let window_start = window.start_ms();
    let window_end = window.end_ms();

    let mut boundaries = Vec::new();
    for (index, event) in events.iter().enumerate() {
        if !event.overlaps(window_start, window_end) {
            continue;
        }
        let clipped_start = event.start_ms.max(window_start);
        let clipped_end = event.end_ms.min(window_end);
        if clipped_start >= clipped_end {
            continue;
        }
        let duration_ms = (event.end_ms - event.start_ms).max(0);
        boundaries.push(Boundary {
            time_ms: clipped_start,
            kind: BoundaryKind::Start,
            event: index,
            duration_ms,
            start_ms: event.start_ms,
        });
        boundaries.push(Boundary {
            time_ms: clipped_end,
            kind: BoundaryKind::End,
            event: index,
            duration_ms,
            start_ms: event.start_ms,
        });
    }

    boundaries.sort_by(|a, b| {
        return a
            .time_ms
            .cmp(&b.time_ms)
            // Ends first, so a lane freed at T is reusable at T.
            .then((a.kind == BoundaryKind::Start).cmp(&(b.kind == BoundaryKind::Start)))
            .then(b.duration_ms.cmp(&a.duration_ms))
            .then(a.start_ms.cmp(&b.start_ms))
            .then(a.event.cmp(&b.event));
    });

    let mut lanes = FxHashMap::default();
    let mut assigned: FxHashMap<usize, u32> = FxHashMap::default();
    let mut free: BinaryHeap<Reverse<u32>> = BinaryHeap::new();
    let mut next_lane = 0u32;

    for boundary in &boundaries {
        match boundary.kind {
            BoundaryKind::Start => {
                let lane = match free.pop() {
                    Some(Reverse(lane)) => lane,
                    None => {
                        let lane = next_lane;
                        next_lane += 1;
                        lane
                    }
                };
                assigned.insert(boundary.event, lane);
                lanes.insert(events[boundary.event].uid.clone(), lane);
            }
            BoundaryKind::End => {
                if let Some(lane) = assigned.remove(&boundary.event) {
                    free.push(Reverse(lane));
                }
            }
        }
    }

    return PersistentLanes {
        lanes,
        lanes_used: next_lane,
    };
}
