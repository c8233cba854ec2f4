//! Connected-component grouping by hourly co-occurrence.
//!
//! Two events belong to the same component when they are linked by a chain
//! of "active in the same hour" relations anywhere in the window. The
//! relation is transitively closed: A overlapping B in hour 3 and B
//! overlapping C in hour 9 puts all three in one component even though A
//! and C never directly co-occur.
//!
//! Each component carries a lane capacity: the number of radial slots the
//! whole cluster must reserve so that every member's band keeps a constant
//! thickness regardless of which hour is being drawn. It is the larger of
//! the worst-case simultaneous overlap any member ever reaches and the
//! number of distinct persistent lanes actually used inside the component.
//!
//! The same walk records each event's own worst-case hourly overlap, which
//! the uniform-thickness compositor sizes bands with.

use rustc_hash::FxHashMap;

use super::lanes::PersistentLanes;
use super::union_find::UnionFind;
use crate::event::Event;
use crate::event::EventUid;
use crate::segment::HOUR_MS;
use crate::window::Window;

/// Component structure of one window's events.
#[derive(Clone, Debug, Default)]
pub struct Components {
    /// Component id per event.
    component: FxHashMap<EventUid, u32>,
    /// Lane capacity per component id.
    capacities: Vec<u32>,
    /// Worst-case simultaneous overlap per event, across the hours it
    /// touches inside the window. At least 1 for every windowed event.
    max_overlap: FxHashMap<EventUid, u32>,
}

impl Components {
    /// Component id of an event, if it is in the window.
    pub fn component_of(&self, uid: &EventUid) -> Option<u32> {
        return self.component.get(uid).copied();
    }

    /// Lane capacity of an event's component. Degenerate events fall back
    /// to a capacity of 1 rather than failing.
    pub fn capacity_of(&self, uid: &EventUid) -> u32 {
        return self
            .component_of(uid)
            .and_then(|c| self.capacities.get(c as usize).copied())
            .unwrap_or(1);
    }

    /// Worst-case simultaneous overlap an event ever reaches. At least 1.
    pub fn max_overlap_of(&self, uid: &EventUid) -> u32 {
        return self.max_overlap.get(uid).copied().unwrap_or(1).max(1);
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        return self.capacities.len();
    }
}

/// Group the window's events by hourly co-occurrence.
pub fn group(events: &[Event], window: &Window, lanes: &PersistentLanes) -> Components {
    let window_start = window.start_ms();
    let window_end = window.end_ms();

    // Only windowed events participate; remember their indices.
    let windowed: Vec<usize> = (0..events.len())
        .filter(|&i| events[i].overlaps(window_start, window_end))
        .collect();

    let mut union_find = UnionFind::new(windowed.len());
    let mut max_overlap = vec![1u32; windowed.len()];

    // One pass per hour of the window. Unioning each active event with the
    // first active one is enough to merge the whole hour pairwise.
    let hours = window.days as i64 * 24;
    let mut active: Vec<usize> = Vec::new();
    for hour in 0..hours {
        let hour_start = window_start + hour * HOUR_MS;
        let hour_end = hour_start + HOUR_MS;
        active.clear();
        for (slot, &index) in windowed.iter().enumerate() {
            if events[index].overlaps(hour_start, hour_end) {
                active.push(slot);
            }
        }
        let count = active.len() as u32;
        for &slot in &active {
            union_find.union(active[0], slot);
            if count > max_overlap[slot] {
                max_overlap[slot] = count;
            }
        }
    }

    // Compact union-find roots into dense component ids.
    let mut root_to_component: FxHashMap<usize, u32> = FxHashMap::default();
    let mut component = FxHashMap::default();
    let mut component_of_slot = vec![0u32; windowed.len()];
    for (slot, &index) in windowed.iter().enumerate() {
        let root = union_find.find(slot);
        let next = root_to_component.len() as u32;
        let id = *root_to_component.entry(root).or_insert(next);
        component_of_slot[slot] = id;
        component.insert(events[index].uid.clone(), id);
    }

    // Capacity: worst member overlap vs. distinct persistent lanes used.
    let mut capacities = vec![1u32; root_to_component.len()];
    for (slot, &index) in windowed.iter().enumerate() {
        let id = component_of_slot[slot] as usize;
        let lane_need = 1 + lanes.lane(&events[index].uid);
        capacities[id] = capacities[id].max(max_overlap[slot]).max(lane_need);
    }

    let max_overlap = windowed
        .iter()
        .zip(&max_overlap)
        .map(|(&index, &m)| (events[index].uid.clone(), m))
        .collect();

    return Components {
        component,
        capacities,
        max_overlap,
    };
}
