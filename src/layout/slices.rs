//! Slice compositing: from lane and component data to drawable rectangles.
//!
//! A slice is one event's share of one hour segment: an angular interval
//! (minutes mapped onto the segment's theta span) and a radial interval
//! (a fraction of the band thickness between the spiral's inner and outer
//! edge). Two strategies exist:
//!
//! - **Uniform thickness**: each hour-local overlap group reserves enough
//!   radial slots for the worst its members ever see, and every member
//!   keeps the same slot, and so the same thickness, in every hour it
//!   touches. Flicker-free; a lone event still renders thin if it is ever
//!   part of a crowd somewhere else.
//! - **Stacked**: within a group, members are ordered bottom-to-top; at any
//!   instant the bottom active member spans the full thickness and each
//!   higher active member overlays a shrinking sliver on top, leaving the
//!   bands beneath partially visible. A card-stack reveal instead of equal
//!   partitioning.
//!
//! The bottom-to-top order is (persistent lane ascending, global start
//! ascending, uid ascending) in both spiral and ring mode; there is one
//! rule, deliberately.
//!
//! Slices are clipped against the segment's currently visible angular
//! range, and anything whose angular or radial span rounds to zero is
//! dropped rather than emitted degenerate.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::event::Event;
use crate::event::EventUid;
use crate::segment::SEGMENT_THETA;
use crate::segment::SegmentAddress;
use crate::spiral::ThetaRange;
use crate::window::StackMode;
use crate::window::Window;

use super::components::Components;
use super::lanes::PersistentLanes;
use super::overlap::HourEvent;
use super::union_find::UnionFind;

/// Spans smaller than this, angular or radial, are considered invisible.
const MIN_SPAN: f64 = 1e-9;

/// One drawable rectangle in (theta, band-fraction) space.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Unrolled angular bounds, already clipped to the visible range.
    pub theta_start: f64,
    pub theta_end: f64,
    /// Radial bounds as fractions of the band thickness, in [0, 1].
    pub radial_start: f64,
    pub radial_end: f64,
    pub color: u32,
    pub event: EventUid,
}

/// Compose the final slices for one hour segment.
pub fn compose(
    addr: SegmentAddress,
    active: &[HourEvent],
    events: &[Event],
    lanes: &PersistentLanes,
    components: &Components,
    window: &Window,
    visible: &ThetaRange,
) -> Vec<Slice> {
    if active.is_empty() {
        return Vec::new();
    }
    let (theta_base, _) = addr.theta_span();

    // Hour-local overlap groups: finer than window components, since only
    // this hour's pairwise minute overlaps count.
    let mut union_find = UnionFind::new(active.len());
    for i in 0..active.len() {
        for j in (i + 1)..active.len() {
            if active[i].start_minute < active[j].end_minute
                && active[j].start_minute < active[i].end_minute
            {
                union_find.union(i, j);
            }
        }
    }
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut root_to_group: FxHashMap<usize, usize> = FxHashMap::default();
    for i in 0..active.len() {
        let root = union_find.find(i);
        let next = groups.len();
        let group = *root_to_group.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            next
        });
        groups[group].push(i);
    }

    let mut slices = Vec::new();
    for group in &groups {
        match window.stack_mode {
            StackMode::Uniform => {
                compose_uniform(group, active, events, lanes, components, theta_base, visible, &mut slices);
            }
            StackMode::Stacked => {
                compose_stacked(group, active, events, lanes, theta_base, visible, &mut slices);
            }
        }
    }
    return slices;
}

/// Map a minute offset inside the hour onto the unrolled angle.
fn minute_theta(theta_base: f64, minute: f64) -> f64 {
    return theta_base + minute / 60.0 * SEGMENT_THETA;
}

/// Clip and emit one slice, dropping degenerate output.
fn push_slice(
    slices: &mut Vec<Slice>,
    visible: &ThetaRange,
    theta_start: f64,
    theta_end: f64,
    radial_start: f64,
    radial_end: f64,
    color: u32,
    event: &EventUid,
) {
    let radial_start = radial_start.clamp(0.0, 1.0);
    let radial_end = radial_end.clamp(0.0, 1.0);
    if radial_end - radial_start < MIN_SPAN {
        return;
    }
    let Some((theta_start, theta_end)) = visible.clip(theta_start, theta_end) else {
        return;
    };
    if theta_end - theta_start < MIN_SPAN {
        return;
    }
    slices.push(Slice {
        theta_start,
        theta_end,
        radial_start,
        radial_end,
        color,
        event: event.clone(),
    });
}

/// Uniform mode: constant per-event thickness, sized for the worst case.
fn compose_uniform(
    group: &[usize],
    active: &[HourEvent],
    events: &[Event],
    lanes: &PersistentLanes,
    components: &Components,
    theta_base: f64,
    visible: &ThetaRange,
    slices: &mut Vec<Slice>,
) {
    // Required slots: worst lifetime overlap of any member, or the number
    // of distinct persistent lanes present, whichever is larger.
    let member_lanes: Vec<u32> = group
        .iter()
        .map(|&i| lanes.lane(&events[active[i].event].uid))
        .collect();
    let mut distinct = member_lanes.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let worst = group
        .iter()
        .map(|&i| components.max_overlap_of(&events[active[i].event].uid))
        .max()
        .unwrap_or(1);
    let required = worst.max(distinct.len() as u32).max(1) as f64;

    for (slot, &i) in group.iter().enumerate() {
        let hour_event = &active[i];
        let uid = &events[hour_event.event].uid;
        // Compacted lane index within the group.
        let compact = distinct
            .binary_search(&member_lanes[slot])
            .unwrap_or(0) as f64;
        push_slice(
            slices,
            visible,
            minute_theta(theta_base, hour_event.start_minute),
            minute_theta(theta_base, hour_event.end_minute),
            compact / required,
            (compact + 1.0) / required,
            hour_event.color,
            uid,
        );
    }
}

/// Stacked mode: full band for the bottom occupant, slivers on top.
fn compose_stacked(
    group: &[usize],
    active: &[HourEvent],
    events: &[Event],
    lanes: &PersistentLanes,
    theta_base: f64,
    visible: &ThetaRange,
    slices: &mut Vec<Slice>,
) {
    // Bottom-to-top order: persistent lane, then global start, then uid.
    let mut order: Vec<usize> = group.to_vec();
    order.sort_by(|&a, &b| {
        let (ea, eb) = (&active[a], &active[b]);
        let (ua, ub) = (&events[ea.event].uid, &events[eb.event].uid);
        return lanes
            .lane(ua)
            .cmp(&lanes.lane(ub))
            .then(ea.start_ms.cmp(&eb.start_ms))
            .then(ua.cmp(ub));
    });

    // Minute boundaries from every member's clipped start and end.
    let mut bounds: Vec<f64> = Vec::with_capacity(group.len() * 2);
    for &i in group {
        bounds.push(active[i].start_minute);
        bounds.push(active[i].end_minute);
    }
    bounds.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    bounds.dedup();

    for pair in bounds.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if to - from < MIN_SPAN {
            continue;
        }
        // Members active throughout this sub-interval, bottom-to-top.
        let stacked: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| active[i].start_minute <= from && active[i].end_minute >= to)
            .collect();
        let count = stacked.len() as f64;
        for (rank, &i) in stacked.iter().enumerate() {
            let hour_event = &active[i];
            let radial_start = if rank == 0 { 0.0 } else { rank as f64 / count };
            push_slice(
                slices,
                visible,
                minute_theta(theta_base, from),
                minute_theta(theta_base, to),
                radial_start,
                1.0,
                hour_event.color,
                &events[hour_event.event].uid,
            );
        }
    }
}
