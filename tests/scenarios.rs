//! End-to-end scenario tests, driven by JSON event fixtures.
//!
//! Fixtures describe events the way an external calendar store would hand
//! them over: stable UID, instants, color, calendar tag. Each scenario
//! builds a window, runs the full frame pipeline, and checks the slices.

use serde::Deserialize;
use timespiral::event::{Event, EventUid};
use timespiral::layout::{self, LayoutCache, Slice};
use timespiral::spiral;
use timespiral::window::{StackMode, TAU, Window};

#[derive(Deserialize)]
struct EventFixture {
    uid: String,
    start_minute: i64,
    end_minute: i64,
    #[serde(default)]
    color: u32,
    #[serde(default)]
    calendar: String,
}

fn load_events(json: &str) -> Vec<Event> {
    let fixtures: Vec<EventFixture> = serde_json::from_str(json).expect("valid fixture json");
    return fixtures
        .into_iter()
        .map(|f| Event {
            uid: EventUid::new(f.uid),
            start_ms: f.start_minute * 60_000,
            end_ms: f.end_minute * 60_000,
            color: f.color,
            calendar: f.calendar,
        })
        .collect();
}

fn frame(events: &[Event], window: &Window) -> Vec<Slice> {
    let mut cache = LayoutCache::new();
    return layout::frame_slices(&mut cache, window, events, 1);
}

fn slices_for<'s>(slices: &'s [Slice], uid: &str) -> Vec<&'s Slice> {
    return slices.iter().filter(|s| s.event.as_str() == uid).collect();
}

/// Scenario A: two events in one hour, [0, 30) and [30, 60) minutes. No
/// overlap, so both land in persistent lane 0 and occupy the same radial
/// band, side by side angularly.
#[test]
fn scenario_a_back_to_back_events_share_the_band() {
    let events = load_events(
        r#"[
            {"uid": "first", "start_minute": 0, "end_minute": 30},
            {"uid": "second", "start_minute": 30, "end_minute": 60}
        ]"#,
    );
    let slices = frame(&events, &Window::new(0, 2));
    assert_eq!(slices.len(), 2);
    let first = slices_for(&slices, "first")[0];
    let second = slices_for(&slices, "second")[0];
    assert_eq!(first.radial_start, second.radial_start, "same lane, same band");
    assert_eq!(first.radial_end, second.radial_end);
    assert!(first.theta_end <= second.theta_start, "no angular overlap");
}

/// Scenario B: [0, 40), [10, 50), [45, 60) form a chain of pairwise
/// overlaps. No two overlapping events may share a radial band, and the
/// non-overlapping pair reuses one.
#[test]
fn scenario_b_chained_overlaps() {
    let events = load_events(
        r#"[
            {"uid": "a", "start_minute": 0, "end_minute": 40},
            {"uid": "b", "start_minute": 10, "end_minute": 50},
            {"uid": "c", "start_minute": 45, "end_minute": 60}
        ]"#,
    );
    let slices = frame(&events, &Window::new(0, 2));
    let a = slices_for(&slices, "a")[0];
    let b = slices_for(&slices, "b")[0];
    let c = slices_for(&slices, "c")[0];
    assert_ne!(a.radial_start, b.radial_start, "a and b overlap");
    assert_ne!(b.radial_start, c.radial_start, "b and c overlap");
    assert_eq!(a.radial_start, c.radial_start, "the disjoint pair shares a band");
}

/// Scenario C: a 5-hour event with a 10-minute companion in its third
/// hour keeps the same half-band thickness in all five hours.
#[test]
fn scenario_c_uniform_thickness_across_hours() {
    let events = load_events(
        r#"[
            {"uid": "long", "start_minute": 0, "end_minute": 300},
            {"uid": "blip", "start_minute": 140, "end_minute": 150}
        ]"#,
    );
    let slices = frame(&events, &Window::new(0, 2));
    let long = slices_for(&slices, "long");
    assert_eq!(long.len(), 5, "one slice per touched hour");
    for slice in &long {
        let thickness = slice.radial_end - slice.radial_start;
        assert!((thickness - 0.5).abs() < 1e-12, "sized for 2-way overlap: {thickness}");
    }
}

/// Scenario D: the snail-shell visibility rule for 7 days at rotation 0.
#[test]
fn scenario_d_visibility_range() {
    let range = spiral::visibility_range(0.0, 7.0 * TAU);
    assert!((range.max - 6.0 * TAU).abs() < 1e-9);
    assert!((range.min - (6.0 * TAU - 7.0 * TAU - TAU)).abs() < 1e-9);
}

/// Stacked mode on the Scenario C fixture: the long event keeps its full
/// band everywhere, and the blip overlays a half-height sliver.
#[test]
fn stacked_mode_overlays_instead_of_splitting() {
    let events = load_events(
        r#"[
            {"uid": "long", "start_minute": 0, "end_minute": 300},
            {"uid": "blip", "start_minute": 140, "end_minute": 150}
        ]"#,
    );
    let mut window = Window::new(0, 2);
    window.stack_mode = StackMode::Stacked;
    let slices = frame(&events, &window);
    for slice in slices_for(&slices, "long") {
        assert_eq!((slice.radial_start, slice.radial_end), (0.0, 1.0));
    }
    let blip = slices_for(&slices, "blip");
    assert_eq!(blip.len(), 1);
    assert_eq!((blip[0].radial_start, blip[0].radial_end), (0.5, 1.0));
}

/// The same frame twice from one cache is byte-for-byte identical, and a
/// version bump with identical events does not change the result either.
#[test]
fn frames_are_deterministic() {
    let events = load_events(
        r#"[
            {"uid": "a", "start_minute": 0, "end_minute": 90, "color": 1},
            {"uid": "b", "start_minute": 30, "end_minute": 200, "color": 2},
            {"uid": "c", "start_minute": 180, "end_minute": 240, "color": 3}
        ]"#,
    );
    let window = Window::new(0, 2);
    let mut cache = LayoutCache::new();
    let first = layout::frame_slices(&mut cache, &window, &events, 1);
    let second = layout::frame_slices(&mut cache, &window, &events, 1);
    let rebuilt = layout::frame_slices(&mut cache, &window, &events, 2);
    assert_eq!(first, second);
    assert_eq!(first, rebuilt);
}

/// Out-of-window and reversed events flow through the whole pipeline
/// without panicking and without producing output.
#[test]
fn degenerate_events_degrade_quietly() {
    let events = load_events(
        r#"[
            {"uid": "past", "start_minute": -3000, "end_minute": -2000},
            {"uid": "reversed", "start_minute": 50, "end_minute": 10},
            {"uid": "dot", "start_minute": 20, "end_minute": 20}
        ]"#,
    );
    let slices = frame(&events, &Window::new(0, 2));
    assert!(slices.is_empty());
}
