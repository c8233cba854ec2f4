//! The layout cache: one entry, replaced wholesale.
//!
//! Persistent lanes and components are mutually dependent (components need
//! finished lanes), so partial invalidation is not supported by design.
//! `ensure` compares the cached window bounds and event-set version against
//! the caller's; any difference rebuilds everything, otherwise the entry is
//! returned untouched. The version counter is owned externally and must be
//! bumped before or atomically with any event mutation.
//!
//! The cache is the engine's only retained state, and it is owned by the
//! caller, not hidden in a global.

use crate::event::Event;
use crate::window::Window;

use super::components;
use super::components::Components;
use super::lanes;
use super::lanes::PersistentLanes;

/// The layout computed for one (window, event-set version) pair.
#[derive(Clone, Debug)]
pub struct LayoutEntry {
    pub window_start_ms: i64,
    pub window_end_ms: i64,
    pub events_version: u64,
    pub lanes: PersistentLanes,
    pub components: Components,
}

/// Memoizes the lane and component computations for the current window.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    entry: Option<LayoutEntry>,
}

impl LayoutCache {
    pub fn new() -> LayoutCache {
        return LayoutCache { entry: None };
    }

    /// True if the cached entry matches this window and version.
    fn is_fresh(&self, window: &Window, version: u64) -> bool {
        return self.entry.as_ref().is_some_and(|entry| {
            entry.window_start_ms == window.start_ms()
                && entry.window_end_ms == window.end_ms()
                && entry.events_version == version
        });
    }

    /// Return the layout for this window, rebuilding it if the window
    /// bounds or the event-set version changed.
    pub fn ensure(&mut self, window: &Window, events: &[Event], version: u64) -> &LayoutEntry {
        if self.is_fresh(window, version) {
            return self.entry.as_ref().expect("fresh cache holds an entry");
        }
        let lanes = lanes::assign(events, window);
        let components = components::group(events, window, &lanes);
        return self.entry.insert(LayoutEntry {
            window_start_ms: window.start_ms(),
            window_end_ms: window.end_ms(),
            events_version: version,
            lanes,
            components,
        });
    }
}
