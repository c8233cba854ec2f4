//! Timespiral - a polar time-layout engine.
//!
//! Renders a continuous timeline as a "time spiral": one-hour arc segments
//! wound outward as a spiral or collapsed into concentric day-rings, with
//! overlapping calendar events packed into stable visual lanes. This crate
//! computes the data for rendering - angles, radii, polylines and slice
//! rectangles - and leaves the drawing calls to the caller.
//!
//! # Quick Start
//!
//! ```
//! use timespiral::event::{Event, EventUid};
//! use timespiral::layout::{self, LayoutCache};
//! use timespiral::window::Window;
//!
//! // A 7-day window starting at the epoch.
//! let window = Window::new(0, 7);
//!
//! // Two overlapping events, identified by stable UIDs.
//! let hour = 3_600_000;
//! let events = vec![
//!     Event { uid: EventUid::new("standup"), start_ms: 9 * hour,
//!             end_ms: 10 * hour, color: 0x336699ff, calendar: "work".into() },
//!     Event { uid: EventUid::new("review"), start_ms: 9 * hour + hour / 2,
//!             end_ms: 11 * hour, color: 0x996633ff, calendar: "work".into() },
//! ];
//!
//! // The cache is the engine's only retained state.
//! let mut cache = LayoutCache::new();
//! let slices = layout::frame_slices(&mut cache, &window, &events, 1);
//! assert!(!slices.is_empty());
//! ```

pub mod event;
pub mod layout;
pub mod sampler;
pub mod segment;
pub mod spiral;
pub mod window;
