//! Calendar events as the layout engine sees them.
//!
//! The engine never owns events. The surrounding application keeps the
//! canonical collection and passes a slice in; we read start/end/identity
//! and nothing else. The `calendar` tag rides along for the caller's
//! filtering but is opaque to every algorithm here.
//!
//! Identity is the `EventUid` string, never reference identity. Two
//! structurally identical events with different UIDs are different events;
//! the same UID seen across two frames is the same event, which is what
//! makes lane assignments stable across recomputes.

/// Stable identity of an event, assigned by the external store.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventUid(pub String);

impl EventUid {
    /// Build a UID from anything string-like.
    pub fn new(uid: impl Into<String>) -> EventUid {
        return EventUid(uid.into());
    }

    /// The raw UID string.
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl std::fmt::Debug for EventUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "EventUid({})", self.0);
    }
}

impl From<&str> for EventUid {
    fn from(uid: &str) -> EventUid {
        return EventUid(uid.to_string());
    }
}

/// A single calendar event. Instants are unix milliseconds.
///
/// `end_ms > start_ms` in normal use, but nothing here assumes it: a
/// zero-length or reversed event flows through every algorithm and simply
/// produces no (or degenerate, clamped) output.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub uid: EventUid,
    pub start_ms: i64,
    pub end_ms: i64,
    /// Fixed visual identifier, 0xRRGGBBAA. Carried through to slices.
    pub color: u32,
    /// Source-calendar tag. Used by external filtering only.
    pub calendar: String,
}

impl Event {
    /// Total duration in minutes, never negative.
    pub fn duration_minutes(&self) -> f64 {
        return (self.end_ms - self.start_ms).max(0) as f64 / 60_000.0;
    }

    /// True if the event intersects the half-open interval [from_ms, to_ms).
    pub fn overlaps(&self, from_ms: i64, to_ms: i64) -> bool {
        return self.start_ms < to_ms && self.end_ms > from_ms;
    }
}
