use chrono::{DateTime, Utc};

/// A record of something that happened to the registrar's data.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
pub trait Event: Clone + core::fmt::Debug + 'static {
    /// Stable event name/type identifier (e.g. "registry.student.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (wall-clock time of the mutation).
    fn occurred_at(&self) -> DateTime<Utc>;
}
