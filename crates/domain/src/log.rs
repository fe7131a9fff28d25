//! Event log contract — the capability every entity writes events through.
//!
//! The concrete sink lives in an adapter crate; the domain only knows that
//! an [`Event`] can be appended. The handle is constructed once by the
//! composition root and passed down explicitly — never a hidden global.

use std::sync::Arc;

use crate::error::WardSimError;
use crate::event::Event;

/// Append-only sink for domain events.
pub trait EventLog: Send + Sync {
    /// Append one event to the sink.
    ///
    /// Each append is independently durable once it returns.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the sink cannot be written;
    /// implementations must surface failures rather than swallow them.
    fn append(&self, event: &Event) -> Result<(), WardSimError>;
}

/// Shared handle to the single event log owned by the coordinator.
pub type SharedLog = Arc<dyn EventLog>;

/// Write `event` through `log`, falling back to stdout when no sink is
/// attached (demo entities may run without one).
pub(crate) fn record(log: Option<&SharedLog>, event: &Event) -> Result<(), WardSimError> {
    match log {
        Some(sink) => sink.append(event),
        None => {
            println!("{event}");
            Ok(())
        }
    }
}
