//! Event — an immutable record of something that happened.
//!
//! Events are produced when an entity changes state or the coordinator
//! simulates the passage of time. The wire format is one text line per
//! event: `"{emitter}: {kind}"`.

use serde::{Deserialize, Serialize};

/// Emitter name used by the coordinator for system-level events.
pub const SYSTEM_EMITTER: &str = "System";

/// The closed set of event kinds the simulation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    On,
    Off,
    Interference,
    TimeSimulated,
    TimeSimulatedInIsolatedRoom,
}

impl EventKind {
    /// The wire name written to the log, e.g. `"TIME_SIMULATED"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Interference => "INTERFERENCE",
            Self::TimeSimulated => "TIME_SIMULATED",
            Self::TimeSimulatedInIsolatedRoom => "TIME_SIMULATED_IN_ISOLATED_ROOM",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log record: who emitted it and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub emitter: String,
    pub kind: EventKind,
}

impl Event {
    /// Create an event attributed to `emitter`.
    pub fn new(emitter: impl Into<String>, kind: EventKind) -> Self {
        Self {
            emitter: emitter.into(),
            kind,
        }
    }

    /// Create an event attributed to the coordinator itself.
    #[must_use]
    pub fn system(kind: EventKind) -> Self {
        Self::new(SYSTEM_EMITTER, kind)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.emitter, self.kind)
    }
}
