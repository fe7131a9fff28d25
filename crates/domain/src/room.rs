//! Isolation room — an electromagnetically shielded state bracketing
//! time-simulation periods.

use serde::{Deserialize, Serialize};

use crate::error::WardSimError;
use crate::event::{Event, EventKind};
use crate::log::{self, SharedLog};

/// Emitter name the room logs under.
pub const ROOM_EMITTER: &str = "Isolation room";

/// Whether the room's shielding is engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationState {
    #[default]
    Off,
    On,
}

/// The isolation room. Toggling is idempotent: re-engaging an engaged room
/// (or releasing a released one) changes nothing and writes no log line.
pub struct IsolationRoom {
    state: IsolationState,
    log: Option<SharedLog>,
}

impl IsolationRoom {
    /// Create a room with shielding disengaged.
    #[must_use]
    pub fn new(log: Option<SharedLog>) -> Self {
        Self {
            state: IsolationState::Off,
            log,
        }
    }

    /// Current shielding state.
    #[must_use]
    pub fn state(&self) -> IsolationState {
        self.state
    }

    /// Engage the shielding; no-op when already engaged.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn turn_on(&mut self) -> Result<(), WardSimError> {
        if self.state == IsolationState::On {
            return Ok(());
        }
        self.state = IsolationState::On;
        self.record(EventKind::On)
    }

    /// Release the shielding; no-op when already released.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn turn_off(&mut self) -> Result<(), WardSimError> {
        if self.state == IsolationState::Off {
            return Ok(());
        }
        self.state = IsolationState::Off;
        self.record(EventKind::Off)
    }

    /// Run `body` with the shielding engaged, releasing it when the scope
    /// ends — even when `body` fails.
    ///
    /// # Errors
    ///
    /// Returns the body's error when it fails (the room is still released
    /// first); otherwise any log error from the toggles.
    pub fn while_isolated<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, WardSimError>,
    ) -> Result<T, WardSimError> {
        self.turn_on()?;
        match body(self) {
            Ok(value) => {
                self.turn_off()?;
                Ok(value)
            }
            Err(err) => {
                let _ = self.turn_off();
                Err(err)
            }
        }
    }

    fn record(&self, kind: EventKind) -> Result<(), WardSimError> {
        log::record(self.log.as_ref(), &Event::new(ROOM_EMITTER, kind))
    }
}
