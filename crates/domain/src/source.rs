//! Electromagnetic source — an emitter with a cumulative usage counter.
//!
//! Unlike [`Device`](crate::device::Device), power transitions are
//! idempotent: activating an already-on source changes nothing and writes
//! no log line.

use crate::error::{InvalidDurationError, WardSimError};
use crate::event::{Event, EventKind};
use crate::log::{self, SharedLog};

/// A named electromagnetic emitter tracking its total usage time.
pub struct EmfSource {
    pub name: String,
    is_on: bool,
    total_usage_secs: i64,
    log: Option<SharedLog>,
}

impl EmfSource {
    /// Create a source, off by default with zero accumulated usage.
    pub fn new(name: impl Into<String>, log: Option<SharedLog>) -> Self {
        Self {
            name: name.into(),
            is_on: false,
            total_usage_secs: 0,
            log,
        }
    }

    /// Whether the source is currently switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Accumulated usage time in seconds. Never decreases.
    #[must_use]
    pub fn total_usage_secs(&self) -> i64 {
        self.total_usage_secs
    }

    /// Switch the source on. Logs `ON` only when the state actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn activate(&mut self) -> Result<(), WardSimError> {
        if self.is_on {
            return Ok(());
        }
        self.is_on = true;
        self.record(EventKind::On)
    }

    /// Switch the source off. Logs `OFF` only when the state actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn deactivate(&mut self) -> Result<(), WardSimError> {
        if !self.is_on {
            return Ok(());
        }
        self.is_on = false;
        self.record(EventKind::Off)
    }

    /// Add `seconds` to the accumulated usage time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDurationError`] for negative durations; the total
    /// is left untouched. Zero is accepted.
    pub fn record_usage(&mut self, seconds: i64) -> Result<(), InvalidDurationError> {
        if seconds < 0 {
            return Err(InvalidDurationError { seconds });
        }
        self.total_usage_secs += seconds;
        Ok(())
    }

    /// Human-readable usage summary for this source.
    #[must_use]
    pub fn usage_report(&self) -> String {
        format!(
            "{}: Total usage time - {} seconds",
            self.name, self.total_usage_secs
        )
    }

    /// Run `body` with the source switched on, switching it off again when
    /// the scope ends — even when `body` fails.
    ///
    /// # Errors
    ///
    /// Returns the body's error when it fails (the source is still switched
    /// off first); otherwise any log error from the power transitions.
    pub fn while_on<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, WardSimError>,
    ) -> Result<T, WardSimError> {
        self.activate()?;
        match body(self) {
            Ok(value) => {
                self.deactivate()?;
                Ok(value)
            }
            Err(err) => {
                // The body's error is the interesting one; a log failure
                // during release would abort the run anyway.
                let _ = self.deactivate();
                Err(err)
            }
        }
    }

    fn record(&self, kind: EventKind) -> Result<(), WardSimError> {
        log::record(self.log.as_ref(), &Event::new(self.name.clone(), kind))
    }
}
