//! Hospital coordinator — owns the entity registries and the event log,
//! and drives time simulation.

use std::sync::Arc;

use wardsim_domain::device::Device;
use wardsim_domain::error::{InvalidDurationError, WardSimError};
use wardsim_domain::event::{Event, EventKind};
use wardsim_domain::log::SharedLog;
use wardsim_domain::room::IsolationRoom;
use wardsim_domain::source::EmfSource;

use crate::ports::Clock;

/// Central coordinator for one simulation run.
///
/// Owns the single event log and hands out shared handles to it; devices
/// and sources are registered in insertion order with duplicates allowed.
pub struct Hospital<C> {
    devices: Vec<Device>,
    sources: Vec<EmfSource>,
    log: SharedLog,
    clock: C,
}

impl<C: Clock> Hospital<C> {
    /// Create a coordinator around the given log sink and clock.
    pub fn new(log: SharedLog, clock: C) -> Self {
        Self {
            devices: Vec::new(),
            sources: Vec::new(),
            log,
            clock,
        }
    }

    /// Shared handle to the coordinator's event log, for injecting into
    /// entities at setup time.
    #[must_use]
    pub fn log(&self) -> SharedLog {
        Arc::clone(&self.log)
    }

    /// Register a device. No dedup, no validation.
    pub fn register_device(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Register an electromagnetic source. No dedup, no validation.
    pub fn register_source(&mut self, source: EmfSource) {
        self.sources.push(source);
    }

    /// Registered devices, in registration order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Registered sources, in registration order.
    #[must_use]
    pub fn sources(&self) -> &[EmfSource] {
        &self.sources
    }

    /// Log `TIME_SIMULATED` and suspend the process for `seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDurationError`] for negative durations (nothing is
    /// logged and the clock is untouched), or [`WardSimError::Log`] when
    /// the event cannot be recorded.
    #[tracing::instrument(skip(self))]
    pub fn simulate_time(&self, seconds: i64) -> Result<(), WardSimError> {
        if seconds < 0 {
            return Err(InvalidDurationError { seconds }.into());
        }
        self.log.append(&Event::system(EventKind::TimeSimulated))?;
        self.clock.sleep_secs(seconds.unsigned_abs());
        Ok(())
    }

    /// Simulate time inside a transient isolation-room scope.
    ///
    /// Produces exactly four log lines in order: room `ON`, system
    /// `TIME_SIMULATED`, system `TIME_SIMULATED_IN_ISOLATED_ROOM`, room
    /// `OFF`. The room is released even when the inner simulation fails.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`simulate_time`](Self::simulate_time).
    #[tracing::instrument(skip(self))]
    pub fn simulate_time_in_isolated_room(&self, seconds: i64) -> Result<(), WardSimError> {
        let mut room = IsolationRoom::new(Some(self.log()));
        room.while_isolated(|_| {
            self.simulate_time(seconds)?;
            self.log
                .append(&Event::system(EventKind::TimeSimulatedInIsolatedRoom))
        })
    }

    /// Usage summary for every registered source, in registration order.
    #[must_use]
    pub fn usage_report(&self) -> Vec<String> {
        self.sources.iter().map(EmfSource::usage_report).collect()
    }
}
