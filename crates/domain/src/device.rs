//! Device — a piece of medical equipment with an on/off state.
//!
//! Devices log every power transition unconditionally: two `activate` calls
//! in a row produce two `ON` lines. Contrast with
//! [`EmfSource`](crate::source::EmfSource), which only logs actual state
//! changes.

use rand::Rng;

use crate::error::WardSimError;
use crate::event::{Event, EventKind};
use crate::log::{self, SharedLog};

/// A named piece of equipment that can be switched on and off and checked
/// for electromagnetic-interference susceptibility.
pub struct Device {
    pub name: String,
    is_on: bool,
    log: Option<SharedLog>,
}

impl Device {
    /// Create a device, off by default, writing events through `log`.
    pub fn new(name: impl Into<String>, log: Option<SharedLog>) -> Self {
        Self {
            name: name.into(),
            is_on: false,
            log,
        }
    }

    /// Whether the device is currently switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Switch the device on and log `ON`, regardless of prior state.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn activate(&mut self) -> Result<(), WardSimError> {
        self.is_on = true;
        self.record(EventKind::On)
    }

    /// Switch the device off and log `OFF`, regardless of prior state.
    ///
    /// # Errors
    ///
    /// Returns [`WardSimError::Log`] when the event cannot be recorded.
    pub fn deactivate(&mut self) -> Result<(), WardSimError> {
        self.is_on = false;
        self.record(EventKind::Off)
    }

    /// Coin-flip check for interference susceptibility.
    ///
    /// Stateless: the result is not a function of the device's identity or
    /// power state. Callers inject the randomness source, so tests can use
    /// a seeded generator.
    pub fn check_interference<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(0.5)
    }

    /// Run `body` with the device switched on.
    ///
    /// The device is deliberately left on when the scope ends; only
    /// activation is bracketed. Switching off again is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns the activation log error or whatever `body` returns.
    pub fn powered<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, WardSimError>,
    ) -> Result<T, WardSimError> {
        self.activate()?;
        body(self)
    }

    fn record(&self, kind: EventKind) -> Result<(), WardSimError> {
        log::record(self.log.as_ref(), &Event::new(self.name.clone(), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidDurationError;
    use crate::log::EventLog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingLog {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingLog {
        fn lines(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    impl EventLog for RecordingLog {
        fn append(&self, event: &Event) -> Result<(), WardSimError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct FailingLog;

    impl EventLog for FailingLog {
        fn append(&self, _event: &Event) -> Result<(), WardSimError> {
            Err(WardSimError::Log("sink unavailable".into()))
        }
    }

    fn device_with_log() -> (Device, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let device = Device::new("EKG", Some(log.clone() as SharedLog));
        (device, log)
    }

    #[test]
    fn should_default_to_off() {
        let (device, _) = device_with_log();
        assert!(!device.is_on());
    }

    #[test]
    fn should_log_every_activate_call_even_when_already_on() {
        let (mut device, log) = device_with_log();
        device.activate().unwrap();
        device.activate().unwrap();
        device.deactivate().unwrap();
        device.deactivate().unwrap();

        assert_eq!(
            log.lines(),
            vec!["EKG: ON", "EKG: ON", "EKG: OFF", "EKG: OFF"]
        );
    }

    #[test]
    fn should_stay_on_after_powered_scope_ends() {
        let (mut device, log) = device_with_log();
        device.powered(|_| Ok(())).unwrap();

        assert!(device.is_on());
        assert_eq!(log.lines(), vec!["EKG: ON"]);
    }

    #[test]
    fn should_propagate_body_error_from_powered_scope() {
        let (mut device, _) = device_with_log();
        let result = device.powered(|_| -> Result<(), WardSimError> {
            Err(InvalidDurationError { seconds: -1 }.into())
        });
        assert!(matches!(result, Err(WardSimError::InvalidDuration(_))));
        assert!(device.is_on());
    }

    #[test]
    fn should_propagate_log_failure_from_activate() {
        let mut device = Device::new("EKG", Some(Arc::new(FailingLog) as SharedLog));
        let result = device.activate();
        assert!(matches!(result, Err(WardSimError::Log(_))));
    }

    #[test]
    fn should_produce_reproducible_interference_with_seeded_rng() {
        let (device, _) = device_with_log();
        let first: Vec<bool> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| device.check_interference(&mut rng)).collect()
        };
        let second: Vec<bool> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| device.check_interference(&mut rng)).collect()
        };
        assert_eq!(first, second);
    }
}
