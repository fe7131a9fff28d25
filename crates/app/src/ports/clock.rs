//! Clock port — blocking time suspension.

use std::time::Duration;

/// Source of blocking sleeps for time simulation.
///
/// The whole system is single-threaded and synchronous; simulating time
/// suspends the process. Tests inject a recording fake instead.
pub trait Clock {
    /// Block the current thread for `secs` seconds.
    fn sleep_secs(&self, secs: u64);
}

/// Wall-clock implementation backed by [`std::thread::sleep`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep_secs(&self, secs: u64) {
        std::thread::sleep(Duration::from_secs(secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_immediately_for_zero_seconds() {
        let start = std::time::Instant::now();
        SystemClock.sleep_secs(0);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
