//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The event log port lives in the domain crate (entities write to
//! it directly); the clock lives here.

pub mod clock;

pub use clock::{Clock, SystemClock};
