//! # wardsim-domain
//!
//! Pure domain model for the wardsim hospital simulation.
//!
//! ## Responsibilities
//! - Define **Devices** (medical equipment with an on/off flag and an
//!   interference-susceptibility check)
//! - Define **Electromagnetic sources** (emitters with an on/off flag and a
//!   cumulative usage-time counter)
//! - Define the **Isolation room** (a toggleable barrier state bracketing
//!   time-simulation periods)
//! - Define **Events** (state-change records) and the [`log::EventLog`]
//!   capability every entity writes through
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO. The log
//! sink is expressed as a trait; concrete sinks live in adapter crates.

pub mod error;
pub mod event;
pub mod log;

pub mod device;
pub mod room;
pub mod source;
