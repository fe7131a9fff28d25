//! # wardsim-app
//!
//! Application layer — the hospital coordinator and **port definitions**.
//!
//! ## Responsibilities
//! - Define the [`ports::Clock`] port so time suspension stays injectable
//! - Provide the [`services::hospital::Hospital`] coordinator: entity
//!   registries, time simulation (plain and isolated-room), and the
//!   aggregate usage report
//! - Orchestrate domain objects without knowing *how* the event log or the
//!   clock are implemented
//!
//! ## Dependency rule
//! Depends on `wardsim-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
