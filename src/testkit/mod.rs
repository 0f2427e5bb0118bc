//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`db`] - Throwaway migrated SQLite databases with account seeding.
//! - [`selector`] - Deterministic [`SlotSelector`](crate::port::outbound::SlotSelector).
//! - [`config`] - Canonical test configurations (cheap hashing, short timeouts).
//! - [`scheduler`] - A wired [`Scheduler`](crate::application::Scheduler) per database.

pub mod config;
pub mod db;
pub mod scheduler;
pub mod selector;
