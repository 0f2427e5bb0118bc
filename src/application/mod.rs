//! Application services (use cases).
//!
//! These services sit between the command loop and the outbound stores:
//!
//! - [`credential`] - password hashing, registration and login checks
//! - [`inventory`] - vaccine dose ledger
//! - [`availability`] - caregiver availability registry
//! - [`booking`] - atomic booking and cancellation
//! - [`scheduler`] - session-gated facade over all of the above

pub mod availability;
pub mod booking;
pub mod credential;
pub mod inventory;
pub mod scheduler;

pub use scheduler::{ScheduleView, Scheduler};
