//! vaxsched - an interactive vaccine appointment scheduler.
//!
//! Patients and caregivers register and log in at a line-oriented prompt.
//! Caregivers publish the dates they are free and stock vaccine doses;
//! patients reserve a dose on a date and are assigned one free caregiver at
//! random. Booking and cancellation each run as a single SQLite transaction,
//! so a slot, a dose and an appointment always change together.
//!
//! # Architecture
//!
//! - [`domain`] - Storage-agnostic types: dates, ids, sessions, appointments
//! - [`port`] - Store and selector traits the application depends on
//! - [`application`] - Use cases: credentials, inventory, availability, booking
//! - [`adapter`] - SQLite stores, random selection and the CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use vaxsched::domain::{Role, Session, Username};
//! use vaxsched::infrastructure::bootstrap::bootstrap;
//! use vaxsched::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let scheduler = bootstrap(Path::new("scheduler.db"), &config)?;
//!
//!     let mut session = Session::default();
//!     let user = Username::new("c1");
//!     scheduler.create_account(Role::Caregiver, &user, "secret")?;
//!     scheduler.login(&mut session, Role::Caregiver, &user, "secret")?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
