//! Storage-agnostic scheduling types.
//!
//! - [`account`] - roles, credentials and identities
//! - [`appointment`] - booked appointments
//! - [`date`] - `mm-dd-yyyy` parsing and `yyyy-mm-dd` storage form
//! - [`error`] - validation errors
//! - [`id`] - usernames, vaccine names and appointment ids
//! - [`session`] - the login state machine
//! - [`vaccine`] - dose inventory

pub mod account;
pub mod appointment;
pub mod date;
pub mod error;
pub mod id;
pub mod session;
pub mod vaccine;

pub use account::{Credentials, Identity, Role};
pub use appointment::Appointment;
pub use date::{DatePolicy, ScheduleDate};
pub use id::{AppointmentId, Username, VaccineName};
pub use session::{Requirement, Session};
pub use vaccine::Vaccine;
