//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the account, inventory,
//! availability and booking stores using Diesel ORM.

pub mod account;
pub mod availability;
pub mod booking;
pub mod database;
pub mod inventory;

pub use account::SqliteAccountStore;
pub use availability::SqliteAvailabilityStore;
pub use booking::SqliteBookingStore;
pub use inventory::SqliteInventoryStore;
