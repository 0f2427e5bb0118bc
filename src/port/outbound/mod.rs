//! Outbound ports: what the application needs from the outside world.

pub mod selector;
pub mod store;

pub use selector::SlotSelector;
pub use store::{AccountStore, AvailabilityStore, BookingStore, InventoryStore};
