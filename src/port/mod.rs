//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Adapters implement them to plug the scheduler into a database and a
//! source of randomness.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌─────────────┐
//! │   CLI   │                                          │   SQLite    │
//! │ Adapter │                                          │   Adapter   │
//! └─────────┘                                          └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::store`] - account, inventory, availability and booking persistence
//! - [`outbound::selector`] - caregiver selection for a booking

pub mod outbound;
