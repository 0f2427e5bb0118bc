//! Outbound adapters (driven side).

pub mod random;
pub mod sqlite;
