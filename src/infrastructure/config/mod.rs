//! Infrastructure configuration modules.

pub mod database;
pub mod logging;
pub mod schedule;
pub mod security;
pub mod settings;
