//! Database configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::ConnectionOptions;

/// SQLite file location and pool tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file. Falls back to `~/.vaxsched/vaxsched.db` when unset.
    pub path: Option<PathBuf>,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// How long a writer waits for the database lock before failing.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            pool_size: 5,
            busy_timeout_ms: 5_000,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            pool_size: self.pool_size,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}
