//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.
//! Avoids each test module defining its own slightly-different defaults.

use std::time::Duration;

use crate::adapter::outbound::sqlite::database::connection::ConnectionOptions;
use crate::application::credential::PasswordHasher;

/// Lowest iteration count the configuration accepts; keeps tests fast.
pub const TEST_ITERATIONS: u32 = 1_000;

/// Password hasher with a cheap iteration count.
#[must_use]
pub fn hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_ITERATIONS)
}

/// Pool options for tests: enough connections for concurrency tests and a
/// lock wait long enough that serialized writers never time out.
#[must_use]
pub fn connection_options() -> ConnectionOptions {
    ConnectionOptions {
        pool_size: 8,
        busy_timeout: Duration::from_secs(10),
    }
}
