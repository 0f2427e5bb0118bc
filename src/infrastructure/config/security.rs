//! Credential hashing configuration.

use serde::Deserialize;

use crate::application::credential::{PasswordHasher, DEFAULT_ITERATIONS};

/// Fewest PBKDF2 rounds the configuration accepts.
pub const MIN_ITERATIONS: u32 = 1_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// PBKDF2-HMAC-SHA256 rounds for new and verified passwords.
    pub pbkdf2_iterations: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl SecurityConfig {
    #[must_use]
    pub fn hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.pbkdf2_iterations)
    }
}
