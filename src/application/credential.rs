//! Account registration and login verification.
//!
//! Passwords are never stored. Each account gets a fresh random salt and a
//! PBKDF2-HMAC-SHA256 derived key; login recomputes the key and compares it
//! in constant time.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::{debug, info};

use crate::domain::{Credentials, Role, Username};
use crate::error::{AuthError, Result};
use crate::port::outbound::store::AccountStore;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes.
pub const HASH_LEN: usize = 16;

/// PBKDF2 rounds used unless configured otherwise.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Salt generation and key derivation.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher {
    #[must_use]
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Fresh salt from the operating system's CSPRNG.
    #[must_use]
    pub fn generate_salt(&self) -> Vec<u8> {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        salt
    }

    /// Derive the stored key for `password` under `salt`.
    #[must_use]
    pub fn derive(&self, password: &str, salt: &[u8]) -> Vec<u8> {
        let mut key = vec![0u8; HASH_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, self.iterations, &mut key);
        key
    }

    /// Salt and hash a new password.
    #[must_use]
    pub fn hash(&self, password: &str) -> Credentials {
        let salt = self.generate_salt();
        let hash = self.derive(password, &salt);
        Credentials { salt, hash }
    }

    /// Whether `password` reproduces the stored key.
    #[must_use]
    pub fn verify(&self, password: &str, stored: &Credentials) -> bool {
        let candidate = self.derive(password, &stored.salt);
        constant_time_eq::constant_time_eq(&candidate, &stored.hash)
    }
}

/// Stand-in compared against when the account does not exist, so an unknown
/// username costs the same key derivation as a wrong password.
const DECOY: Credentials = Credentials {
    salt: Vec::new(),
    hash: Vec::new(),
};

/// Registers accounts and checks logins against the account store.
pub struct CredentialService {
    store: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
}

impl CredentialService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Create an account for `role`.
    ///
    /// # Errors
    /// Returns [`AuthError::DuplicateUsername`] if the username is taken, or a
    /// persistence error.
    pub fn register(&self, role: Role, username: &Username, password: &str) -> Result<()> {
        if self.store.exists(role, username)? {
            return Err(AuthError::DuplicateUsername {
                username: username.to_string(),
            }
            .into());
        }

        let credentials = self.hasher.hash(password);
        self.store.create(role, username, &credentials)?;
        info!(%role, %username, "Account created");
        Ok(())
    }

    /// Verify a login attempt.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] for both an unknown username
    /// and a wrong password.
    pub fn authenticate(&self, role: Role, username: &Username, password: &str) -> Result<()> {
        let stored = self.store.credentials(role, username)?;
        let matched = match &stored {
            Some(credentials) => self.hasher.verify(password, credentials),
            None => {
                let _ = self.hasher.verify(password, &DECOY);
                false
            }
        };

        if !matched {
            if stored.is_some() {
                debug!(%role, %username, "Login with wrong password");
            } else {
                debug!(%role, %username, "Login for unknown account");
            }
            return Err(AuthError::InvalidCredentials.into());
        }
        Ok(())
    }
}
