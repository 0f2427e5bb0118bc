//! Temporary SQLite databases for tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::adapter::outbound::sqlite::account::SqliteAccountStore;
use crate::adapter::outbound::sqlite::database::connection::{
    create_pool, enable_wal, run_migrations, sqlite_database_url, DbPool,
};
use crate::domain::{Credentials, Role, Username};
use crate::port::outbound::store::AccountStore;

use super::config::connection_options;

static NEXT_DB: AtomicU64 = AtomicU64::new(0);

/// Migrated SQLite database file removed on drop.
pub struct TempDb {
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    /// Create a fresh database under the system temp directory.
    ///
    /// # Panics
    /// Panics if the database cannot be created; this is test-only code.
    #[must_use]
    pub fn create() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = NEXT_DB.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!(
            "vaxsched-{}-{nanos}-{seq}.db",
            std::process::id()
        ));

        let pool = create_pool(&sqlite_database_url(&path), connection_options())
            .expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        enable_wal(&pool).expect("enable WAL mode");

        Self { path, pool }
    }

    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a patient with throwaway credentials.
    pub fn add_patient(&self, username: &str) {
        self.add_account(Role::Patient, username);
    }

    /// Insert a caregiver with throwaway credentials.
    pub fn add_caregiver(&self, username: &str) {
        self.add_account(Role::Caregiver, username);
    }

    fn add_account(&self, role: Role, username: &str) {
        let credentials = Credentials {
            salt: vec![0; 16],
            hash: vec![0; 16],
        };
        SqliteAccountStore::new(self.pool.clone())
            .create(role, &Username::new(username), &credentials)
            .expect("seed account");
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("db-wal"));
        let _ = std::fs::remove_file(self.path.with_extension("db-shm"));
    }
}
