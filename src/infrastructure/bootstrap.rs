//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::random::UniformSelector;
use crate::adapter::outbound::sqlite::database::connection::{
    create_pool, enable_wal, run_migrations, sqlite_database_url, DbPool,
};
use crate::adapter::outbound::sqlite::{
    SqliteAccountStore, SqliteAvailabilityStore, SqliteBookingStore, SqliteInventoryStore,
};
use crate::application::availability::AvailabilityRegistry;
use crate::application::booking::BookingManager;
use crate::application::credential::{CredentialService, PasswordHasher};
use crate::application::inventory::InventoryLedger;
use crate::application::Scheduler;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::selector::SlotSelector;

/// Open the SQLite file at `path`, creating it and its parent directory if
/// needed, and bring the schema up to date.
///
/// # Errors
/// Returns an IO error if the directory cannot be created, or a persistence
/// error if the pool, migrations or WAL switch fail.
pub fn open_database(path: &Path, config: &Config) -> Result<DbPool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = create_pool(
        &sqlite_database_url(path),
        config.database.connection_options(),
    )?;
    run_migrations(&pool)?;
    enable_wal(&pool)?;
    info!(path = %path.display(), "Database ready");
    Ok(pool)
}

/// Wire every service over one pool.
#[must_use]
pub fn build_scheduler(
    pool: &DbPool,
    hasher: PasswordHasher,
    selector: Arc<dyn SlotSelector>,
) -> Scheduler {
    Scheduler::new(
        CredentialService::new(Arc::new(SqliteAccountStore::new(pool.clone())), hasher),
        InventoryLedger::new(Arc::new(SqliteInventoryStore::new(pool.clone()))),
        AvailabilityRegistry::new(Arc::new(SqliteAvailabilityStore::new(pool.clone()))),
        BookingManager::new(Arc::new(SqliteBookingStore::new(pool.clone())), selector),
    )
}

/// Open the database and build a scheduler with uniform random caregiver
/// selection.
///
/// # Errors
/// Returns any error from [`open_database`].
pub fn bootstrap(path: &Path, config: &Config) -> Result<Scheduler> {
    let pool = open_database(path, config)?;
    Ok(build_scheduler(
        &pool,
        config.security.hasher(),
        Arc::new(UniformSelector),
    ))
}
