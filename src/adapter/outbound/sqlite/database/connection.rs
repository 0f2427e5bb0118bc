//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Per-connection settings applied whenever the pool opens a connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// How long a statement waits on another writer's lock before failing.
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            pool_size: 5,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, options: ConnectionOptions) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(options.pool_size)
        .connection_customizer(Box::new(options))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(count = applied.len(), "Applied pending migrations");
    Ok(())
}

/// Switch the database file to write-ahead logging.
///
/// Readers then never block the single writer. The mode is persistent, so
/// this only needs to run once per database file.
///
/// # Errors
/// Returns an error if the pragma fails.
pub fn enable_wal(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.batch_execute("PRAGMA journal_mode=WAL")?;
    Ok(())
}

/// Configure SQLite connection pragmas.
///
/// Sets the lock wait used by concurrent writers and turns on foreign key
/// enforcement, which SQLite leaves off per connection by default.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout: Duration,
) -> QueryResult<()> {
    conn.batch_execute(&format!(
        "PRAGMA busy_timeout={}; PRAGMA foreign_keys=ON;",
        busy_timeout.as_millis()
    ))
}

/// Build a sqlite database URL from a filesystem path.
#[must_use]
pub fn sqlite_database_url(path: &std::path::Path) -> String {
    path.display().to_string()
}
