//! SQLite vaccine inventory.
//!
//! The connection-level functions are shared with the booking store so that
//! dose changes can join a larger transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::VaccineRow;
use crate::adapter::outbound::sqlite::database::schema::vaccines;
use crate::domain::{Vaccine, VaccineName};
use crate::error::{NotFoundError, Result, ScheduleError};
use crate::port::outbound::store::InventoryStore;

/// Add `amount` doses, creating the vaccine row if needed.
///
/// A single upsert statement, so two first-time adds never collide.
pub(crate) fn increment(
    conn: &mut SqliteConnection,
    name: &VaccineName,
    amount: u32,
) -> Result<Vaccine> {
    let amount = i64::from(amount);
    diesel::insert_into(vaccines::table)
        .values(VaccineRow {
            name: name.to_string(),
            doses: amount,
        })
        .on_conflict(vaccines::name)
        .do_update()
        .set(vaccines::doses.eq(vaccines::doses + amount))
        .execute(conn)?;

    let row: VaccineRow = vaccines::table
        .find(name.as_str())
        .select(VaccineRow::as_select())
        .first(conn)?;
    Ok(row.into())
}

/// Remove `amount` doses.
///
/// The update only matches when enough doses remain, so the count can never
/// drop below zero and a concurrent decrement cannot be lost.
pub(crate) fn decrement(
    conn: &mut SqliteConnection,
    name: &VaccineName,
    amount: u32,
) -> Result<Vaccine> {
    let requested = i64::from(amount);
    let updated = diesel::update(
        vaccines::table
            .filter(vaccines::name.eq(name.as_str()))
            .filter(vaccines::doses.ge(requested)),
    )
    .set(vaccines::doses.eq(vaccines::doses - requested))
    .execute(conn)?;

    let row: Option<VaccineRow> = vaccines::table
        .find(name.as_str())
        .select(VaccineRow::as_select())
        .first(conn)
        .optional()?;

    match (updated, row) {
        (_, None) => Err(NotFoundError::Vaccine {
            name: name.to_string(),
        }
        .into()),
        (0, Some(row)) => Err(ScheduleError::InsufficientDoses {
            vaccine: name.to_string(),
            available: row.doses,
            requested: amount,
        }
        .into()),
        (_, Some(row)) => Ok(row.into()),
    }
}

/// SQLite-backed vaccine inventory.
pub struct SqliteInventoryStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteInventoryStore {
    /// Create a new SQLite inventory store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl InventoryStore for SqliteInventoryStore {
    fn add_doses(&self, name: &VaccineName, amount: u32) -> Result<Vaccine> {
        let mut conn = self.pool.get()?;
        let vaccine = conn.immediate_transaction(|conn| increment(conn, name, amount))?;
        debug!(vaccine = %name, doses = vaccine.doses, "Added doses");
        Ok(vaccine)
    }

    fn remove_doses(&self, name: &VaccineName, amount: u32) -> Result<Vaccine> {
        let mut conn = self.pool.get()?;
        let vaccine = conn.immediate_transaction(|conn| decrement(conn, name, amount))?;
        debug!(vaccine = %name, doses = vaccine.doses, "Removed doses");
        Ok(vaccine)
    }

    fn get(&self, name: &VaccineName) -> Result<Option<Vaccine>> {
        let mut conn = self.pool.get()?;
        let row: Option<VaccineRow> = vaccines::table
            .find(name.as_str())
            .select(VaccineRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Vaccine::from))
    }

    fn list(&self) -> Result<Vec<Vaccine>> {
        let mut conn = self.pool.get()?;
        let rows: Vec<VaccineRow> = vaccines::table
            .select(VaccineRow::as_select())
            .order(vaccines::name.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Vaccine::from).collect())
    }
}
