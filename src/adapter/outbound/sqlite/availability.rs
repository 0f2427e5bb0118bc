//! SQLite availability registry.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{parse_stored_date, AvailabilityRow};
use crate::adapter::outbound::sqlite::database::schema::{appointments, availabilities};
use crate::domain::{ScheduleDate, Username};
use crate::error::{Error, Result, ScheduleError};
use crate::port::outbound::selector::SlotSelector;
use crate::port::outbound::store::AvailabilityStore;

/// Insert a slot, mapping a primary key clash to `DuplicateSlot`.
pub(crate) fn insert_slot(
    conn: &mut SqliteConnection,
    caregiver: &Username,
    date: &ScheduleDate,
) -> Result<()> {
    let inserted = diesel::insert_into(availabilities::table)
        .values(AvailabilityRow {
            time: date.to_storage(),
            username: caregiver.to_string(),
        })
        .execute(conn);

    match inserted {
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(ScheduleError::DuplicateSlot {
                caregiver: caregiver.to_string(),
                date: date.to_string(),
            }
            .into())
        }
        Err(e) => Err(Error::from(e)),
    }
}

/// Whether `caregiver` already holds an appointment on `date`.
fn has_appointment(
    conn: &mut SqliteConnection,
    caregiver: &Username,
    date: &ScheduleDate,
) -> Result<bool> {
    let count: i64 = appointments::table
        .filter(appointments::c_username.eq(caregiver.as_str()))
        .filter(appointments::time.eq(date.to_storage()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Caregivers with an open slot on `date`, ordered by username.
pub(crate) fn caregivers_on(
    conn: &mut SqliteConnection,
    date: &ScheduleDate,
) -> Result<Vec<Username>> {
    let names: Vec<String> = availabilities::table
        .filter(availabilities::time.eq(date.to_storage()))
        .select(availabilities::username)
        .order(availabilities::username.asc())
        .load(conn)?;
    Ok(names.into_iter().map(Username::new).collect())
}

/// Pick one open slot on `date` with `selector` and delete it.
///
/// Must run inside the caller's transaction so that the deletion is undone
/// if a later step of the booking fails.
pub(crate) fn consume(
    conn: &mut SqliteConnection,
    date: &ScheduleDate,
    selector: &dyn SlotSelector,
) -> Result<Username> {
    let candidates = caregivers_on(conn, date)?;
    if candidates.is_empty() {
        return Err(ScheduleError::NoAvailability {
            date: date.to_string(),
        }
        .into());
    }

    let index = selector.select(&candidates).min(candidates.len() - 1);
    let caregiver = candidates[index].clone();

    let deleted = diesel::delete(
        availabilities::table
            .filter(availabilities::time.eq(date.to_storage()))
            .filter(availabilities::username.eq(caregiver.as_str())),
    )
    .execute(conn)?;
    if deleted != 1 {
        return Err(Error::Database(format!(
            "expected to consume one slot for {caregiver} on {date}, removed {deleted}"
        )));
    }

    debug!(%caregiver, %date, candidates = candidates.len(), "Consumed availability slot");
    Ok(caregiver)
}

/// Reopen a slot released by a cancellation.
///
/// Publishing refuses a day the caregiver is booked on, so an open slot here
/// means the tables disagree; the error aborts the surrounding transaction.
pub(crate) fn restore(
    conn: &mut SqliteConnection,
    caregiver: &Username,
    date: &ScheduleDate,
) -> Result<()> {
    insert_slot(conn, caregiver, date)?;
    debug!(%caregiver, %date, "Restored availability slot");
    Ok(())
}

/// SQLite-backed availability registry.
pub struct SqliteAvailabilityStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteAvailabilityStore {
    /// Create a new SQLite availability store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AvailabilityStore for SqliteAvailabilityStore {
    fn publish(&self, caregiver: &Username, date: &ScheduleDate) -> Result<()> {
        let mut conn = self.pool.get()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            // A booked day stays closed; its slot comes back only on cancel.
            if has_appointment(conn, caregiver, date)? {
                return Err(ScheduleError::AlreadyBooked {
                    caregiver: caregiver.to_string(),
                    date: date.to_string(),
                }
                .into());
            }
            insert_slot(conn, caregiver, date)
        })
    }

    fn caregivers_on(&self, date: &ScheduleDate) -> Result<Vec<Username>> {
        let mut conn = self.pool.get()?;
        caregivers_on(&mut conn, date)
    }

    fn dates(&self) -> Result<Vec<ScheduleDate>> {
        let mut conn = self.pool.get()?;
        let stored: Vec<String> = availabilities::table
            .select(availabilities::time)
            .distinct()
            .order(availabilities::time.asc())
            .load(&mut conn)?;
        stored.iter().map(|s| parse_stored_date(s)).collect()
    }
}
