//! SQLite booking transactions.
//!
//! Booking and cancellation each run in one `BEGIN IMMEDIATE` transaction.
//! The immediate lock serializes writers across connections and processes,
//! which is what keeps slot consumption, dose counting and id assignment
//! race-free. Any error returned from the closure rolls the whole transaction
//! back.
//!
//! Ids come from the `appointment_sequence` high-water mark rather than the
//! ids still present, so a cancelled id is never issued again.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::adapter::outbound::sqlite::availability;
use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::AppointmentRow;
use crate::adapter::outbound::sqlite::database::schema::{appointment_sequence, appointments};
use crate::adapter::outbound::sqlite::inventory;
use crate::domain::{
    Appointment, AppointmentId, Identity, Role, ScheduleDate, Username, VaccineName,
};
use crate::error::{Error, NotFoundError, Result};
use crate::port::outbound::selector::SlotSelector;
use crate::port::outbound::store::BookingStore;

const SEQUENCE_ROW: i32 = 1;

/// Reserve the next appointment id.
///
/// Must run inside the booking transaction; a rollback gives the id back.
pub(crate) fn next_appointment_id(conn: &mut SqliteConnection) -> Result<AppointmentId> {
    let last: i32 = appointment_sequence::table
        .find(SEQUENCE_ROW)
        .select(appointment_sequence::last_id)
        .first(conn)?;
    let id = AppointmentId::after(last);

    diesel::update(appointment_sequence::table.find(SEQUENCE_ROW))
        .set(appointment_sequence::last_id.eq(id.value()))
        .execute(conn)?;
    Ok(id)
}

/// SQLite-backed booking store.
pub struct SqliteBookingStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBookingStore {
    /// Create a new SQLite booking store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn find_owned(
        conn: &mut SqliteConnection,
        id: AppointmentId,
        requester: &Identity,
    ) -> Result<Option<AppointmentRow>> {
        let owner = requester.username.as_str();
        let by_id = appointments::table.filter(appointments::appointment_id.eq(id.value()));
        let row = match requester.role {
            Role::Patient => by_id
                .filter(appointments::p_username.eq(owner))
                .select(AppointmentRow::as_select())
                .first(conn)
                .optional()?,
            Role::Caregiver => by_id
                .filter(appointments::c_username.eq(owner))
                .select(AppointmentRow::as_select())
                .first(conn)
                .optional()?,
        };
        Ok(row)
    }
}

impl BookingStore for SqliteBookingStore {
    fn book(
        &self,
        patient: &Username,
        date: &ScheduleDate,
        vaccine: &VaccineName,
        selector: &dyn SlotSelector,
    ) -> Result<Appointment> {
        let mut conn = self.pool.get()?;

        let appointment = conn.immediate_transaction::<_, Error, _>(|conn| {
            let caregiver = availability::consume(conn, date, selector)?;
            inventory::decrement(conn, vaccine, 1)?;

            let appointment = Appointment {
                id: next_appointment_id(conn)?,
                patient: patient.clone(),
                caregiver,
                vaccine: vaccine.clone(),
                date: *date,
            };
            diesel::insert_into(appointments::table)
                .values(AppointmentRow::from_appointment(&appointment))
                .execute(conn)?;

            Ok(appointment)
        })?;

        info!(
            id = %appointment.id,
            patient = %appointment.patient,
            caregiver = %appointment.caregiver,
            vaccine = %appointment.vaccine,
            date = %appointment.date,
            "Booked appointment"
        );
        Ok(appointment)
    }

    fn cancel(&self, id: AppointmentId, requester: &Identity) -> Result<Appointment> {
        let mut conn = self.pool.get()?;

        let appointment = conn.immediate_transaction::<_, Error, _>(|conn| {
            let row = Self::find_owned(conn, id, requester)?
                .ok_or(NotFoundError::Appointment { id: id.value() })?;
            let appointment = row.into_appointment()?;

            diesel::delete(appointments::table.find(id.value())).execute(conn)?;
            availability::restore(conn, &appointment.caregiver, &appointment.date)?;
            inventory::increment(conn, &appointment.vaccine, 1)?;

            Ok(appointment)
        })?;

        info!(
            id = %appointment.id,
            requester = %requester.username,
            role = %requester.role,
            "Cancelled appointment"
        );
        Ok(appointment)
    }

    fn appointments_for(&self, requester: &Identity) -> Result<Vec<Appointment>> {
        let mut conn = self.pool.get()?;
        let owner = requester.username.as_str();

        let rows: Vec<AppointmentRow> = match requester.role {
            Role::Patient => appointments::table
                .filter(appointments::p_username.eq(owner))
                .select(AppointmentRow::as_select())
                .order(appointments::appointment_id.asc())
                .load(&mut conn)?,
            Role::Caregiver => appointments::table
                .filter(appointments::c_username.eq(owner))
                .select(AppointmentRow::as_select())
                .order(appointments::appointment_id.asc())
                .load(&mut conn)?,
        };

        debug!(requester = %requester.username, count = rows.len(), "Loaded appointments");
        rows.into_iter().map(AppointmentRow::into_appointment).collect()
    }
}
