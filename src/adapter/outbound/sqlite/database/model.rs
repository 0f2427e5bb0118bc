//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{appointments, availabilities, caregivers, patients, vaccines};
use crate::domain::{
    Appointment, AppointmentId, Credentials, ScheduleDate, Username, Vaccine, VaccineName,
};
use crate::error::{Error, Result};

/// Database row for a patient account.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PatientRow {
    pub username: String,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Database row for a caregiver account.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = caregivers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CaregiverRow {
    pub username: String,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Database row for a vaccine.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = vaccines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VaccineRow {
    pub name: String,
    pub doses: i64,
}

/// Database row for an open availability slot.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = availabilities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AvailabilityRow {
    pub time: String,
    pub username: String,
}

/// Database row for an appointment.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppointmentRow {
    pub appointment_id: i32,
    pub p_username: String,
    pub c_username: String,
    pub vac_name: String,
    pub time: String,
}

impl From<PatientRow> for Credentials {
    fn from(row: PatientRow) -> Self {
        Self {
            salt: row.salt,
            hash: row.hash,
        }
    }
}

impl From<CaregiverRow> for Credentials {
    fn from(row: CaregiverRow) -> Self {
        Self {
            salt: row.salt,
            hash: row.hash,
        }
    }
}

impl From<VaccineRow> for Vaccine {
    fn from(row: VaccineRow) -> Self {
        Self {
            name: VaccineName::new(row.name),
            doses: row.doses,
        }
    }
}

impl AppointmentRow {
    /// Build a row from a domain appointment.
    #[must_use]
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id.value(),
            p_username: appointment.patient.to_string(),
            c_username: appointment.caregiver.to_string(),
            vac_name: appointment.vaccine.to_string(),
            time: appointment.date.to_storage(),
        }
    }

    /// Convert back into a domain appointment.
    ///
    /// # Errors
    /// Returns an error if the stored date is corrupt.
    pub fn into_appointment(self) -> Result<Appointment> {
        let date = ScheduleDate::from_storage(&self.time)
            .map_err(|e| Error::Database(format!("corrupt appointment date: {e}")))?;
        Ok(Appointment {
            id: AppointmentId::new(self.appointment_id),
            patient: Username::new(self.p_username),
            caregiver: Username::new(self.c_username),
            vaccine: VaccineName::new(self.vac_name),
            date,
        })
    }
}

/// Parse a stored `yyyy-mm-dd` column into a date.
///
/// # Errors
/// Returns [`Error::Database`] if the stored value is corrupt.
pub fn parse_stored_date(stored: &str) -> Result<ScheduleDate> {
    ScheduleDate::from_storage(stored)
        .map_err(|e| Error::Database(format!("corrupt availability date: {e}")))
}
