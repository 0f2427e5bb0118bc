//! Booked appointments.

use serde::Serialize;

use super::account::Role;
use super::date::ScheduleDate;
use super::id::{AppointmentId, Username, VaccineName};

/// One patient booked with one caregiver for one dose of one vaccine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient: Username,
    pub caregiver: Username,
    pub vaccine: VaccineName,
    pub date: ScheduleDate,
}

impl Appointment {
    /// The other party from the point of view of `viewer`.
    #[must_use]
    pub fn counterpart(&self, viewer: Role) -> &Username {
        match viewer {
            Role::Patient => &self.caregiver,
            Role::Caregiver => &self.patient,
        }
    }
}
