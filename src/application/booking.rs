//! Booking transaction manager.
//!
//! Delegates the atomic work to the [`BookingStore`] and owns the choice of
//! caregiver through a [`SlotSelector`].

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Appointment, AppointmentId, Identity, ScheduleDate, Username, VaccineName};
use crate::error::Result;
use crate::port::outbound::selector::SlotSelector;
use crate::port::outbound::store::BookingStore;

/// Books and cancels appointments.
pub struct BookingManager {
    store: Arc<dyn BookingStore>,
    selector: Arc<dyn SlotSelector>,
}

impl BookingManager {
    #[must_use]
    pub fn new(store: Arc<dyn BookingStore>, selector: Arc<dyn SlotSelector>) -> Self {
        Self { store, selector }
    }

    /// Reserve one dose of `vaccine` with a caregiver free on `date`.
    ///
    /// Slot consumption, dose decrement and appointment insert either all
    /// persist or none does.
    ///
    /// # Errors
    /// Returns `NoAvailability`, `VaccineNotFound`, `InsufficientDoses` or a
    /// persistence error.
    pub fn book(
        &self,
        patient: &Username,
        date: &ScheduleDate,
        vaccine: &VaccineName,
    ) -> Result<Appointment> {
        debug!(%patient, %date, %vaccine, "Booking appointment");
        self.store
            .book(patient, date, vaccine, self.selector.as_ref())
    }

    /// Cancel an appointment the requester is part of, reopening its slot and
    /// returning its dose.
    ///
    /// # Errors
    /// Returns `AppointmentNotFound` if no such appointment belongs to the
    /// requester, or a persistence error.
    pub fn cancel(&self, id: AppointmentId, requester: &Identity) -> Result<Appointment> {
        self.store.cancel(id, requester)
    }

    /// The requester's appointments, ordered by id.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn appointments_for(&self, requester: &Identity) -> Result<Vec<Appointment>> {
        self.store.appointments_for(requester)
    }
}
