//! Caregiver availability registry.

use std::sync::Arc;

use tracing::info;

use crate::domain::{ScheduleDate, Username};
use crate::error::Result;
use crate::port::outbound::store::AvailabilityStore;

/// The set of (caregiver, date) slots open for booking.
pub struct AvailabilityRegistry {
    store: Arc<dyn AvailabilityStore>,
}

impl AvailabilityRegistry {
    #[must_use]
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Open a slot for `caregiver` on `date`.
    ///
    /// # Errors
    /// Returns `DuplicateSlot` if the slot is already open, `AlreadyBooked` if
    /// the caregiver has an appointment that day, or a persistence error.
    pub fn publish(&self, caregiver: &Username, date: &ScheduleDate) -> Result<()> {
        self.store.publish(caregiver, date)?;
        info!(%caregiver, %date, "Availability published");
        Ok(())
    }

    /// Caregivers free on `date`.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn caregivers_on(&self, date: &ScheduleDate) -> Result<Vec<Username>> {
        self.store.caregivers_on(date)
    }

    /// Dates with at least one open slot.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn dates(&self) -> Result<Vec<ScheduleDate>> {
        self.store.dates()
    }
}
