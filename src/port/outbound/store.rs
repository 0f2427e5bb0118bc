//! Persistence ports for accounts, inventory, availability and bookings.
//!
//! Every method is a self-contained unit of work: implementations commit on
//! success and leave no partial writes behind on failure.

use crate::domain::{
    Appointment, AppointmentId, Credentials, Identity, Role, ScheduleDate, Username, Vaccine,
    VaccineName,
};
use crate::error::Result;

use super::selector::SlotSelector;

/// Storage operations for patient and caregiver accounts.
pub trait AccountStore: Send + Sync {
    /// Insert a new account. Fails with `DuplicateUsername` if the username is
    /// already registered for `role`.
    fn create(&self, role: Role, username: &Username, credentials: &Credentials) -> Result<()>;

    /// Whether `username` is registered for `role`.
    fn exists(&self, role: Role, username: &Username) -> Result<bool>;

    /// Stored salt and hash for an account.
    fn credentials(&self, role: Role, username: &Username) -> Result<Option<Credentials>>;
}

/// Storage operations for vaccine doses.
pub trait InventoryStore: Send + Sync {
    /// Add doses, creating the vaccine if it is unknown.
    fn add_doses(&self, name: &VaccineName, amount: u32) -> Result<Vaccine>;

    /// Remove doses. Fails with `VaccineNotFound` or `InsufficientDoses`
    /// without changing anything.
    fn remove_doses(&self, name: &VaccineName, amount: u32) -> Result<Vaccine>;

    /// Get a vaccine by name.
    fn get(&self, name: &VaccineName) -> Result<Option<Vaccine>>;

    /// List all vaccines ordered by name.
    fn list(&self) -> Result<Vec<Vaccine>>;
}

/// Storage operations for caregiver availability slots.
pub trait AvailabilityStore: Send + Sync {
    /// Open a slot. Fails with `DuplicateSlot` if it is already open, or
    /// `AlreadyBooked` if the caregiver has an appointment that day.
    fn publish(&self, caregiver: &Username, date: &ScheduleDate) -> Result<()>;

    /// Caregivers with an open slot on `date`, ordered by username.
    fn caregivers_on(&self, date: &ScheduleDate) -> Result<Vec<Username>>;

    /// Distinct dates with at least one open slot, ascending.
    fn dates(&self) -> Result<Vec<ScheduleDate>>;
}

/// The booking transaction and its inverse.
pub trait BookingStore: Send + Sync {
    /// Atomically consume a slot chosen by `selector`, take one dose of
    /// `vaccine` and record the appointment.
    fn book(
        &self,
        patient: &Username,
        date: &ScheduleDate,
        vaccine: &VaccineName,
        selector: &dyn SlotSelector,
    ) -> Result<Appointment>;

    /// Atomically delete an appointment owned by `requester`, reopen its slot
    /// and return its dose.
    fn cancel(&self, id: AppointmentId, requester: &Identity) -> Result<Appointment>;

    /// Appointments where `requester` is the patient or the caregiver,
    /// according to their role, ordered by id.
    fn appointments_for(&self, requester: &Identity) -> Result<Vec<Appointment>>;
}
