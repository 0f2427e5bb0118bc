//! Session-gated use cases.
//!
//! [`Scheduler`] is the single entry point the command loop talks to. Every
//! method checks the caller's [`Session`] against its role requirement before
//! touching storage.

use serde::Serialize;
use tracing::info;

use crate::domain::{
    Appointment, AppointmentId, Identity, Requirement, Role, ScheduleDate, Session, Username,
    Vaccine, VaccineName,
};
use crate::error::Result;

use super::availability::AvailabilityRegistry;
use super::booking::BookingManager;
use super::credential::CredentialService;
use super::inventory::InventoryLedger;

/// Result of a schedule search: who is free that day and what stock exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    pub date: ScheduleDate,
    pub caregivers: Vec<Username>,
    pub vaccines: Vec<Vaccine>,
}

pub struct Scheduler {
    credentials: CredentialService,
    inventory: InventoryLedger,
    availability: AvailabilityRegistry,
    booking: BookingManager,
}

impl Scheduler {
    #[must_use]
    pub fn new(
        credentials: CredentialService,
        inventory: InventoryLedger,
        availability: AvailabilityRegistry,
        booking: BookingManager,
    ) -> Self {
        Self {
            credentials,
            inventory,
            availability,
            booking,
        }
    }

    /// Register a new account. Allowed in any session state.
    ///
    /// # Errors
    /// Returns `DuplicateUsername` or a persistence error.
    pub fn create_account(&self, role: Role, username: &Username, password: &str) -> Result<()> {
        self.credentials.register(role, username, password)
    }

    /// Log in as `role`.
    ///
    /// # Errors
    /// Returns `AlreadyLoggedIn` before checking credentials, then
    /// `InvalidCredentials` if they do not match.
    pub fn login(
        &self,
        session: &mut Session,
        role: Role,
        username: &Username,
        password: &str,
    ) -> Result<Identity> {
        session.ensure_logged_out()?;
        self.credentials.authenticate(role, username, password)?;
        session.login(role, username.clone())?;
        info!(%role, %username, "Logged in");
        Ok(Identity::new(role, username.clone()))
    }

    /// # Errors
    /// Returns `NotLoggedIn` if nobody is logged in.
    pub fn logout(&self, session: &mut Session) -> Result<Identity> {
        let identity = session.logout()?;
        info!(role = %identity.role, username = %identity.username, "Logged out");
        Ok(identity)
    }

    /// Caregivers free on `date` together with the current dose table.
    ///
    /// # Errors
    /// Returns `NotLoggedIn` when logged out, or a persistence error.
    pub fn search_schedule(&self, session: &Session, date: ScheduleDate) -> Result<ScheduleView> {
        session.require(Requirement::Any)?;
        Ok(ScheduleView {
            date,
            caregivers: self.availability.caregivers_on(&date)?,
            vaccines: self.inventory.list()?,
        })
    }

    /// Book one dose of `vaccine` on `date` for the logged-in patient.
    ///
    /// # Errors
    /// Returns `RoleRequired` unless a patient is logged in, then any booking
    /// failure.
    pub fn reserve(
        &self,
        session: &Session,
        date: ScheduleDate,
        vaccine: &VaccineName,
    ) -> Result<Appointment> {
        let identity = session.require(Requirement::Patient)?;
        self.booking.book(&identity.username, &date, vaccine)
    }

    /// Open a slot on `date` for the logged-in caregiver.
    ///
    /// # Errors
    /// Returns `RoleRequired` unless a caregiver is logged in, `DuplicateSlot`
    /// or `AlreadyBooked`.
    pub fn upload_availability(&self, session: &Session, date: ScheduleDate) -> Result<()> {
        let identity = session.require(Requirement::Caregiver)?;
        self.availability.publish(&identity.username, &date)
    }

    /// Cancel one of the logged-in user's appointments.
    ///
    /// # Errors
    /// Returns `NotLoggedIn`, `AppointmentNotFound` or a persistence error.
    pub fn cancel(&self, session: &Session, id: AppointmentId) -> Result<Appointment> {
        let identity = session.require(Requirement::Any)?;
        self.booking.cancel(id, &identity)
    }

    /// # Errors
    /// Returns `RoleRequired` unless a caregiver is logged in.
    pub fn add_doses(
        &self,
        session: &Session,
        vaccine: &VaccineName,
        amount: u32,
    ) -> Result<Vaccine> {
        session.require(Requirement::Caregiver)?;
        self.inventory.add_doses(vaccine, amount)
    }

    /// Dose table. Needs no login.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn doses(&self) -> Result<Vec<Vaccine>> {
        self.inventory.list()
    }

    /// # Errors
    /// Returns `NotLoggedIn` when logged out.
    pub fn availabilities(&self, session: &Session) -> Result<Vec<ScheduleDate>> {
        session.require(Requirement::Any)?;
        self.availability.dates()
    }

    /// # Errors
    /// Returns `NotLoggedIn` when logged out.
    pub fn appointments(&self, session: &Session) -> Result<Vec<Appointment>> {
        let identity = session.require(Requirement::Any)?;
        self.booking.appointments_for(&identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatePolicy;
    use crate::error::{AuthError, Error, SessionError};
    use crate::testkit::db::TempDb;
    use crate::testkit::scheduler::scheduler;

    fn date(input: &str) -> ScheduleDate {
        ScheduleDate::parse(input, DatePolicy::Lenient).unwrap()
    }

    fn logged_in(scheduler: &Scheduler, role: Role, name: &str) -> Session {
        let user = Username::new(name);
        scheduler.create_account(role, &user, "pw").unwrap();
        let mut session = Session::default();
        scheduler.login(&mut session, role, &user, "pw").unwrap();
        session
    }

    #[test]
    fn login_requires_a_logged_out_session() {
        let db = TempDb::create();
        let scheduler = scheduler(&db);
        let mut session = logged_in(&scheduler, Role::Patient, "p1");

        let err = scheduler
            .login(&mut session, Role::Patient, &Username::new("p1"), "pw")
            .unwrap_err();

        assert!(matches!(err, Error::Session(SessionError::AlreadyLoggedIn)));
    }

    #[test]
    fn failed_login_leaves_session_logged_out() {
        let db = TempDb::create();
        let scheduler = scheduler(&db);
        let user = Username::new("p1");
        scheduler.create_account(Role::Patient, &user, "pw").unwrap();
        let mut session = Session::default();

        let err = scheduler
            .login(&mut session, Role::Patient, &user, "wrong")
            .unwrap_err();

        assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
        assert_eq!(session, Session::LoggedOut);
    }

    #[test]
    fn role_gates_are_enforced_before_work() {
        let db = TempDb::create();
        let scheduler = scheduler(&db);
        let day = date("01-15-2025");
        let vaccine = VaccineName::new("ModernaX");

        let patient = logged_in(&scheduler, Role::Patient, "p1");
        let err = scheduler.add_doses(&patient, &vaccine, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::Session(SessionError::RoleRequired {
                required: Role::Caregiver
            })
        ));
        assert!(scheduler.upload_availability(&patient, day).is_err());
        assert!(scheduler.doses().unwrap().is_empty());

        let caregiver = logged_in(&scheduler, Role::Caregiver, "c1");
        let err = scheduler.reserve(&caregiver, day, &vaccine).unwrap_err();
        assert!(matches!(
            err,
            Error::Session(SessionError::RoleRequired {
                required: Role::Patient
            })
        ));

        let nobody = Session::default();
        for err in [
            scheduler.search_schedule(&nobody, day).unwrap_err(),
            scheduler.cancel(&nobody, AppointmentId::FIRST).unwrap_err(),
            scheduler.availabilities(&nobody).map(|_| ()).unwrap_err(),
            scheduler.appointments(&nobody).map(|_| ()).unwrap_err(),
        ] {
            assert!(matches!(err, Error::Session(SessionError::NotLoggedIn)));
        }
    }

    #[test]
    fn search_lists_caregivers_and_doses() {
        let db = TempDb::create();
        let scheduler = scheduler(&db);
        let day = date("01-15-2025");
        let caregiver = logged_in(&scheduler, Role::Caregiver, "c1");
        scheduler
            .add_doses(&caregiver, &VaccineName::new("ModernaX"), 5)
            .unwrap();
        scheduler.upload_availability(&caregiver, day).unwrap();

        let view = scheduler.search_schedule(&caregiver, day).unwrap();

        assert_eq!(view.caregivers, vec![Username::new("c1")]);
        assert_eq!(view.vaccines.len(), 1);
        assert_eq!(view.vaccines[0].doses, 5);
        assert_eq!(scheduler.availabilities(&caregiver).unwrap(), vec![day]);
    }

    #[test]
    fn reserve_then_cancel_round_trips() {
        let db = TempDb::create();
        let scheduler = scheduler(&db);
        let day = date("01-15-2025");
        let vaccine = VaccineName::new("ModernaX");

        let mut caregiver = logged_in(&scheduler, Role::Caregiver, "c1");
        scheduler.add_doses(&caregiver, &vaccine, 5).unwrap();
        scheduler.upload_availability(&caregiver, day).unwrap();
        scheduler.logout(&mut caregiver).unwrap();

        let patient = logged_in(&scheduler, Role::Patient, "p1");
        let appointment = scheduler.reserve(&patient, day, &vaccine).unwrap();
        assert_eq!(appointment.id, AppointmentId::FIRST);
        assert_eq!(appointment.caregiver, Username::new("c1"));
        assert_eq!(scheduler.doses().unwrap()[0].doses, 4);
        assert!(scheduler.availabilities(&patient).unwrap().is_empty());
        assert_eq!(scheduler.appointments(&patient).unwrap(), vec![appointment]);

        scheduler.cancel(&patient, AppointmentId::FIRST).unwrap();

        assert_eq!(scheduler.doses().unwrap()[0].doses, 5);
        assert_eq!(scheduler.availabilities(&patient).unwrap(), vec![day]);
        assert!(scheduler.appointments(&patient).unwrap().is_empty());
    }
}
