mod support;

use support::scenario::{date, doses_of, login, register_and_login, stock_and_open};
use vaxsched::domain::{AppointmentId, Role, Session, Username, VaccineName};
use vaxsched::error::{Error, ErrorKind, NotFoundError, ScheduleError, SessionError};
use vaxsched::testkit::db::TempDb;
use vaxsched::testkit::scheduler::scheduler;

#[test]
fn reserve_assigns_first_id_and_consumes_slot_and_dose() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "ModernaX", 5, &["01-15-2025"]);
    let patient = register_and_login(&scheduler, Role::Patient, "p1");

    let appointment = scheduler
        .reserve(&patient, date("01-15-2025"), &VaccineName::new("ModernaX"))
        .unwrap();

    assert_eq!(appointment.id, AppointmentId::new(1));
    assert_eq!(appointment.caregiver, Username::new("c1"));
    assert_eq!(appointment.patient, Username::new("p1"));
    assert_eq!(doses_of(&scheduler, "ModernaX"), 4);
    let view = scheduler
        .search_schedule(&patient, date("01-15-2025"))
        .unwrap();
    assert!(view.caregivers.is_empty());
}

#[test]
fn cancel_restores_dose_and_slot() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "ModernaX", 5, &["01-15-2025"]);
    let patient = register_and_login(&scheduler, Role::Patient, "p1");
    scheduler
        .reserve(&patient, date("01-15-2025"), &VaccineName::new("ModernaX"))
        .unwrap();

    scheduler.cancel(&patient, AppointmentId::new(1)).unwrap();

    assert_eq!(doses_of(&scheduler, "ModernaX"), 5);
    let view = scheduler
        .search_schedule(&patient, date("01-15-2025"))
        .unwrap();
    assert_eq!(view.caregivers, vec![Username::new("c1")]);
    assert!(scheduler.appointments(&patient).unwrap().is_empty());
}

#[test]
fn ids_grow_by_one_and_are_not_refilled() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(
        &scheduler,
        "c1",
        "Pfizer",
        10,
        &["03-01-2025", "03-02-2025", "03-03-2025"],
    );
    let patient = register_and_login(&scheduler, Role::Patient, "p1");
    let vaccine = VaccineName::new("Pfizer");

    let first = scheduler
        .reserve(&patient, date("03-01-2025"), &vaccine)
        .unwrap();
    let second = scheduler
        .reserve(&patient, date("03-02-2025"), &vaccine)
        .unwrap();
    scheduler.cancel(&patient, first.id).unwrap();
    let third = scheduler
        .reserve(&patient, date("03-03-2025"), &vaccine)
        .unwrap();

    assert_eq!(first.id.value(), 1);
    assert_eq!(second.id.value(), 2);
    assert_eq!(third.id.value(), 3);
}

#[test]
fn cancelling_the_newest_appointment_does_not_free_its_id() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "Pfizer", 10, &["03-01-2025", "03-02-2025"]);
    let patient = register_and_login(&scheduler, Role::Patient, "p1");
    let vaccine = VaccineName::new("Pfizer");

    let first = scheduler
        .reserve(&patient, date("03-01-2025"), &vaccine)
        .unwrap();
    scheduler.cancel(&patient, first.id).unwrap();
    let second = scheduler
        .reserve(&patient, date("03-02-2025"), &vaccine)
        .unwrap();

    assert_eq!(first.id, AppointmentId::new(1));
    assert_eq!(second.id, AppointmentId::new(2));
    assert!(scheduler.cancel(&patient, first.id).is_err());
}

#[test]
fn booked_caregiver_cannot_reopen_the_day_and_cancel_still_works() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "ModernaX", 1, &["03-01-2025"]);
    let patient = register_and_login(&scheduler, Role::Patient, "p1");
    let booked = scheduler
        .reserve(&patient, date("03-01-2025"), &VaccineName::new("ModernaX"))
        .unwrap();

    let caregiver = login(&scheduler, Role::Caregiver, "c1");
    let err = scheduler
        .upload_availability(&caregiver, date("03-01-2025"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Schedule(ScheduleError::AlreadyBooked { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    scheduler.cancel(&patient, booked.id).unwrap();
    assert_eq!(doses_of(&scheduler, "ModernaX"), 1);
    let view = scheduler
        .search_schedule(&patient, date("03-01-2025"))
        .unwrap();
    assert_eq!(view.caregivers, vec![Username::new("c1")]);
}

#[test]
fn failed_reservations_change_nothing() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "Janssen", 0, &["05-05-2025"]);
    let patient = register_and_login(&scheduler, Role::Patient, "p1");

    let empty = scheduler
        .reserve(&patient, date("05-05-2025"), &VaccineName::new("Janssen"))
        .unwrap_err();
    let unknown = scheduler
        .reserve(&patient, date("05-05-2025"), &VaccineName::new("Unknown"))
        .unwrap_err();
    let no_slot = scheduler
        .reserve(&patient, date("05-06-2025"), &VaccineName::new("Janssen"))
        .unwrap_err();

    assert!(matches!(
        empty,
        Error::Schedule(ScheduleError::InsufficientDoses { available: 0, .. })
    ));
    assert!(matches!(
        unknown,
        Error::NotFound(NotFoundError::Vaccine { .. })
    ));
    assert!(matches!(
        no_slot,
        Error::Schedule(ScheduleError::NoAvailability { .. })
    ));
    assert_eq!(doses_of(&scheduler, "Janssen"), 0);
    assert_eq!(
        scheduler.availabilities(&patient).unwrap(),
        vec![date("05-05-2025")]
    );
    assert!(scheduler.appointments(&patient).unwrap().is_empty());
}

#[test]
fn only_participants_can_cancel() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "Novavax", 3, &["06-01-2025"]);
    register_and_login(&scheduler, Role::Caregiver, "c2");
    let owner = register_and_login(&scheduler, Role::Patient, "p1");
    let stranger = register_and_login(&scheduler, Role::Patient, "p2");
    scheduler
        .reserve(&owner, date("06-01-2025"), &VaccineName::new("Novavax"))
        .unwrap();

    let by_stranger = scheduler.cancel(&stranger, AppointmentId::new(1)).unwrap_err();
    let other_caregiver = login(&scheduler, Role::Caregiver, "c2");
    let by_other_caregiver = scheduler
        .cancel(&other_caregiver, AppointmentId::new(1))
        .unwrap_err();

    for err in [by_stranger, by_other_caregiver] {
        assert!(matches!(
            err,
            Error::NotFound(NotFoundError::Appointment { id: 1 })
        ));
    }

    let assigned = login(&scheduler, Role::Caregiver, "c1");
    let cancelled = scheduler.cancel(&assigned, AppointmentId::new(1)).unwrap();
    assert_eq!(cancelled.patient, Username::new("p1"));
    assert_eq!(doses_of(&scheduler, "Novavax"), 3);
}

#[test]
fn each_role_sees_its_own_appointments() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    stock_and_open(&scheduler, "c1", "Pfizer", 4, &["07-01-2025", "07-02-2025"]);
    let p1 = register_and_login(&scheduler, Role::Patient, "p1");
    let p2 = register_and_login(&scheduler, Role::Patient, "p2");
    let vaccine = VaccineName::new("Pfizer");
    scheduler.reserve(&p1, date("07-01-2025"), &vaccine).unwrap();
    scheduler.reserve(&p2, date("07-02-2025"), &vaccine).unwrap();

    let caregiver = login(&scheduler, Role::Caregiver, "c1");
    let seen_by_caregiver = scheduler.appointments(&caregiver).unwrap();
    let seen_by_p2 = scheduler.appointments(&p2).unwrap();

    assert_eq!(seen_by_caregiver.len(), 2);
    assert_eq!(seen_by_p2.len(), 1);
    assert_eq!(seen_by_p2[0].id.value(), 2);
    assert_eq!(
        seen_by_p2[0].counterpart(Role::Patient),
        &Username::new("c1")
    );
}

#[test]
fn wrong_role_is_a_state_error() {
    let db = TempDb::create();
    let scheduler = scheduler(&db);
    let caregiver = register_and_login(&scheduler, Role::Caregiver, "c1");

    let err = scheduler
        .reserve(&caregiver, date("01-15-2025"), &VaccineName::new("X"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::State);
    assert!(matches!(
        err,
        Error::Session(SessionError::RoleRequired {
            required: Role::Patient
        })
    ));
    assert!(scheduler.doses().unwrap().is_empty());
    assert_eq!(Session::default().role(), None);
}
