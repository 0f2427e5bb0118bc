//! Scheduler scenarios shared by integration tests.

use vaxsched::application::Scheduler;
use vaxsched::domain::{DatePolicy, Role, ScheduleDate, Session, Username, VaccineName};

pub const PASSWORD: &str = "pw";

pub fn date(input: &str) -> ScheduleDate {
    ScheduleDate::parse(input, DatePolicy::Lenient).expect("valid test date")
}

/// Register `name` and return a session logged in as them.
pub fn register_and_login(scheduler: &Scheduler, role: Role, name: &str) -> Session {
    let user = Username::new(name);
    scheduler
        .create_account(role, &user, PASSWORD)
        .expect("create account");
    login(scheduler, role, name)
}

pub fn login(scheduler: &Scheduler, role: Role, name: &str) -> Session {
    let mut session = Session::default();
    scheduler
        .login(&mut session, role, &Username::new(name), PASSWORD)
        .expect("login");
    session
}

/// Caregiver `caregiver` stocks `doses` of `vaccine` and opens `dates`.
pub fn stock_and_open(
    scheduler: &Scheduler,
    caregiver: &str,
    vaccine: &str,
    doses: u32,
    dates: &[&str],
) {
    let mut session = register_and_login(scheduler, Role::Caregiver, caregiver);
    scheduler
        .add_doses(&session, &VaccineName::new(vaccine), doses)
        .expect("add doses");
    for day in dates {
        scheduler
            .upload_availability(&session, date(day))
            .expect("upload availability");
    }
    scheduler.logout(&mut session).expect("logout");
}

pub fn doses_of(scheduler: &Scheduler, vaccine: &str) -> i64 {
    scheduler
        .doses()
        .expect("list doses")
        .into_iter()
        .find(|v| v.name.as_str() == vaccine)
        .map_or(0, |v| v.doses)
}
