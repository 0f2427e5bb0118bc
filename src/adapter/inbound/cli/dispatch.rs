//! Routes parsed prompt commands to the scheduler and renders the results.

use serde_json::json;
use tabled::builder::Builder;
use tabled::{Table, Tabled};
use tracing::{error, warn};

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::parse::{self, Command, Gate};
use crate::application::{ScheduleView, Scheduler};
use crate::domain::error::DomainError;
use crate::domain::{Appointment, DatePolicy, Role, ScheduleDate, Session, Vaccine};
use crate::error::{Error, ErrorKind, Result};

/// Whether the prompt loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Tabled)]
struct DoseRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Doses")]
    doses: i64,
}

/// Owns the session for one interactive run.
pub struct Dispatcher {
    scheduler: Scheduler,
    session: Session,
    policy: DatePolicy,
}

impl Dispatcher {
    #[must_use]
    pub fn new(scheduler: Scheduler, policy: DatePolicy) -> Self {
        Self {
            scheduler,
            session: Session::default(),
            policy,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one raw line of input, rejecting it if it is not UTF-8.
    pub fn handle_bytes(&mut self, line: &[u8]) -> Flow {
        match std::str::from_utf8(line) {
            Ok(line) => self.handle(line),
            Err(_) => {
                report(&DomainError::InvalidEncoding.into());
                Flow::Continue
            }
        }
    }

    /// Run one line of input. Failures are reported and never end the loop.
    pub fn handle(&mut self, line: &str) -> Flow {
        match self.execute(line) {
            Ok(flow) => flow,
            Err(err) => {
                report(&err);
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let Some((verb, tokens)) = parse::split(line)? else {
            return Ok(Flow::Continue);
        };
        self.check_gate(verb.gate())?;
        let command = verb.build(&tokens, self.policy)?;
        self.run(command)
    }

    fn check_gate(&self, gate: Gate) -> Result<()> {
        match gate {
            Gate::Open => {}
            Gate::LoggedOut => self.session.ensure_logged_out()?,
            Gate::Requires(requirement) => {
                self.session.require(requirement)?;
            }
        }
        Ok(())
    }

    fn run(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::CreateAccount {
                role,
                username,
                password,
            } => {
                self.scheduler.create_account(role, &username, &password)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": format!("create_{role}"),
                        "username": username,
                    }));
                } else {
                    output::success(&format!("Created {role} account {username}"));
                }
            }
            Command::Login {
                role,
                username,
                password,
            } => {
                self.scheduler
                    .login(&mut self.session, role, &username, &password)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": format!("login_{role}"),
                        "username": username,
                    }));
                } else {
                    output::success(&format!("Logged in as {role} {username}"));
                }
            }
            Command::Search { date } => {
                let view = self.scheduler.search_schedule(&self.session, date)?;
                render_search(&view);
            }
            Command::Reserve { date, vaccine } => {
                let appointment = self.scheduler.reserve(&self.session, date, &vaccine)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "reserve",
                        "appointment": appointment_json(&appointment),
                    }));
                } else {
                    output::success(&format!(
                        "Appointment {} booked with {}",
                        output::highlight(appointment.id),
                        appointment.caregiver
                    ));
                    output::lines(&appointment_detail_table(&appointment));
                }
            }
            Command::UploadAvailability { date } => {
                self.scheduler.upload_availability(&self.session, date)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "upload_availability",
                        "date": date.to_string(),
                    }));
                } else {
                    output::success(&format!("Availability uploaded for {date}"));
                }
            }
            Command::Cancel { id } => {
                let appointment = self.scheduler.cancel(&self.session, id)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "cancel",
                        "appointment": appointment_json(&appointment),
                    }));
                } else {
                    output::success(&format!(
                        "Cancelled appointment {} on {}",
                        appointment.id, appointment.date
                    ));
                }
            }
            Command::AddDoses { vaccine, amount } => {
                let stock = self.scheduler.add_doses(&self.session, &vaccine, amount)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "add_doses",
                        "vaccine": stock.name,
                        "added": amount,
                        "doses": stock.doses,
                    }));
                } else {
                    output::success(&format!(
                        "Doses updated: {} now has {}",
                        stock.name, stock.doses
                    ));
                }
            }
            Command::ShowDoses => {
                let vaccines = self.scheduler.doses()?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "show_doses",
                        "vaccines": vaccines,
                    }));
                } else {
                    render_doses(&vaccines);
                }
            }
            Command::ShowAvailabilities => {
                let dates = self.scheduler.availabilities(&self.session)?;
                render_availabilities(&dates);
            }
            Command::ShowAppointments => {
                let appointments = self.scheduler.appointments(&self.session)?;
                let viewer = self.session.role().unwrap_or(Role::Patient);
                render_appointments(&appointments, viewer);
            }
            Command::Logout => {
                let identity = self.scheduler.logout(&mut self.session)?;
                if output::is_json() {
                    output::json_output(json!({
                        "command": "logout",
                        "username": identity.username,
                    }));
                } else {
                    output::success(&format!(
                        "Logged out {} {}",
                        identity.role, identity.username
                    ));
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn report(err: &Error) {
    match err.kind() {
        ErrorKind::Persistence | ErrorKind::Config => {
            error!(error = %err, "Command failed");
        }
        kind => {
            warn!(?kind, error = %err, "Command rejected");
        }
    }
    output::error(&err.to_string());
}

fn appointment_json(appointment: &Appointment) -> serde_json::Value {
    json!({
        "id": appointment.id,
        "patient": appointment.patient,
        "caregiver": appointment.caregiver,
        "vaccine": appointment.vaccine,
        "date": appointment.date.to_string(),
    })
}

fn doses_table(vaccines: &[Vaccine]) -> String {
    let rows = vaccines.iter().map(|v| DoseRow {
        name: v.name.to_string(),
        doses: v.doses,
    });
    Table::new(rows).to_string()
}

fn appointment_detail_table(appointment: &Appointment) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Patient", "Caregiver", "Vaccine", "Date"]);
    builder.push_record([
        appointment.id.to_string(),
        appointment.patient.to_string(),
        appointment.caregiver.to_string(),
        appointment.vaccine.to_string(),
        appointment.date.to_string(),
    ]);
    builder.build().to_string()
}

fn render_doses(vaccines: &[Vaccine]) {
    output::section("Available vaccines");
    if vaccines.is_empty() {
        output::note("No vaccines in stock");
        return;
    }
    output::lines(&doses_table(vaccines));
}

fn render_search(view: &ScheduleView) {
    if output::is_json() {
        output::json_output(json!({
            "command": "search_caregiver_schedule",
            "date": view.date.to_string(),
            "caregivers": view.caregivers,
            "vaccines": view.vaccines,
        }));
        return;
    }

    if view.caregivers.is_empty() {
        output::warning(&format!("No caregivers available on {}", view.date));
    } else {
        output::section(&format!("Caregivers available on {}", view.date));
        for caregiver in &view.caregivers {
            output::lines(&format!("- {caregiver}"));
        }
    }
    render_doses(&view.vaccines);
}

fn render_availabilities(dates: &[ScheduleDate]) {
    if output::is_json() {
        let dates: Vec<String> = dates.iter().map(ToString::to_string).collect();
        output::json_output(json!({
            "command": "show_availabilities",
            "dates": dates,
        }));
        return;
    }

    output::section("Availabilities");
    if dates.is_empty() {
        output::note("No open availability");
        return;
    }
    for date in dates {
        output::lines(&date.to_string());
    }
}

fn render_appointments(appointments: &[Appointment], viewer: Role) {
    if output::is_json() {
        let rows: Vec<serde_json::Value> = appointments.iter().map(appointment_json).collect();
        output::json_output(json!({
            "command": "show_appointments",
            "appointments": rows,
        }));
        return;
    }

    output::section("Appointments");
    if appointments.is_empty() {
        output::note("No appointments");
        return;
    }

    let counterpart = match viewer {
        Role::Patient => "Caregiver",
        Role::Caregiver => "Patient",
    };
    let mut builder = Builder::default();
    builder.push_record(["ID", counterpart, "Vaccine", "Date"]);
    for appointment in appointments {
        builder.push_record([
            appointment.id.to_string(),
            appointment.counterpart(viewer).to_string(),
            appointment.vaccine.to_string(),
            appointment.date.to_string(),
        ]);
    }
    output::lines(&builder.build().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Username, VaccineName};
    use crate::testkit::db::TempDb;
    use crate::testkit::scheduler::scheduler;

    fn dispatcher(db: &TempDb) -> Dispatcher {
        Dispatcher::new(scheduler(db), DatePolicy::Lenient)
    }

    #[test]
    fn invalid_utf8_is_rejected_without_quitting() {
        let db = TempDb::create();
        let mut dispatcher = dispatcher(&db);

        assert_eq!(dispatcher.handle_bytes(b"quit\xff"), Flow::Continue);
        assert_eq!(dispatcher.handle_bytes(b"quit\n"), Flow::Quit);
    }

    #[test]
    fn login_and_logout_drive_the_session() {
        let db = TempDb::create();
        let mut dispatcher = dispatcher(&db);

        dispatcher.handle("create_caregiver c1 pw");
        dispatcher.handle("login_caregiver c1 pw");
        assert_eq!(
            dispatcher.session(),
            &Session::Caregiver(Username::new("c1"))
        );

        dispatcher.handle("logout");
        assert_eq!(dispatcher.session(), &Session::LoggedOut);
    }

    #[test]
    fn rejected_commands_keep_the_loop_running() {
        let db = TempDb::create();
        let mut dispatcher = dispatcher(&db);

        assert_eq!(dispatcher.handle("reserve 01-15-2025 X"), Flow::Continue);
        assert_eq!(dispatcher.handle("nonsense"), Flow::Continue);
        assert_eq!(dispatcher.handle(""), Flow::Continue);
        assert_eq!(dispatcher.handle("QUIT"), Flow::Quit);
    }

    #[test]
    fn gate_is_checked_before_arguments() {
        let db = TempDb::create();
        let dispatcher = dispatcher(&db);

        let err = dispatcher
            .check_gate(parse::Verb::AddDoses.gate())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn full_booking_flow_through_the_prompt() {
        let db = TempDb::create();
        let mut dispatcher = dispatcher(&db);

        for line in [
            "create_caregiver c1 pw",
            "create_patient p1 pw",
            "login_caregiver c1 pw",
            "add_doses ModernaX 5",
            "upload_availability 01-15-2025",
            "logout",
            "login_patient p1 pw",
            "reserve 01-15-2025 ModernaX",
        ] {
            assert_eq!(dispatcher.handle(line), Flow::Continue);
        }

        let booked = dispatcher.scheduler.appointments(&dispatcher.session).unwrap();
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].vaccine, VaccineName::new("ModernaX"));
        assert_eq!(dispatcher.scheduler.doses().unwrap()[0].doses, 4);
    }
}
