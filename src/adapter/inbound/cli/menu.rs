//! Menus, banner and farewell text.

use crate::adapter::inbound::cli::output;
use crate::domain::{Role, Session};

const BANNER: &str = "
+-------------------------------------------------+
| Welcome to the Vaccine Appointment Scheduler!   |
+-------------------------------------------------+";

const LOGGED_OUT: &str = "
+----------------------------------------+
|   PLEASE LOGIN OR CREATE AN ACCOUNT!   |
+----------------------------------------+

 *** Available Commands ***
> create_patient <username> <password>
> create_caregiver <username> <password>
> login_patient <username> <password>
> login_caregiver <username> <password>
> show_doses
> quit
";

const CAREGIVER: &str = "
+----------------------------------------+
|           WELCOME CAREGIVER!           |
+----------------------------------------+

 *** Available Commands ***
Vaccine Management:
-------------------
> show_doses
> add_doses <vaccine> <number>

Scheduler:
----------
> search_caregiver_schedule <date>
> show_appointments
> upload_availability <date>
> cancel <appointment_id>
> show_availabilities

Logout:
-------
> logout
> quit
";

const PATIENT: &str = "
+----------------------------------------+
|            WELCOME PATIENT!            |
+----------------------------------------+

 *** Available Commands ***
Schedule an Appointment:
------------------------
> show_availabilities
> show_doses
> search_caregiver_schedule <date>
> reserve <date> <vaccine>

Manage Existing Appointments:
-----------------------------
> show_appointments
> cancel <appointment_id>

Logout:
-------
> logout
> quit
";

/// Prompt shown before each line of input.
pub const PROMPT: &str = "> Enter: ";

/// Menu text for the current session.
#[must_use]
pub fn menu_for(session: &Session) -> &'static str {
    match session.role() {
        None => LOGGED_OUT,
        Some(Role::Caregiver) => CAREGIVER,
        Some(Role::Patient) => PATIENT,
    }
}

pub fn print_menu(session: &Session) {
    output::chrome(menu_for(session));
}

pub fn print_banner() {
    output::chrome(BANNER);
}

pub fn print_goodbye() {
    output::chrome("Thank you for using the scheduler, Goodbye!");
}
