//! Prompt line parsing.
//!
//! A line is split on whitespace. The first token names the command and is
//! matched case-insensitively; the remaining tokens keep their case. Parsing
//! happens in two steps so that the session gate can be checked before any
//! argument is validated:
//!
//! 1. [`split`] recognises the [`Verb`].
//! 2. [`Verb::build`] checks the token count and converts the arguments.

use crate::domain::error::DomainError;
use crate::domain::vaccine::parse_dose_count;
use crate::domain::{
    AppointmentId, DatePolicy, Requirement, Role, ScheduleDate, Username, VaccineName,
};

/// The command word typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    CreatePatient,
    CreateCaregiver,
    LoginPatient,
    LoginCaregiver,
    SearchCaregiverSchedule,
    Reserve,
    UploadAvailability,
    Cancel,
    AddDoses,
    ShowDoses,
    ShowAvailabilities,
    ShowAppointments,
    Logout,
    Quit,
}

/// What the session must look like before a verb runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Runs in any session state.
    Open,
    /// Only while nobody is logged in.
    LoggedOut,
    /// Only for a matching login.
    Requires(Requirement),
}

impl Verb {
    fn from_word(word: &str) -> Option<Self> {
        let verb = match word.to_ascii_lowercase().as_str() {
            "create_patient" => Self::CreatePatient,
            "create_caregiver" => Self::CreateCaregiver,
            "login_patient" => Self::LoginPatient,
            "login_caregiver" => Self::LoginCaregiver,
            "search_caregiver_schedule" => Self::SearchCaregiverSchedule,
            "reserve" => Self::Reserve,
            "upload_availability" => Self::UploadAvailability,
            "cancel" => Self::Cancel,
            "add_doses" => Self::AddDoses,
            "show_doses" => Self::ShowDoses,
            "show_availabilities" => Self::ShowAvailabilities,
            "show_appointments" => Self::ShowAppointments,
            "logout" => Self::Logout,
            "quit" => Self::Quit,
            _ => return None,
        };
        Some(verb)
    }

    /// Number of tokens the line must have, command word included.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::CreatePatient
            | Self::CreateCaregiver
            | Self::LoginPatient
            | Self::LoginCaregiver
            | Self::Reserve
            | Self::AddDoses => 3,
            Self::SearchCaregiverSchedule | Self::UploadAvailability | Self::Cancel => 2,
            Self::ShowDoses
            | Self::ShowAvailabilities
            | Self::ShowAppointments
            | Self::Logout
            | Self::Quit => 1,
        }
    }

    #[must_use]
    pub const fn gate(self) -> Gate {
        match self {
            Self::CreatePatient | Self::CreateCaregiver | Self::ShowDoses | Self::Quit => {
                Gate::Open
            }
            Self::LoginPatient | Self::LoginCaregiver => Gate::LoggedOut,
            Self::Reserve => Gate::Requires(Requirement::Patient),
            Self::UploadAvailability | Self::AddDoses => Gate::Requires(Requirement::Caregiver),
            Self::SearchCaregiverSchedule
            | Self::Cancel
            | Self::ShowAvailabilities
            | Self::ShowAppointments
            | Self::Logout => Gate::Requires(Requirement::Any),
        }
    }

    /// Check the token count and convert the arguments.
    ///
    /// `tokens` includes the command word. Search and reserve dates follow
    /// `policy`; uploaded availability must always be a real calendar date.
    ///
    /// # Errors
    /// Returns [`DomainError::Arity`] or the first argument's validation
    /// error.
    pub fn build(self, tokens: &[&str], policy: DatePolicy) -> Result<Command, DomainError> {
        if tokens.len() != self.arity() {
            return Err(DomainError::Arity {
                expected: self.arity(),
                received: tokens.len(),
            });
        }

        let command = match self {
            Self::CreatePatient => Command::CreateAccount {
                role: Role::Patient,
                username: Username::new(tokens[1]),
                password: tokens[2].to_string(),
            },
            Self::CreateCaregiver => Command::CreateAccount {
                role: Role::Caregiver,
                username: Username::new(tokens[1]),
                password: tokens[2].to_string(),
            },
            Self::LoginPatient => Command::Login {
                role: Role::Patient,
                username: Username::new(tokens[1]),
                password: tokens[2].to_string(),
            },
            Self::LoginCaregiver => Command::Login {
                role: Role::Caregiver,
                username: Username::new(tokens[1]),
                password: tokens[2].to_string(),
            },
            Self::SearchCaregiverSchedule => Command::Search {
                date: ScheduleDate::parse(tokens[1], policy)?,
            },
            Self::Reserve => Command::Reserve {
                date: ScheduleDate::parse(tokens[1], policy)?,
                vaccine: VaccineName::new(tokens[2]),
            },
            Self::UploadAvailability => Command::UploadAvailability {
                date: ScheduleDate::parse(tokens[1], DatePolicy::Strict)?,
            },
            Self::Cancel => Command::Cancel {
                id: tokens[1].parse()?,
            },
            Self::AddDoses => Command::AddDoses {
                vaccine: VaccineName::new(tokens[1]),
                amount: parse_dose_count(tokens[2])?,
            },
            Self::ShowDoses => Command::ShowDoses,
            Self::ShowAvailabilities => Command::ShowAvailabilities,
            Self::ShowAppointments => Command::ShowAppointments,
            Self::Logout => Command::Logout,
            Self::Quit => Command::Quit,
        };
        Ok(command)
    }
}

/// A fully validated prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount {
        role: Role,
        username: Username,
        password: String,
    },
    Login {
        role: Role,
        username: Username,
        password: String,
    },
    Search {
        date: ScheduleDate,
    },
    Reserve {
        date: ScheduleDate,
        vaccine: VaccineName,
    },
    UploadAvailability {
        date: ScheduleDate,
    },
    Cancel {
        id: AppointmentId,
    },
    AddDoses {
        vaccine: VaccineName,
        amount: u32,
    },
    ShowDoses,
    ShowAvailabilities,
    ShowAppointments,
    Logout,
    Quit,
}

/// Tokenize `line` and recognise its command word.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
/// Returns [`DomainError::UnknownCommand`] if the first token is not a verb.
pub fn split(line: &str) -> Result<Option<(Verb, Vec<&str>)>, DomainError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(word) = tokens.first() else {
        return Ok(None);
    };
    let verb = Verb::from_word(word).ok_or_else(|| DomainError::UnknownCommand {
        command: (*word).to_string(),
    })?;
    Ok(Some((verb, tokens)))
}

/// Parse a whole line in one step.
///
/// # Errors
/// Returns any error from [`split`] or [`Verb::build`].
pub fn parse(line: &str, policy: DatePolicy) -> Result<Option<Command>, DomainError> {
    match split(line)? {
        Some((verb, tokens)) => verb.build(&tokens, policy).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(line: &str) -> Result<Option<Command>, DomainError> {
        parse(line, DatePolicy::Lenient)
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(lenient("").unwrap(), None);
        assert_eq!(lenient("   \t ").unwrap(), None);
    }

    #[test]
    fn command_word_is_case_insensitive_but_arguments_are_not() {
        let command = lenient("Create_Patient Alice S3cret").unwrap().unwrap();
        assert_eq!(
            command,
            Command::CreateAccount {
                role: Role::Patient,
                username: Username::new("Alice"),
                password: "S3cret".to_string(),
            }
        );
    }

    #[test]
    fn reserve_parses_date_and_vaccine() {
        let command = lenient("reserve 01-15-2025 ModernaX").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Reserve {
                date: ScheduleDate::from_parts(2025, 1, 15).unwrap(),
                vaccine: VaccineName::new("ModernaX"),
            }
        );
    }

    #[test]
    fn arity_is_exact() {
        assert_eq!(
            lenient("reserve 01-15-2025").unwrap_err(),
            DomainError::Arity {
                expected: 3,
                received: 2
            }
        );
        assert_eq!(
            lenient("show_doses now").unwrap_err(),
            DomainError::Arity {
                expected: 1,
                received: 2
            }
        );
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert_eq!(
            lenient("search_caregiver_schedule 13-01-2025").unwrap_err(),
            DomainError::MonthOutOfRange { month: 13 }
        );
    }

    #[test]
    fn impossible_dates_follow_the_policy() {
        assert!(lenient("reserve 02-30-2025 X").is_ok());
        assert!(parse("reserve 02-30-2025 X", DatePolicy::Strict).is_err());
        assert!(lenient("upload_availability 02-30-2025").is_err());
    }

    #[test]
    fn negative_and_non_numeric_doses_are_rejected() {
        assert_eq!(
            lenient("add_doses X -3").unwrap_err(),
            DomainError::NegativeDoses { value: -3 }
        );
        assert!(matches!(
            lenient("add_doses X many").unwrap_err(),
            DomainError::InvalidDoseCount { .. }
        ));
        assert_eq!(
            lenient("add_doses X 0").unwrap().unwrap(),
            Command::AddDoses {
                vaccine: VaccineName::new("X"),
                amount: 0
            }
        );
    }

    #[test]
    fn appointment_id_must_be_an_integer() {
        assert!(matches!(
            lenient("cancel one").unwrap_err(),
            DomainError::InvalidAppointmentId { .. }
        ));
        assert_eq!(
            lenient("cancel 7").unwrap().unwrap(),
            Command::Cancel {
                id: AppointmentId::new(7)
            }
        );
    }

    #[test]
    fn unknown_words_are_reported() {
        assert_eq!(
            lenient("book 01-15-2025").unwrap_err(),
            DomainError::UnknownCommand {
                command: "book".to_string()
            }
        );
    }

    #[test]
    fn gates_match_role_requirements() {
        assert_eq!(Verb::ShowDoses.gate(), Gate::Open);
        assert_eq!(Verb::LoginCaregiver.gate(), Gate::LoggedOut);
        assert_eq!(Verb::Reserve.gate(), Gate::Requires(Requirement::Patient));
        assert_eq!(
            Verb::AddDoses.gate(),
            Gate::Requires(Requirement::Caregiver)
        );
        assert_eq!(Verb::Cancel.gate(), Gate::Requires(Requirement::Any));
    }
}
