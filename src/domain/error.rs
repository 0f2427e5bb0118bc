//! Validation errors for user-supplied input.
//!
//! These errors are returned when a token typed at the prompt cannot be turned
//! into a domain value: malformed dates, out-of-range months or days, and dose
//! counts or appointment ids that are not valid integers.
//!
//! # Examples
//!
//! ```
//! use vaxsched::domain::date::{DatePolicy, ScheduleDate};
//! use vaxsched::domain::error::DomainError;
//!
//! let result = ScheduleDate::parse("13-01-2025", DatePolicy::Lenient);
//! assert!(matches!(result, Err(DomainError::MonthOutOfRange { month: 13 })));
//! ```

use thiserror::Error;

/// Errors raised when input violates a domain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Wrong number of tokens for a command.
    #[error("expected {expected} inputs, received {received} inputs")]
    Arity {
        /// Token count the command takes, including the command word.
        expected: usize,
        /// Token count actually supplied.
        received: usize,
    },

    /// A prompt line that is not valid UTF-8.
    #[error("input is not valid UTF-8 text")]
    InvalidEncoding,

    /// The command word is not recognised.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The offending command word.
        command: String,
    },

    /// Dates must be written as `mm-dd-yyyy`.
    #[error("invalid date {input}, please use format mm-dd-yyyy")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Month outside 01..=12.
    #[error("month {month} is out of range")]
    MonthOutOfRange {
        /// The parsed month value.
        month: u32,
    },

    /// Day outside 01..=31.
    #[error("day {day} is out of range")]
    DayOutOfRange {
        /// The parsed day value.
        day: u32,
    },

    /// Syntactically valid but absent from the calendar (e.g. 02-30-2025).
    #[error("{input} is not a valid calendar date")]
    NonexistentDate {
        /// The text that failed calendar validation.
        input: String,
    },

    /// Dose counts must be non-negative.
    #[error("number of doses must be a positive integer, got {value}")]
    NegativeDoses {
        /// The negative value supplied.
        value: i64,
    },

    /// Dose count was not an integer at all.
    #[error("number of doses must be a positive integer, got {input}")]
    InvalidDoseCount {
        /// The text that failed to parse.
        input: String,
    },

    /// Appointment ids are integers.
    #[error("appointment id must be an integer, got {input}")]
    InvalidAppointmentId {
        /// The text that failed to parse.
        input: String,
    },
}
