//! Appointment dates.
//!
//! Users type dates as `mm-dd-yyyy`; the store keeps them as `yyyy-mm-dd` so
//! that lexical order is calendar order. Parsing is textual: two-digit month,
//! two-digit day, four-digit year, range-checked but not calendar-checked
//! unless [`DatePolicy::Strict`] is requested.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// How thoroughly a date is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Month 1-12 and day 1-31 only; `02-30-2025` passes.
    #[default]
    Lenient,
    /// Additionally requires the date to exist in the calendar.
    Strict,
}

/// A calendar day on which a caregiver can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleDate {
    year: u32,
    month: u32,
    day: u32,
}

impl ScheduleDate {
    /// Parse a user-facing `mm-dd-yyyy` date.
    ///
    /// # Errors
    /// Returns a [`DomainError`] if the text is malformed, the month or day is
    /// out of range, or (under [`DatePolicy::Strict`]) the date does not exist.
    pub fn parse(input: &str, policy: DatePolicy) -> Result<Self, DomainError> {
        let parts: Vec<&str> = input.split('-').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(Self::format_error(input));
        };
        let month = digits(month, 2).ok_or_else(|| Self::format_error(input))?;
        let day = digits(day, 2).ok_or_else(|| Self::format_error(input))?;
        let year = digits(year, 4).ok_or_else(|| Self::format_error(input))?;

        let date = Self::from_parts(year, month, day)?;
        if policy == DatePolicy::Strict && !date.exists() {
            return Err(DomainError::NonexistentDate {
                input: input.to_string(),
            });
        }
        Ok(date)
    }

    /// Parse a stored `yyyy-mm-dd` value.
    ///
    /// # Errors
    /// Returns a [`DomainError`] if the stored text is not a valid date.
    pub fn from_storage(stored: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = stored.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(Self::format_error(stored));
        };
        let year = digits(year, 4).ok_or_else(|| Self::format_error(stored))?;
        let month = digits(month, 2).ok_or_else(|| Self::format_error(stored))?;
        let day = digits(day, 2).ok_or_else(|| Self::format_error(stored))?;
        Self::from_parts(year, month, day)
    }

    /// Build a date from numeric parts, applying the range checks.
    ///
    /// # Errors
    /// Returns [`DomainError::MonthOutOfRange`] or [`DomainError::DayOutOfRange`].
    pub fn from_parts(year: u32, month: u32, day: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::MonthOutOfRange { month });
        }
        if !(1..=31).contains(&day) {
            return Err(DomainError::DayOutOfRange { day });
        }
        Ok(Self { year, month, day })
    }

    /// The `yyyy-mm-dd` form written to the database.
    #[must_use]
    pub fn to_storage(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Whether the date exists in the proleptic Gregorian calendar.
    #[must_use]
    pub fn exists(&self) -> bool {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .is_some()
    }

    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    fn format_error(input: &str) -> DomainError {
        DomainError::InvalidDateFormat {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.month, self.day, self.year)
    }
}

/// Parse exactly `width` ASCII digits.
fn digits(text: &str, width: usize) -> Option<u32> {
    if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
