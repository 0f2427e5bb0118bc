//! Vaccine inventory types.

use serde::Serialize;

use super::error::DomainError;
use super::id::VaccineName;

/// A vaccine product and the number of doses on hand.
///
/// `doses` is never negative; the store enforces it with a check constraint
/// and guarded updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vaccine {
    pub name: VaccineName,
    pub doses: i64,
}

/// Parse a dose count typed by a caregiver.
///
/// Zero is accepted; negative numbers and non-integers are not.
///
/// # Errors
/// Returns [`DomainError::NegativeDoses`] or [`DomainError::InvalidDoseCount`].
pub fn parse_dose_count(input: &str) -> Result<u32, DomainError> {
    match input.parse::<i64>() {
        Ok(value) if value < 0 => Err(DomainError::NegativeDoses { value }),
        Ok(value) => u32::try_from(value).map_err(|_| DomainError::InvalidDoseCount {
            input: input.to_string(),
        }),
        Err(_) => Err(DomainError::InvalidDoseCount {
            input: input.to_string(),
        }),
    }
}
