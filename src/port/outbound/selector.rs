//! Caregiver selection port.

use crate::domain::Username;

/// Chooses which open slot a booking consumes.
pub trait SlotSelector: Send + Sync {
    /// Return an index into `candidates`.
    ///
    /// Called only with a non-empty slice; implementations must return a value
    /// below `candidates.len()`.
    fn select(&self, candidates: &[Username]) -> usize;
}
