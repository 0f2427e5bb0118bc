//! Deterministic slot selection for tests.

use crate::domain::Username;
use crate::port::outbound::selector::SlotSelector;

/// Always picks the candidate at a fixed index, clamped to the last one.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector {
    index: usize,
}

impl FixedSelector {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Picks the alphabetically first caregiver.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(0)
    }
}

impl SlotSelector for FixedSelector {
    fn select(&self, candidates: &[Username]) -> usize {
        self.index.min(candidates.len().saturating_sub(1))
    }
}
