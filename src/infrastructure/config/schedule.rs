//! Scheduling rules.

use serde::Deserialize;

use crate::domain::DatePolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Reject dates that do not exist on the calendar, such as `02-30-2025`,
    /// when searching and reserving. Off by default: only month and day
    /// ranges are checked.
    pub strict_dates: bool,
}

impl ScheduleConfig {
    /// Date policy for search and reserve input.
    #[must_use]
    pub const fn date_policy(&self) -> DatePolicy {
        if self.strict_dates {
            DatePolicy::Strict
        } else {
            DatePolicy::Lenient
        }
    }
}
