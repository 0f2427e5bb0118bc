//! Fully wired schedulers over throwaway databases.

use std::sync::Arc;

use crate::application::Scheduler;
use crate::infrastructure::bootstrap::build_scheduler;

use super::config::hasher;
use super::db::TempDb;
use super::selector::FixedSelector;

/// Scheduler over `db` that always picks the first free caregiver.
#[must_use]
pub fn scheduler(db: &TempDb) -> Scheduler {
    build_scheduler(db.pool(), hasher(), Arc::new(FixedSelector::first()))
}
