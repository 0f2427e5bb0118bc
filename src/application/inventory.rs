//! Vaccine dose ledger.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Vaccine, VaccineName};
use crate::error::Result;
use crate::port::outbound::store::InventoryStore;

/// Tracks doses per vaccine with floor-at-zero semantics.
pub struct InventoryLedger {
    store: Arc<dyn InventoryStore>,
}

impl InventoryLedger {
    #[must_use]
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Add doses, creating the vaccine on first use.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn add_doses(&self, name: &VaccineName, amount: u32) -> Result<Vaccine> {
        let vaccine = self.store.add_doses(name, amount)?;
        info!(vaccine = %name, added = amount, doses = vaccine.doses, "Doses added");
        Ok(vaccine)
    }

    /// Remove doses.
    ///
    /// # Errors
    /// Returns `VaccineNotFound` or `InsufficientDoses` without changing the
    /// count, or a persistence error.
    pub fn decrement(&self, name: &VaccineName, amount: u32) -> Result<Vaccine> {
        let vaccine = self.store.remove_doses(name, amount)?;
        info!(vaccine = %name, removed = amount, doses = vaccine.doses, "Doses removed");
        Ok(vaccine)
    }

    /// Get one vaccine.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn get(&self, name: &VaccineName) -> Result<Option<Vaccine>> {
        self.store.get(name)
    }

    /// All vaccines ordered by name.
    ///
    /// # Errors
    /// Returns a persistence error if the store fails.
    pub fn list(&self) -> Result<Vec<Vaccine>> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::SqliteInventoryStore;
    use crate::error::{Error, NotFoundError, ScheduleError};
    use crate::testkit::db::TempDb;

    fn ledger() -> (TempDb, InventoryLedger) {
        let db = TempDb::create();
        let store = Arc::new(SqliteInventoryStore::new(db.pool().clone()));
        (db, InventoryLedger::new(store))
    }

    #[test]
    fn decrement_takes_from_stock() {
        let (_db, ledger) = ledger();
        let name = VaccineName::new("ModernaX");
        ledger.add_doses(&name, 5).unwrap();

        let vaccine = ledger.decrement(&name, 1).unwrap();

        assert_eq!(vaccine.doses, 4);
        assert_eq!(ledger.get(&name).unwrap().unwrap().doses, 4);
    }

    #[test]
    fn decrement_at_zero_changes_nothing() {
        let (_db, ledger) = ledger();
        let name = VaccineName::new("ModernaX");
        ledger.add_doses(&name, 0).unwrap();

        let err = ledger.decrement(&name, 1).unwrap_err();

        assert!(matches!(
            err,
            Error::Schedule(ScheduleError::InsufficientDoses { .. })
        ));
        assert_eq!(ledger.list().unwrap()[0].doses, 0);
    }

    #[test]
    fn decrement_unknown_vaccine() {
        let (_db, ledger) = ledger();

        let err = ledger.decrement(&VaccineName::new("Nope"), 1).unwrap_err();

        assert!(matches!(err, Error::NotFound(NotFoundError::Vaccine { .. })));
    }
}
