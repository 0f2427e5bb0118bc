//! SQLite account store implementation.
//!
//! Patients and caregivers live in two tables with the same shape; the
//! [`Role`] picks the table.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{CaregiverRow, PatientRow};
use crate::adapter::outbound::sqlite::database::schema::{caregivers, patients};
use crate::domain::{Credentials, Role, Username};
use crate::error::{AuthError, Error, Result};
use crate::port::outbound::store::AccountStore;

/// SQLite-backed account store.
pub struct SqliteAccountStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteAccountStore {
    /// Create a new SQLite account store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AccountStore for SqliteAccountStore {
    fn create(&self, role: Role, username: &Username, credentials: &Credentials) -> Result<()> {
        let mut conn = self.pool.get()?;

        let inserted = match role {
            Role::Patient => diesel::insert_into(patients::table)
                .values(PatientRow {
                    username: username.to_string(),
                    salt: credentials.salt.clone(),
                    hash: credentials.hash.clone(),
                })
                .execute(&mut conn),
            Role::Caregiver => diesel::insert_into(caregivers::table)
                .values(CaregiverRow {
                    username: username.to_string(),
                    salt: credentials.salt.clone(),
                    hash: credentials.hash.clone(),
                })
                .execute(&mut conn),
        };

        match inserted {
            Ok(_) => {
                debug!(%role, %username, "Inserted account");
                Ok(())
            }
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(AuthError::DuplicateUsername {
                    username: username.to_string(),
                }
                .into())
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    fn exists(&self, role: Role, username: &Username) -> Result<bool> {
        let mut conn = self.pool.get()?;

        let count: i64 = match role {
            Role::Patient => patients::table
                .filter(patients::username.eq(username.as_str()))
                .count()
                .get_result(&mut conn)?,
            Role::Caregiver => caregivers::table
                .filter(caregivers::username.eq(username.as_str()))
                .count()
                .get_result(&mut conn)?,
        };

        Ok(count > 0)
    }

    fn credentials(&self, role: Role, username: &Username) -> Result<Option<Credentials>> {
        let mut conn = self.pool.get()?;

        let credentials = match role {
            Role::Patient => patients::table
                .find(username.as_str())
                .select(PatientRow::as_select())
                .first(&mut conn)
                .optional()?
                .map(Credentials::from),
            Role::Caregiver => caregivers::table
                .find(username.as_str())
                .select(CaregiverRow::as_select())
                .first(&mut conn)
                .optional()?
                .map(Credentials::from),
        };

        Ok(credentials)
    }
}
