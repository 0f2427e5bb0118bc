//! Process-local login state.
//!
//! A [`Session`] is owned by the command loop and handed to every use case,
//! which states what it needs through a [`Requirement`]. At most one identity
//! is logged in at a time.

use crate::error::SessionError;

use super::account::{Identity, Role};
use super::id::Username;

/// Who a use case may run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Patient,
    Caregiver,
    Any,
}

/// The single currently authenticated identity, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    Patient(Username),
    Caregiver(Username),
}

impl Session {
    /// The logged-in identity.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::LoggedOut => None,
            Self::Patient(username) => Some(Identity::new(Role::Patient, username.clone())),
            Self::Caregiver(username) => Some(Identity::new(Role::Caregiver, username.clone())),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::LoggedOut => None,
            Self::Patient(_) => Some(Role::Patient),
            Self::Caregiver(_) => Some(Role::Caregiver),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Self::LoggedOut)
    }

    /// Fail unless nobody is logged in.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyLoggedIn`].
    pub fn ensure_logged_out(&self) -> Result<(), SessionError> {
        if self.is_logged_in() {
            return Err(SessionError::AlreadyLoggedIn);
        }
        Ok(())
    }

    /// Check the session against a requirement and return the identity it
    /// grants.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] for [`Requirement::Any`] when
    /// logged out, and [`SessionError::RoleRequired`] when a specific role is
    /// required but not held.
    pub fn require(&self, requirement: Requirement) -> Result<Identity, SessionError> {
        let identity = self.identity();
        match (requirement, identity) {
            (Requirement::Any, Some(identity)) => Ok(identity),
            (Requirement::Any, None) => Err(SessionError::NotLoggedIn),
            (Requirement::Patient, Some(identity)) if identity.role == Role::Patient => {
                Ok(identity)
            }
            (Requirement::Caregiver, Some(identity)) if identity.role == Role::Caregiver => {
                Ok(identity)
            }
            (Requirement::Patient, _) => Err(SessionError::RoleRequired {
                required: Role::Patient,
            }),
            (Requirement::Caregiver, _) => Err(SessionError::RoleRequired {
                required: Role::Caregiver,
            }),
        }
    }

    /// Transition from logged out to logged in as `role`.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyLoggedIn`] if someone is logged in.
    pub fn login(&mut self, role: Role, username: Username) -> Result<(), SessionError> {
        self.ensure_logged_out()?;
        *self = match role {
            Role::Patient => Self::Patient(username),
            Role::Caregiver => Self::Caregiver(username),
        };
        Ok(())
    }

    /// Log out and return who was logged in.
    ///
    /// # Errors
    /// Returns [`SessionError::NotLoggedIn`] if nobody is logged in.
    pub fn logout(&mut self) -> Result<Identity, SessionError> {
        let identity = self.identity().ok_or(SessionError::NotLoggedIn)?;
        *self = Self::LoggedOut;
        Ok(identity)
    }
}
