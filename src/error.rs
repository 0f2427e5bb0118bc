use thiserror::Error;

use crate::domain::account::Role;
use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Account registration and login failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("username {username} is already taken")]
    DuplicateUsername { username: String },

    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Session role violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("already logged in, please logout first")]
    AlreadyLoggedIn,

    #[error("not logged in, please login first")]
    NotLoggedIn,

    #[error("please login as a {required} first")]
    RoleRequired { required: Role },
}

/// Lookups that found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("vaccine {name} does not exist")]
    Vaccine { name: String },

    #[error("appointment {id} does not exist")]
    Appointment { id: i32 },
}

/// Scheduling conflicts raised by the ledger, the registry and the booking
/// transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("not enough doses of {vaccine}: {available} available, {requested} requested")]
    InsufficientDoses {
        vaccine: String,
        available: i64,
        requested: u32,
    },

    #[error("no caregivers available on {date}")]
    NoAvailability { date: String },

    #[error("{caregiver} already has an availability on {date}")]
    DuplicateSlot { caregiver: String, date: String },

    #[error("{caregiver} already has an appointment on {date}")]
    AlreadyBooked { caregiver: String, date: String },
}

/// Coarse classification of every error the scheduler reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    State,
    NotFound,
    Conflict,
    Persistence,
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify the error for reporting.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Domain(_) => ErrorKind::Validation,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Session(_) => ErrorKind::State,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Schedule(_) => ErrorKind::Conflict,
            Self::Io(_) | Self::Connection(_) | Self::Database(_) => ErrorKind::Persistence,
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Error::Connection(err.to_string())
    }
}
