use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Unknown logical day '{0}'")]
    UnknownLogicalDay(String),

    #[error("Unknown team '{0}'")]
    UnknownTeam(String),

    #[error("Schedule '{0}' not found")]
    ScheduleNotFound(String),

    #[error("A schedule already exists for slot {0}")]
    DuplicateSlot(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
