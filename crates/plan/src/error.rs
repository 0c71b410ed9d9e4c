use serde::Serialize;
use thiserror::Error;

use crate::model::PlanEntryInput;

pub type PlanResult<T> = Result<T, PlanError>;

/// One rejected entry from a plan replacement, echoed back to the caller so
/// the UI can point at the exact offending item.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidEntry {
    pub entry: PlanEntryInput,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("{0} is not a valid day of the week")]
    InvalidDay(String),

    #[error("Invalid workouts")]
    InvalidEntries(Vec<InvalidEntry>),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
