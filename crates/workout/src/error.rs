use thiserror::Error;

pub type WorkoutResult<T> = Result<T, WorkoutError>;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Workout not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for WorkoutError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the field-level message as-is; it is the caller-facing text.
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| errors.to_string());

        WorkoutError::ValidationError(message)
    }
}
