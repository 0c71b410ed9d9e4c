use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status; `message` carries the
    /// server's own error text when the body could be decoded.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unknown workout: {0}")]
    UnknownWorkout(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Plan not loaded: {0}")]
    PlanNotLoaded(String),
}
