use serde::Serialize;
use thiserror::Error;

/// A single missing or invalid input field, reported back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum RosterError {
    /// Required fields are missing or empty after trimming
    #[error("Name and email are required")]
    Validation(Vec<FieldError>),

    /// Another live record already owns this email (case-insensitive)
    #[error("User with this email already exists")]
    EmailTaken(String),

    /// No record with the given id; unparsable ids map here as well
    #[error("User with ID {0} does not exist")]
    UserNotFound(String),

    /// Catch-all for unexpected faults
    #[error("Internal server error: {0}")]
    Internal(String),
}
