use thiserror::Error;

/// Error for GroupName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupNameError {
    #[error("Group name cannot be empty")]
    Empty,

    #[error("Group name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for group operations
#[derive(Debug, Clone, Error)]
pub enum GroupError {
    #[error("Invalid group name: {0}")]
    InvalidName(#[from] GroupNameError),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
