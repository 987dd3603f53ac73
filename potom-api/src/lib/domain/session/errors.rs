use auth::BearerError;
use auth::JwtError;
use auth::PasswordError;
use auth::RefreshTokenError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Error for login, refresh, revoke and access-token gating.
///
/// Variants stay precise for logging and tests; the HTTP layer collapses
/// them into unauthorized, forbidden or internal responses.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    // Caller errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access token lifetime must be positive, got {0}s")]
    InvalidTtl(i64),

    #[error("Bearer credential rejected: {0}")]
    Bearer(#[from] BearerError),

    #[error("Access token rejected: {0}")]
    AccessToken(JwtError),

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Refresh token revoked")]
    RefreshTokenRevoked,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User {acting} cannot act on behalf of user {target}")]
    Forbidden { acting: String, target: String },

    // Infrastructure errors
    #[error("Password verification failed: {0}")]
    Password(#[from] PasswordError),

    #[error("Access token issuance failed: {0}")]
    TokenIssuance(JwtError),

    #[error("Refresh token generation failed: {0}")]
    Entropy(#[from] RefreshTokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for SessionError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DatabaseError(msg) => SessionError::DatabaseError(msg),
            other => SessionError::Unknown(other.to_string()),
        }
    }
}
