use thiserror::Error;

/// Error type for access token operations.
///
/// Validation failures (`InvalidSignature`, `Expired`, `MalformedClaims`) are
/// kept apart so callers can log them precisely before collapsing them into a
/// single unauthorized response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token lifetime must be at least one second, got {0}s")]
    InvalidTtl(i64),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token claims are malformed: {0}")]
    MalformedClaims(String),
}
