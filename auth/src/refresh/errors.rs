use thiserror::Error;

/// Error type for refresh token generation.
#[derive(Debug, Clone, Error)]
pub enum RefreshTokenError {
    #[error("Entropy source failed: {0}")]
    Entropy(String),
}
