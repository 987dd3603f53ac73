use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid hashing cost: {0}")]
    InvalidCost(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed or checked. A wrong password is
    /// never reported through this variant.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
