use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

use super::errors::RefreshTokenError;

/// Number of random bytes in a refresh token.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Opaque refresh token generator.
///
/// Tokens are hex-encoded OS randomness with no embedded structure; owner,
/// expiry and revocation live in the token store.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshTokenGenerator;

impl RefreshTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new refresh token.
    ///
    /// # Returns
    /// `2 * REFRESH_TOKEN_BYTES` lowercase hex characters
    ///
    /// # Errors
    /// * `Entropy` - The operating system random source failed
    pub fn generate(&self) -> Result<String, RefreshTokenError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| RefreshTokenError::Entropy(e.to_string()))?;

        Ok(hex::encode(bytes))
    }
}
