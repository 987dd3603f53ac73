use std::str::FromStr;

use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::refresh::RefreshTokenError;
use crate::refresh::RefreshTokenGenerator;

/// Authentication coordinator combining password verification, access token
/// issuance and refresh token generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    refresh_tokens: RefreshTokenGenerator,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for access token signing
    ///
    /// # Returns
    /// Authenticator with the default password cost and issuer
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            refresh_tokens: RefreshTokenGenerator::new(),
        }
    }

    /// Use a password hasher with a custom cost.
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Use a custom issuer label for access tokens.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt_handler = self.jwt_handler.with_issuer(issuer);
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity written into the token's `sub` claim
    /// * `ttl` - Access token lifetime
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &impl ToString,
        ttl: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject, ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Spend the verification cost of `authenticate` for an account that
    /// does not exist. Always reports a mismatch.
    pub fn verify_unknown_account(&self, password: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify_absent(password)
    }

    /// Issue an access token without password verification.
    ///
    /// Used by the refresh flow, where identity was proven by a stored
    /// refresh token.
    pub fn issue_access_token(
        &self,
        subject: &impl ToString,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject, ttl)
    }

    /// Validate an access token and return its claims.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.validate(token)
    }

    /// Validate an access token and parse its subject.
    pub fn validate_subject<T: FromStr>(&self, token: &str) -> Result<T, JwtError> {
        self.jwt_handler.validate_subject(token)
    }

    /// Generate a fresh opaque refresh token.
    pub fn generate_refresh_token(&self) -> Result<String, RefreshTokenError> {
        self.refresh_tokens.generate()
    }
}
