use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::LoginSession;
use crate::domain::session::models::NewRefreshToken;
use crate::domain::session::models::RefreshToken;
use crate::domain::session::models::RevokeOutcome;
use crate::domain::user::models::UserId;

/// Port for session flows.
///
/// `authorization` arguments are raw `Authorization` header values; the
/// service performs bearer extraction itself.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify email and password, then issue an access token and persist a
    /// fresh refresh token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Password` - Stored hash is malformed
    /// * `TokenIssuance` / `Entropy` / `DatabaseError` - Internal failures
    async fn login(&self, command: LoginCommand) -> Result<LoginSession, SessionError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token is not rotated and stays usable until it expires or
    /// is revoked.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `RefreshTokenNotFound` / `RefreshTokenRevoked` / `RefreshTokenExpired`
    /// * `UserNotFound` - Owning user no longer exists
    async fn refresh(&self, authorization: Option<&str>) -> Result<String, SessionError>;

    /// Revoke a refresh token. Revoking an unknown or already revoked token
    /// succeeds.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `DatabaseError` - Store failure
    async fn revoke(&self, authorization: Option<&str>) -> Result<(), SessionError>;

    /// Resolve the acting user from an access token.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `AccessToken` - Signature, expiry or claims invalid
    fn authenticate(&self, authorization: Option<&str>) -> Result<UserId, SessionError>;
}

/// Refresh token store.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Persist a new, unrevoked refresh token.
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, SessionError>;

    /// Look up a refresh token by its value.
    ///
    /// # Returns
    /// Optional refresh token (None if not found)
    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, SessionError>;

    /// Set `revoked_at` on a token, overwriting any previous value.
    ///
    /// # Returns
    /// `NotFound` when no row matched
    async fn revoke(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<RevokeOutcome, SessionError>;
}
