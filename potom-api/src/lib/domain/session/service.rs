use std::sync::Arc;

use async_trait::async_trait;
use auth::extract_bearer;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::LoginSession;
use crate::domain::session::models::NewRefreshToken;
use crate::domain::session::models::RevokeOutcome;
use crate::domain::session::models::SessionPolicy;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for session operations.
///
/// Owns the login, refresh and revoke flows plus access token gating.
pub struct SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RR>,
    authenticator: Arc<Authenticator>,
    policy: SessionPolicy,
}

impl<UR, RR> SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User lookup for credential checks
    /// * `refresh_tokens` - Refresh token store
    /// * `authenticator` - Password verification and token codec
    /// * `policy` - Token lifetimes
    pub fn new(
        users: Arc<UR>,
        refresh_tokens: Arc<RR>,
        authenticator: Arc<Authenticator>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            authenticator,
            policy,
        }
    }
}

#[async_trait]
impl<UR, RR> SessionServicePort for SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginSession, SessionError> {
        let user = match self.users.find_by_email(&command.email).await? {
            Some(user) => user,
            None => {
                self.authenticator
                    .verify_unknown_account(&command.password)?;
                return Err(SessionError::InvalidCredentials);
            }
        };

        let ttl = self.policy.access_token_ttl_for(command.access_token_ttl);
        let authenticated = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &user.id, ttl)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => SessionError::InvalidCredentials,
                AuthenticationError::PasswordError(e) => SessionError::Password(e),
                AuthenticationError::JwtError(e) => SessionError::TokenIssuance(e),
            })?;

        let expires_at = Utc::now()
            .checked_add_signed(self.policy.refresh_token_ttl)
            .ok_or_else(|| {
                SessionError::Unknown("Refresh token expiry is out of range".to_string())
            })?;

        let refresh_token = self.authenticator.generate_refresh_token()?;
        let stored = self
            .refresh_tokens
            .create(NewRefreshToken {
                token: refresh_token,
                user_id: user.id,
                expires_at,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginSession {
            user_id: user.id,
            email: user.email,
            access_token: authenticated.access_token,
            refresh_token: stored.token,
        })
    }

    async fn refresh(&self, authorization: Option<&str>) -> Result<String, SessionError> {
        let token = extract_bearer(authorization)?;

        let stored = self
            .refresh_tokens
            .find(token)
            .await?
            .ok_or(SessionError::RefreshTokenNotFound)?;
        stored.ensure_usable(Utc::now())?;

        let user = self
            .users
            .find_by_id(&stored.user_id)
            .await?
            .ok_or_else(|| SessionError::UserNotFound(stored.user_id.to_string()))?;

        let access_token = self
            .authenticator
            .issue_access_token(&user.id, self.policy.access_token_ttl)
            .map_err(SessionError::TokenIssuance)?;

        tracing::debug!(user_id = %user.id, "Access token refreshed");

        Ok(access_token)
    }

    async fn revoke(&self, authorization: Option<&str>) -> Result<(), SessionError> {
        let token = extract_bearer(authorization)?;

        match self.refresh_tokens.revoke(token, Utc::now()).await? {
            RevokeOutcome::Revoked => tracing::info!("Refresh token revoked"),
            RevokeOutcome::NotFound => tracing::warn!("Revoke requested for unknown refresh token"),
        }

        Ok(())
    }

    fn authenticate(&self, authorization: Option<&str>) -> Result<UserId, SessionError> {
        let token = extract_bearer(authorization)?;

        self.authenticator
            .validate_subject::<Uuid>(token)
            .map(UserId)
            .map_err(SessionError::AccessToken)
    }
}

/// Require the acting user to be the target user.
///
/// # Errors
/// * `Forbidden` - Identities differ
pub fn authorize_owner(acting: &UserId, target: &UserId) -> Result<(), SessionError> {
    if acting == target {
        Ok(())
    } else {
        Err(SessionError::Forbidden {
            acting: acting.to_string(),
            target: target.to_string(),
        })
    }
}
