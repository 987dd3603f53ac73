use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Token lifetimes applied by the session service.
#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl SessionPolicy {
    /// Lifetime for an access token the caller asked for.
    ///
    /// Callers may shorten the default lifetime but never extend it.
    pub fn access_token_ttl_for(&self, requested: Option<Duration>) -> Duration {
        requested.map_or(self.access_token_ttl, |ttl| ttl.min(self.access_token_ttl))
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_SECONDS),
            refresh_token_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_TTL_DAYS),
        }
    }
}

/// Stored refresh token.
///
/// The token string is the lookup key. Rows are only ever mutated by
/// revocation and never deleted by the session flows.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check the token can still mint access tokens at `now`.
    ///
    /// # Errors
    /// * `RefreshTokenRevoked` - Token was revoked, whatever its expiry
    /// * `RefreshTokenExpired` - Expiry has passed
    pub fn ensure_usable(&self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_revoked() {
            return Err(SessionError::RefreshTokenRevoked);
        }
        if self.is_expired(now) {
            return Err(SessionError::RefreshTokenExpired);
        }
        Ok(())
    }
}

/// Refresh token to persist at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Result of a revoke against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked,
    NotFound,
}

/// Command to log in with email and password.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub access_token_ttl: Option<Duration>,
}

impl LoginCommand {
    /// Construct a login command.
    ///
    /// # Arguments
    /// * `email` - Raw email; not validated so malformed input fails like an unknown account
    /// * `password` - Plaintext password
    /// * `expires_in_seconds` - Optional requested access token lifetime
    ///
    /// # Errors
    /// * `InvalidTtl` - Requested lifetime is zero or negative
    pub fn new(
        email: String,
        password: String,
        expires_in_seconds: Option<i64>,
    ) -> Result<Self, SessionError> {
        let access_token_ttl = match expires_in_seconds {
            Some(seconds) if seconds <= 0 => return Err(SessionError::InvalidTtl(seconds)),
            // Out of chrono's range; the policy clamps it.
            Some(seconds) => Some(Duration::try_seconds(seconds).unwrap_or(Duration::MAX)),
            None => None,
        };

        Ok(Self {
            email,
            password,
            access_token_ttl,
        })
    }
}

/// Tokens handed out by a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refresh_token(expires_at: DateTime<Utc>, revoked_at: Option<DateTime<Utc>>) -> RefreshToken {
        let now = Utc::now();
        RefreshToken {
            token: "abc".to_string(),
            user_id: UserId::new(),
            expires_at,
            revoked_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_usable_token() {
        let now = Utc::now();
        let token = refresh_token(now + Duration::days(1), None);
        assert!(token.ensure_usable(now).is_ok());
    }

    #[test]
    fn test_revoked_wins_over_future_expiry() {
        let now = Utc::now();
        let token = refresh_token(now + Duration::days(1), Some(now));
        assert!(matches!(
            token.ensure_usable(now),
            Err(SessionError::RefreshTokenRevoked)
        ));
    }

    #[test]
    fn test_expired_token() {
        let now = Utc::now();
        let token = refresh_token(now, None);
        assert!(matches!(
            token.ensure_usable(now),
            Err(SessionError::RefreshTokenExpired)
        ));
    }

    #[test]
    fn test_login_command_rejects_non_positive_ttl() {
        let result = LoginCommand::new("a@x.com".to_string(), "pw".to_string(), Some(0));
        assert!(matches!(result, Err(SessionError::InvalidTtl(0))));

        let result = LoginCommand::new("a@x.com".to_string(), "pw".to_string(), Some(-10));
        assert!(matches!(result, Err(SessionError::InvalidTtl(-10))));
    }

    #[test]
    fn test_login_command_accepts_huge_ttl() {
        let command =
            LoginCommand::new("a@x.com".to_string(), "pw".to_string(), Some(i64::MAX)).unwrap();

        assert_eq!(
            SessionPolicy::default().access_token_ttl_for(command.access_token_ttl),
            Duration::minutes(15)
        );
    }

    #[test]
    fn test_policy_clamps_requested_ttl() {
        let policy = SessionPolicy::default();

        assert_eq!(policy.access_token_ttl_for(None), Duration::minutes(15));
        assert_eq!(
            policy.access_token_ttl_for(Some(Duration::seconds(60))),
            Duration::seconds(60)
        );
        assert_eq!(
            policy.access_token_ttl_for(Some(Duration::days(365))),
            Duration::minutes(15)
        );
    }
}
