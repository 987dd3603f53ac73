use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Registered claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer label
    pub iss: String,

    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token identifier, unique per issuance
    pub jti: String,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` from `issued_at`.
    ///
    /// Timestamps are truncated to whole seconds, so `exp - iat` equals
    /// `ttl.num_seconds()`.
    pub fn new(
        issuer: impl Into<String>,
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
        jti: String,
    ) -> Self {
        let iat = issued_at.timestamp();

        Self {
            iss: issuer.into(),
            sub: subject.to_string(),
            iat,
            exp: iat + ttl.num_seconds(),
            jti,
        }
    }

    /// Check if token is expired.
    ///
    /// A token is usable strictly before `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
