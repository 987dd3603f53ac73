use std::str::FromStr;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issuer label used when none is configured.
pub const DEFAULT_ISSUER: &str = "potom";

const TOKEN_ID_BYTES: usize = 16;

/// Access token codec.
///
/// Issues and validates stateless HS256 tokens carrying a user identity in
/// the `sub` claim. Validation needs only the shared secret, never a store.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 and the default issuer
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Replace the issuer label written into and required from tokens.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Issue a signed token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `InvalidTtl` - `ttl` is shorter than one second
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &impl ToString, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a signed token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: &impl ToString,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        if ttl.num_seconds() < 1 {
            return Err(JwtError::InvalidTtl(ttl.num_seconds()));
        }

        let claims = Claims::new(
            self.issuer.clone(),
            subject.to_string(),
            now,
            ttl,
            token_id()?,
        );

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this handler's secret
    /// * `Expired` - Token expiry has passed
    /// * `MalformedClaims` - Token is not a JWT, uses another algorithm or
    ///   issuer, or lacks required claims
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now` so it can be simulated.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::MalformedClaims(e.to_string()),
            })?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    /// Validate a token and parse its subject.
    ///
    /// # Errors
    /// Any `validate` error, or `MalformedClaims` if the subject does not parse as `T`
    pub fn validate_subject<T: FromStr>(&self, token: &str) -> Result<T, JwtError> {
        let claims = self.validate(token)?;

        claims
            .sub
            .parse::<T>()
            .map_err(|_| JwtError::MalformedClaims(format!("Unparseable subject: {}", claims.sub)))
    }
}

fn token_id() -> Result<String, JwtError> {
    let mut bytes = [0u8; TOKEN_ID_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| JwtError::EncodingFailed(format!("Entropy source failed: {}", e)))?;

    Ok(hex::encode(bytes))
}
