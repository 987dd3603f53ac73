//! Authentication core
//!
//! Provides the building blocks for session authentication:
//! - Password hashing (Argon2id, adjustable cost)
//! - Signed, stateless access tokens (HS256 JWT)
//! - Opaque refresh token generation
//! - Bearer credential extraction from `Authorization` headers
//!
//! Persistence of refresh tokens and the login/refresh/revoke flows belong to
//! the service using this crate.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue(&"user123", Duration::minutes(15)).unwrap();
//! let claims = handler.validate(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Bearer Credentials
//! ```
//! use auth::extract_bearer;
//!
//! assert_eq!(extract_bearer(Some("Bearer abc123")), Ok("abc123"));
//! assert!(extract_bearer(Some("Basic abc123")).is_err());
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;
pub mod refresh;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::extract_bearer;
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use refresh::RefreshTokenError;
pub use refresh::RefreshTokenGenerator;
