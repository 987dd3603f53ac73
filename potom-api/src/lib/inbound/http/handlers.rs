use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::group::errors::GroupError;
use crate::domain::session::errors::SessionError;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_group;
pub mod create_user;
pub mod get_user;
pub mod healthz;
pub mod list_users;
pub mod login;
pub mod metrics;
pub mod refresh;
pub mod reset_users;
pub mod revoke;
pub mod update_user;

pub const INVALID_CREDENTIALS: &str = "Incorrect email or password";
pub const INVALID_TOKEN: &str = "Invalid or expired token";
pub const FORBIDDEN: &str = "Forbidden";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Caller-visible error. Messages for internal kinds are generic; the
/// detail is logged where the domain error is converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    MethodNotAllowed(String),
}

impl ApiError {
    fn internal() -> Self {
        ApiError::InternalServerError(INTERNAL_ERROR.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<GroupError> for ApiError {
    fn from(err: GroupError) -> Self {
        match err {
            GroupError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            GroupError::AuthorNotFound(_) => ApiError::NotFound(err.to_string()),
            GroupError::DatabaseError(_) => {
                tracing::error!(error = %err, "Group operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => {
                tracing::warn!("Login rejected");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            SessionError::Password(_) => {
                tracing::error!(error = %err, "Stored password hash could not be verified");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            SessionError::InvalidTtl(_) => ApiError::UnprocessableEntity(err.to_string()),
            SessionError::Bearer(_)
            | SessionError::AccessToken(_)
            | SessionError::RefreshTokenNotFound
            | SessionError::RefreshTokenRevoked
            | SessionError::RefreshTokenExpired
            | SessionError::UserNotFound(_) => {
                tracing::warn!(reason = %err, "Credential rejected");
                ApiError::Unauthorized(INVALID_TOKEN.to_string())
            }
            SessionError::Forbidden { .. } => {
                tracing::warn!(reason = %err, "Ownership check failed");
                ApiError::Forbidden(FORBIDDEN.to_string())
            }
            SessionError::TokenIssuance(_)
            | SessionError::Entropy(_)
            | SessionError::DatabaseError(_)
            | SessionError::Unknown(_) => {
                tracing::error!(error = %err, "Session operation failed");
                ApiError::internal()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Public view of a user. The password hash never leaves the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
