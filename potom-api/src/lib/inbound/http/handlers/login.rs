use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::LoginSession;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = LoginCommand::new(body.email, body.password, body.expires_in_seconds)?;

    state
        .session_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
    #[serde(default)]
    expires_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub id: String,
    pub email: String,
    pub token: String,
    pub refresh_token: String,
}

impl From<LoginSession> for LoginResponseData {
    fn from(session: LoginSession) -> Self {
        Self {
            id: session.user_id.to_string(),
            email: session.email.as_str().to_string(),
            token: session.access_token,
            refresh_token: session.refresh_token,
        }
    }
}
