use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::authorization_header;
use crate::inbound::http::router::AppState;

/// Exchange the refresh token in the `Authorization` header for a new
/// access token.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let token = state
        .session_service
        .refresh(authorization_header(&headers)?)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, RefreshResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub token: String,
}
