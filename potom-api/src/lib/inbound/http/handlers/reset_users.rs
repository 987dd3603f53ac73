use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::config::Platform;
use crate::inbound::http::router::AppState;

/// Wipe every user. Only available on the dev platform.
pub async fn reset_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<&'static str>, ApiError> {
    if state.platform != Platform::Dev {
        return Err(ApiError::MethodNotAllowed(
            "Reset is only available on the dev platform".to_string(),
        ));
    }

    state.user_service.delete_all_users().await?;

    Ok(ApiSuccess::new(StatusCode::OK, "All users deleted"))
}
