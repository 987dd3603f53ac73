use auth::BearerError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::session::errors::SessionError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the access token and adds the acting user to
/// request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = state
        .session_service
        .authenticate(authorization_header(req.headers())?)?;

    tracing::debug!(user_id = %user_id, "Access token accepted");
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Raw `Authorization` header value. A value that is not visible ASCII
/// counts as malformed.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    headers
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| SessionError::Bearer(BearerError::MalformedHeader))
        })
        .transpose()
}
