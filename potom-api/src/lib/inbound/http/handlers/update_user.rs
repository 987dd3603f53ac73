use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::session::service::authorize_owner;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateUserCommand {
            email,
            password: self.password,
        })
    }
}

/// Users may only update themselves.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(acting): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    authorize_owner(&acting.user_id, &user_id)?;

    let command = req.try_into_command()?;
    state.user_service.update_user(&user_id, command).await?;

    Ok(StatusCode::NO_CONTENT)
}
