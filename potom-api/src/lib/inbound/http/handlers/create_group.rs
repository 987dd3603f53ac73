use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::group::models::CreateGroupCommand;
use crate::domain::group::models::Group;
use crate::domain::group::models::GroupName;
use crate::group::errors::GroupError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_group(
    State(state): State<AppState>,
    Extension(acting): Extension<AuthenticatedUser>,
    Json(body): Json<CreateGroupRequest>,
) -> Result<ApiSuccess<GroupResponseData>, ApiError> {
    let command = CreateGroupCommand {
        name: GroupName::new(body.name).map_err(GroupError::from)?,
    };

    state
        .group_service
        .create_group(command, acting.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref group| ApiSuccess::new(StatusCode::CREATED, group.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateGroupRequest {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResponseData {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Group> for GroupResponseData {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.as_str().to_string(),
            author_id: group.author_id.to_string(),
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}
