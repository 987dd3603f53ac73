use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::group::errors::GroupError;
use crate::domain::group::models::CreateGroupCommand;
use crate::domain::group::models::Group;
use crate::domain::group::models::GroupId;
use crate::domain::group::ports::GroupRepository;
use crate::domain::group::ports::GroupServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for group operations.
pub struct GroupService<GR>
where
    GR: GroupRepository,
{
    repository: Arc<GR>,
}

impl<GR> GroupService<GR>
where
    GR: GroupRepository,
{
    pub fn new(repository: Arc<GR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<GR> GroupServicePort for GroupService<GR>
where
    GR: GroupRepository,
{
    async fn create_group(
        &self,
        command: CreateGroupCommand,
        author_id: UserId,
    ) -> Result<Group, GroupError> {
        let now = Utc::now();
        let group = Group {
            id: GroupId::new(),
            name: command.name,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(group).await?;
        tracing::info!(group_id = %created.id, author_id = %created.author_id, "Group created");

        Ok(created)
    }
}
