use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::models::CreateGroupCommand;
use crate::domain::group::models::Group;
use crate::domain::user::models::UserId;

/// Port for group domain service operations.
#[async_trait]
pub trait GroupServicePort: Send + Sync + 'static {
    /// Create a group authored by `author_id`.
    ///
    /// # Arguments
    /// * `command` - Validated group fields
    /// * `author_id` - Authenticated acting user
    ///
    /// # Errors
    /// * `AuthorNotFound` - Author no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn create_group(
        &self,
        command: CreateGroupCommand,
        author_id: UserId,
    ) -> Result<Group, GroupError>;
}

/// Persistence operations for group aggregate.
#[async_trait]
pub trait GroupRepository: Send + Sync + 'static {
    /// Persist a new group.
    ///
    /// # Errors
    /// * `AuthorNotFound` - Author reference is dangling
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, group: Group) -> Result<Group, GroupError>;
}
