use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::group::errors::GroupError;
use crate::domain::group::models::Group;
use crate::domain::group::ports::GroupRepository;

pub struct PostgresGroupRepository {
    pool: PgPool,
}

impl PostgresGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn create(&self, group: Group) -> Result<Group, GroupError> {
        sqlx::query(
            r#"
            INSERT INTO groups (id, name, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(group.id.0)
        .bind(group.name.as_str())
        .bind(group.author_id.0)
        .bind(group.created_at)
        .bind(group.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return GroupError::AuthorNotFound(group.author_id.to_string());
                }
            }
            GroupError::DatabaseError(e.to_string())
        })?;

        Ok(group)
    }
}
