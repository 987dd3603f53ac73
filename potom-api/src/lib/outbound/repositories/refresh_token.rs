use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::NewRefreshToken;
use crate::domain::session::models::RefreshToken;
use crate::domain::session::models::RevokeOutcome;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RefreshTokenRow {
    token: String,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshToken {
            token: row.token,
            user_id: UserId(row.user_id),
            expires_at: row.expires_at,
            revoked_at: row.revoked_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn create(&self, token: NewRefreshToken) -> Result<RefreshToken, SessionError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            INSERT INTO refresh_tokens (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, expires_at, revoked_at, created_at, updated_at
            "#,
        )
        .bind(&token.token)
        .bind(token.user_id.0)
        .bind(token.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, SessionError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT token, user_id, expires_at, revoked_at, created_at, updated_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(row.map(RefreshToken::from))
    }

    async fn revoke(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<RevokeOutcome, SessionError> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = $2, updated_at = $2
            WHERE token = $1
            "#,
        )
        .bind(token)
        .bind(revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            Ok(RevokeOutcome::NotFound)
        } else {
            Ok(RevokeOutcome::Revoked)
        }
    }
}
