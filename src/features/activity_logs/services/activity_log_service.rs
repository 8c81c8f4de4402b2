use sqlx::{PgExecutor, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::activity_logs::dtos::{ActivityLogFilter, ActivityLogResponseDto};
use crate::features::activity_logs::models::{ActivityLog, NewActivity};
use crate::shared::types::PaginationQuery;

/// Service for the activity trail
pub struct ActivityLogService {
    pool: PgPool,
}

impl ActivityLogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an entry using any executor, so callers can log inside their
    /// own transaction.
    pub async fn record<'e, E>(executor: E, entry: NewActivity) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO activity_logs (user_id, action, details)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(&entry.details)
        .execute(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record activity '{}': {:?}", entry.action, e);
            AppError::Database(e)
        })?;

        tracing::debug!(user_id = ?entry.user_id, action = %entry.action, "Activity recorded");
        Ok(())
    }

    /// List entries, newest first
    pub async fn list(
        &self,
        filter: &ActivityLogFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ActivityLogResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM activity_logs
            WHERE ($1::uuid IS NULL OR user_id = $1)
            "#,
        )
        .bind(filter.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count activity logs: {:?}", e);
            AppError::Database(e)
        })?;

        let logs: Vec<ActivityLog> = sqlx::query_as(
            r#"
            SELECT id, user_id, action, details, created_at
            FROM activity_logs
            WHERE ($1::uuid IS NULL OR user_id = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filter.user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list activity logs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((logs.into_iter().map(Into::into).collect(), total))
    }
}
