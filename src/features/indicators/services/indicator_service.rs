use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::indicators::dtos::{IndicatorDetailDto, IndicatorFilter};
use crate::features::indicators::models::IndicatorWithContext;
use crate::shared::types::{like_pattern, PaginationQuery};

const INDICATOR_CONTEXT_SELECT: &str = r#"
    SELECT i.id, i.diagnostic_id, i.name, i.category, i.value, i.level,
           i.description, i.recommendation, i.created_at,
           d.department_id, dep.name AS department_name, qn.title AS questionnaire_title
    FROM indicators i
    JOIN diagnostics d ON d.id = i.diagnostic_id
    JOIN departments dep ON dep.id = d.department_id
    JOIN questionnaires qn ON qn.id = d.questionnaire_id
"#;

/// Read-only queries over indicators
pub struct IndicatorService {
    pool: PgPool,
}

impl IndicatorService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List indicators, newest diagnostics first
    pub async fn list(
        &self,
        filter: &IndicatorFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<IndicatorDetailDto>, i64)> {
        let search = filter.search.as_deref().map(like_pattern);
        let where_clause = r#"
            WHERE ($1::text IS NULL OR i.name ILIKE $1 OR dep.name ILIKE $1)
              AND ($2::uuid IS NULL OR d.department_id = $2)
        "#;

        let total: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*)
            FROM indicators i
            JOIN diagnostics d ON d.id = i.diagnostic_id
            JOIN departments dep ON dep.id = d.department_id
            {}
            "#,
            where_clause
        ))
        .bind(&search)
        .bind(filter.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let rows: Vec<IndicatorWithContext> = sqlx::query_as(&format!(
            "{} {} ORDER BY d.created_at DESC, i.position LIMIT $3 OFFSET $4",
            INDICATOR_CONTEXT_SELECT, where_clause
        ))
        .bind(&search)
        .bind(filter.department_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list indicators: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<IndicatorDetailDto> {
        let row: Option<IndicatorWithContext> =
            sqlx::query_as(&format!("{} WHERE i.id = $1", INDICATOR_CONTEXT_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get indicator {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        row.map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Indicator {} not found", id)))
    }
}
