use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::config::ScoringConfig;
use crate::core::error::{AppError, Result};
use crate::features::activity_logs::models::NewActivity;
use crate::features::activity_logs::ActivityLogService;
use crate::features::diagnostics::dtos::ScorecardDto;
use crate::features::diagnostics::engine::{evaluate, IndicatorDraft, ScoredAnswer};
use crate::features::indicators::models::{Indicator, INDICATOR_COLUMNS};
use crate::features::questionnaires::models::distinct_categories;

/// Persists indicator recalculations.
///
/// A recalculation replaces every indicator of a diagnostic and updates its
/// overall score. Concurrent recalculations of one diagnostic are serialized
/// by a row lock on the diagnostic.
pub struct IndicatorEngine {
    pool: PgPool,
    config: ScoringConfig,
}

impl IndicatorEngine {
    pub fn new(pool: PgPool, config: ScoringConfig) -> Self {
        Self { pool, config }
    }

    /// Recalculate in a transaction of its own
    pub async fn recalculate(&self, diagnostic_id: Uuid, user_id: Option<Uuid>) -> Result<ScorecardDto> {
        let mut tx = self.pool.begin().await?;

        let scorecard = self.recalculate_in(&mut *tx, diagnostic_id).await?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(user_id, "Indicators recalculated")
                .with_details(format!("Diagnostic ID: {}", diagnostic_id)),
        )
        .await?;

        tx.commit().await?;

        Ok(scorecard)
    }

    /// Recalculate inside the caller's transaction.
    ///
    /// Nothing is committed here; the caller decides.
    pub async fn recalculate_in(
        &self,
        conn: &mut PgConnection,
        diagnostic_id: Uuid,
    ) -> Result<ScorecardDto> {
        let locked: Option<(Uuid, Option<f64>)> = sqlx::query_as(
            "SELECT questionnaire_id, overall_score FROM diagnostics WHERE id = $1 FOR UPDATE",
        )
        .bind(diagnostic_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock diagnostic {}: {:?}", diagnostic_id, e);
            AppError::Database(e)
        })?;

        let (questionnaire_id, previous_score) = locked
            .ok_or_else(|| AppError::NotFound(format!("Diagnostic {} not found", diagnostic_id)))?;

        sqlx::query("DELETE FROM indicators WHERE diagnostic_id = $1")
            .bind(diagnostic_id)
            .execute(&mut *conn)
            .await?;

        let labels: Vec<String> = sqlx::query_scalar(
            "SELECT category FROM questions WHERE questionnaire_id = $1 ORDER BY display_order, id",
        )
        .bind(questionnaire_id)
        .fetch_all(&mut *conn)
        .await?;
        let categories = distinct_categories(&labels);

        let answers: Vec<ScoredAnswer> = sqlx::query_as::<_, (String, Option<i32>)>(
            r#"
            SELECT q.category, a.numeric_value
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE a.diagnostic_id = $1
            "#,
        )
        .bind(diagnostic_id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|(category, numeric_value)| ScoredAnswer::new(category, numeric_value))
        .collect();

        let scorecard = evaluate(&categories, &answers);
        let overall_score = stored_score(previous_score, scorecard.overall_score, self.config);

        if overall_score != previous_score {
            sqlx::query("UPDATE diagnostics SET overall_score = $2, updated_at = NOW() WHERE id = $1")
                .bind(diagnostic_id)
                .bind(overall_score)
                .execute(&mut *conn)
                .await?;
        }

        let mut indicators = Vec::with_capacity(scorecard.indicators.len());
        for (position, draft) in scorecard.indicators.iter().enumerate() {
            let indicator = Self::insert_indicator(&mut *conn, diagnostic_id, position, draft).await?;
            indicators.push(indicator.into());
        }

        tracing::info!(
            diagnostic_id = %diagnostic_id,
            answers = answers.len(),
            indicators = indicators.len(),
            overall_score = ?overall_score,
            "Indicators recalculated"
        );

        Ok(ScorecardDto {
            diagnostic_id,
            overall_score,
            indicators,
        })
    }

    async fn insert_indicator(
        conn: &mut PgConnection,
        diagnostic_id: Uuid,
        position: usize,
        draft: &IndicatorDraft,
    ) -> Result<Indicator> {
        let position = i32::try_from(position)
            .map_err(|_| AppError::Internal("Too many indicators".to_string()))?;

        sqlx::query_as::<_, Indicator>(&format!(
            r#"
            INSERT INTO indicators (diagnostic_id, name, category, value, level, description, recommendation, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            INDICATOR_COLUMNS
        ))
        .bind(diagnostic_id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.value)
        .bind(draft.level)
        .bind(&draft.description)
        .bind(&draft.recommendation)
        .bind(position)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to store indicator '{}' for diagnostic {}: {:?}",
                draft.name,
                diagnostic_id,
                e
            );
            AppError::Database(e)
        })
    }
}

/// Score to persist after a recalculation.
///
/// Without numeric answers the previous score is kept unless the engine is
/// configured to clear it.
fn stored_score(previous: Option<f64>, computed: Option<f64>, config: ScoringConfig) -> Option<f64> {
    match computed {
        Some(score) => Some(score),
        None if config.clear_score_when_empty => None,
        None => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEEP: ScoringConfig = ScoringConfig {
        clear_score_when_empty: false,
    };
    const CLEAR: ScoringConfig = ScoringConfig {
        clear_score_when_empty: true,
    };

    #[test]
    fn test_computed_score_replaces_previous() {
        assert_eq!(stored_score(Some(2.5), Some(4.0), KEEP), Some(4.0));
        assert_eq!(stored_score(None, Some(1.0), CLEAR), Some(1.0));
    }

    #[test]
    fn test_empty_recalculation_keeps_score_by_default() {
        assert_eq!(stored_score(Some(3.2), None, KEEP), Some(3.2));
        assert_eq!(stored_score(None, None, KEEP), None);
    }

    #[test]
    fn test_empty_recalculation_clears_when_configured() {
        assert_eq!(stored_score(Some(3.2), None, CLEAR), None);
    }
}
