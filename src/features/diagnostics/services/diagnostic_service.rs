use std::collections::HashMap;
use std::sync::Arc;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity_logs::models::NewActivity;
use crate::features::activity_logs::ActivityLogService;
use crate::features::diagnostics::dtos::{
    AnswerResponseDto, CreateDiagnosticDto, DiagnosticDetailDto, DiagnosticFilter,
    DiagnosticResponseDto, ScorecardDto, SubmitAnswersDto, UpdateDiagnosticDto,
};
use crate::features::diagnostics::models::{
    check_batch, normalize_text, validate_answer, AnswerRow, Diagnostic,
};
use crate::features::diagnostics::services::IndicatorEngine;
use crate::features::indicators::dtos::IndicatorResponseDto;
use crate::features::indicators::models::{Indicator, INDICATOR_COLUMNS};
use crate::features::questionnaires::models::QuestionType;
use crate::shared::types::{like_pattern, PaginationQuery};

const DIAGNOSTIC_SELECT: &str = r#"
    SELECT d.id, d.department_id, dep.name AS department_name, d.responsible_user_id,
           d.questionnaire_id, qn.title AS questionnaire_title, d.overall_score, d.notes,
           d.created_at, d.updated_at
    FROM diagnostics d
    JOIN departments dep ON dep.id = d.department_id
    JOIN questionnaires qn ON qn.id = d.questionnaire_id
"#;

/// Service for diagnostics and their answers
pub struct DiagnosticService {
    pool: PgPool,
    engine: Arc<IndicatorEngine>,
}

impl DiagnosticService {
    pub fn new(pool: PgPool, engine: Arc<IndicatorEngine>) -> Self {
        Self { pool, engine }
    }

    pub async fn create(&self, dto: CreateDiagnosticDto) -> Result<DiagnosticResponseDto> {
        let mut tx = self.pool.begin().await?;

        let department = Self::department_name(&mut *tx, dto.department_id).await?;
        Self::ensure_active_questionnaire(&mut *tx, dto.questionnaire_id).await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO diagnostics (department_id, responsible_user_id, questionnaire_id, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.department_id)
        .bind(dto.responsible_user_id)
        .bind(dto.questionnaire_id)
        .bind(&dto.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create diagnostic: {:?}", e);
            AppError::from_db(e)
        })?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(
                Some(dto.responsible_user_id),
                format!("Diagnostic started for {}", department),
            )
            .with_details(format!("Diagnostic ID: {}", id)),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Diagnostic created: id={}, department_id={}, questionnaire_id={}",
            id,
            dto.department_id,
            dto.questionnaire_id
        );

        Ok(self.find(id).await?.into())
    }

    /// List diagnostics, newest first
    pub async fn list(
        &self,
        filter: &DiagnosticFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<DiagnosticResponseDto>, i64)> {
        let search = filter.search.as_deref().map(like_pattern);
        let where_clause = r#"
            WHERE ($1::text IS NULL OR dep.name ILIKE $1 OR qn.title ILIKE $1)
              AND ($2::uuid IS NULL OR d.department_id = $2)
        "#;

        let total: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*)
            FROM diagnostics d
            JOIN departments dep ON dep.id = d.department_id
            JOIN questionnaires qn ON qn.id = d.questionnaire_id
            {}
            "#,
            where_clause
        ))
        .bind(&search)
        .bind(filter.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let diagnostics: Vec<Diagnostic> = sqlx::query_as(&format!(
            "{} {} ORDER BY d.created_at DESC LIMIT $3 OFFSET $4",
            DIAGNOSTIC_SELECT, where_clause
        ))
        .bind(&search)
        .bind(filter.department_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list diagnostics: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((diagnostics.into_iter().map(Into::into).collect(), total))
    }

    /// Diagnostic with answers in question order and indicators in category order
    pub async fn get_detail(&self, id: Uuid) -> Result<DiagnosticDetailDto> {
        let (diagnostic, answers, indicators) =
            futures::try_join!(self.find(id), self.answers(id), self.indicators(id))?;

        Ok(DiagnosticDetailDto {
            diagnostic: diagnostic.into(),
            answers,
            indicators,
        })
    }

    pub async fn update(&self, id: Uuid, dto: UpdateDiagnosticDto) -> Result<DiagnosticResponseDto> {
        let mut tx = self.pool.begin().await?;

        let current: Option<Uuid> =
            sqlx::query_scalar("SELECT questionnaire_id FROM diagnostics WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let current =
            current.ok_or_else(|| AppError::NotFound(format!("Diagnostic {} not found", id)))?;

        if let Some(questionnaire_id) = dto.questionnaire_id.filter(|q| *q != current) {
            let answered: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM answers WHERE diagnostic_id = $1")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
            if answered > 0 {
                return Err(AppError::Conflict(
                    "The questionnaire cannot be changed once answers have been recorded"
                        .to_string(),
                ));
            }
            Self::ensure_active_questionnaire(&mut *tx, questionnaire_id).await?;
        }

        if let Some(department_id) = dto.department_id {
            Self::department_name(&mut *tx, department_id).await?;
        }

        sqlx::query(
            r#"
            UPDATE diagnostics
            SET department_id = COALESCE($2, department_id),
                responsible_user_id = COALESCE($3, responsible_user_id),
                questionnaire_id = COALESCE($4, questionnaire_id),
                notes = COALESCE($5, notes),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(dto.department_id)
        .bind(dto.responsible_user_id)
        .bind(dto.questionnaire_id)
        .bind(&dto.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update diagnostic {}: {:?}", id, e);
            AppError::from_db(e)
        })?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(dto.user_id, "Diagnostic updated")
                .with_details(format!("Diagnostic ID: {}", id)),
        )
        .await?;

        tx.commit().await?;

        Ok(self.find(id).await?.into())
    }

    /// Delete a diagnostic; answers and indicators cascade
    pub async fn delete(&self, id: Uuid, user_id: Option<Uuid>) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let deleted: Option<Uuid> =
            sqlx::query_scalar("DELETE FROM diagnostics WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete diagnostic {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        if deleted.is_none() {
            return Err(AppError::NotFound(format!("Diagnostic {} not found", id)));
        }

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(user_id, "Diagnostic deleted").with_details(format!("ID: {}", id)),
        )
        .await?;

        tx.commit().await?;

        tracing::info!("Diagnostic deleted: id={}", id);
        Ok(())
    }

    // =========================================================================
    // ANSWERS
    // =========================================================================

    /// Upsert a batch of answers and recalculate, all in one transaction
    pub async fn submit_answers(&self, id: Uuid, dto: SubmitAnswersDto) -> Result<ScorecardDto> {
        check_batch(&dto.answers)?;

        let mut tx = self.pool.begin().await?;

        let (questionnaire_id, department) = Self::lock_for_answers(&mut *tx, id).await?;

        let question_ids: Vec<Uuid> = dto.answers.iter().map(|a| a.question_id).collect();
        let question_types: HashMap<Uuid, QuestionType> = sqlx::query_as::<_, (Uuid, QuestionType)>(
            "SELECT id, question_type FROM questions WHERE questionnaire_id = $1 AND id = ANY($2)",
        )
        .bind(questionnaire_id)
        .bind(&question_ids)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .collect();

        for answer in &dto.answers {
            let question_type = question_types.get(&answer.question_id).ok_or_else(|| {
                AppError::Validation(format!(
                    "Question {} does not belong to this diagnostic's questionnaire",
                    answer.question_id
                ))
            })?;

            let text_value = normalize_text(answer.text_value.as_deref());
            validate_answer(*question_type, answer.numeric_value, text_value.as_deref()).map_err(
                |reason| {
                    AppError::Validation(format!(
                        "Invalid answer for question {}: {}",
                        answer.question_id, reason
                    ))
                },
            )?;

            sqlx::query(
                r#"
                INSERT INTO answers (diagnostic_id, question_id, numeric_value, text_value)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (diagnostic_id, question_id)
                DO UPDATE SET numeric_value = EXCLUDED.numeric_value,
                              text_value = EXCLUDED.text_value,
                              updated_at = NOW()
                "#,
            )
            .bind(id)
            .bind(answer.question_id)
            .bind(answer.numeric_value)
            .bind(&text_value)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to store answer for question {} on diagnostic {}: {:?}",
                    answer.question_id,
                    id,
                    e
                );
                AppError::from_db(e)
            })?;
        }

        let scorecard = self.engine.recalculate_in(&mut *tx, id).await?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(dto.user_id, "Evaluation completed").with_details(format!(
                "Department: {}, answers: {}",
                department,
                dto.answers.len()
            )),
        )
        .await?;

        tx.commit().await?;

        Ok(scorecard)
    }

    /// Remove one answer and recalculate in the same transaction
    pub async fn delete_answer(
        &self,
        id: Uuid,
        question_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<ScorecardDto> {
        let mut tx = self.pool.begin().await?;

        let (_, department) = Self::lock_for_answers(&mut *tx, id).await?;

        let deleted: Option<Uuid> = sqlx::query_scalar(
            "DELETE FROM answers WHERE diagnostic_id = $1 AND question_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await?;

        if deleted.is_none() {
            return Err(AppError::NotFound(format!(
                "No answer to question {} in diagnostic {}",
                question_id, id
            )));
        }

        let scorecard = self.engine.recalculate_in(&mut *tx, id).await?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(user_id, "Answer removed").with_details(format!(
                "Department: {}, question ID: {}",
                department, question_id
            )),
        )
        .await?;

        tx.commit().await?;

        Ok(scorecard)
    }

    pub async fn recalculate(&self, id: Uuid, user_id: Option<Uuid>) -> Result<ScorecardDto> {
        self.engine.recalculate(id, user_id).await
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    async fn find(&self, id: Uuid) -> Result<Diagnostic> {
        let diagnostic: Option<Diagnostic> =
            sqlx::query_as(&format!("{} WHERE d.id = $1", DIAGNOSTIC_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get diagnostic {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        diagnostic.ok_or_else(|| AppError::NotFound(format!("Diagnostic {} not found", id)))
    }

    async fn answers(&self, id: Uuid) -> Result<Vec<AnswerResponseDto>> {
        let rows: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.question_id, q.text AS question_text, q.question_type, q.category,
                   a.numeric_value, a.text_value, a.updated_at
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE a.diagnostic_id = $1
            ORDER BY q.display_order, q.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn indicators(&self, id: Uuid) -> Result<Vec<IndicatorResponseDto>> {
        let rows: Vec<Indicator> = sqlx::query_as(&format!(
            "SELECT {} FROM indicators WHERE diagnostic_id = $1 ORDER BY position",
            INDICATOR_COLUMNS
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Lock the diagnostic and return its questionnaire and department name
    async fn lock_for_answers(conn: &mut PgConnection, id: Uuid) -> Result<(Uuid, String)> {
        let row: Option<(Uuid, String)> = sqlx::query_as(
            r#"
            SELECT d.questionnaire_id, dep.name
            FROM diagnostics d
            JOIN departments dep ON dep.id = d.department_id
            WHERE d.id = $1
            FOR UPDATE OF d
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        row.ok_or_else(|| AppError::NotFound(format!("Diagnostic {} not found", id)))
    }

    async fn department_name(conn: &mut PgConnection, department_id: Uuid) -> Result<String> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM departments WHERE id = $1")
            .bind(department_id)
            .fetch_optional(conn)
            .await?;

        name.ok_or_else(|| AppError::Validation(format!("Department {} does not exist", department_id)))
    }

    /// Diagnostics can only be started against active questionnaires
    async fn ensure_active_questionnaire(conn: &mut PgConnection, questionnaire_id: Uuid) -> Result<()> {
        let is_active: Option<bool> =
            sqlx::query_scalar("SELECT is_active FROM questionnaires WHERE id = $1")
                .bind(questionnaire_id)
                .fetch_optional(conn)
                .await?;

        match is_active {
            Some(true) => Ok(()),
            Some(false) => Err(AppError::Validation(format!(
                "Questionnaire {} is not active",
                questionnaire_id
            ))),
            None => Err(AppError::Validation(format!(
                "Questionnaire {} does not exist",
                questionnaire_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScoringConfig;
    use crate::features::diagnostics::dtos::AnswerInputDto;
    use crate::shared::test_helpers::{seed_department, seed_questionnaire};

    struct Fixture {
        pool: PgPool,
        service: DiagnosticService,
        diagnostic_id: Uuid,
        /// Processes (scale), Tools (yes/no), People (scale), Barriers (free text)
        questions: Vec<Uuid>,
    }

    async fn fixture(pool: PgPool, config: ScoringConfig) -> Fixture {
        let department_id = seed_department(&pool, "Central Library").await;
        let questionnaire = seed_questionnaire(
            &pool,
            "IT asset inventory",
            &[
                ("Is the asset inventory up to date?", QuestionType::Scale, "Processes"),
                ("Is a ticketing tool in use?", QuestionType::YesNo, "Tools"),
                ("How trained is the staff?", QuestionType::Scale, "People"),
                ("Main barriers", QuestionType::FreeText, "Barriers"),
            ],
        )
        .await;

        let engine = Arc::new(IndicatorEngine::new(pool.clone(), config));
        let service = DiagnosticService::new(pool.clone(), engine);
        let diagnostic = service
            .create(CreateDiagnosticDto {
                department_id,
                responsible_user_id: Uuid::new_v4(),
                questionnaire_id: questionnaire.questionnaire.id,
                notes: None,
            })
            .await
            .unwrap();

        Fixture {
            pool,
            service,
            diagnostic_id: diagnostic.id,
            questions: questionnaire.questions.iter().map(|q| q.id).collect(),
        }
    }

    fn answer(question_id: Uuid, numeric_value: Option<i32>, text_value: Option<&str>) -> AnswerInputDto {
        AnswerInputDto {
            question_id,
            numeric_value,
            text_value: text_value.map(str::to_string),
        }
    }

    fn batch(answers: Vec<AnswerInputDto>) -> SubmitAnswersDto {
        SubmitAnswersDto {
            answers,
            user_id: None,
        }
    }

    impl Fixture {
        async fn submit(&self, answers: Vec<AnswerInputDto>) -> Result<ScorecardDto> {
            self.service.submit_answers(self.diagnostic_id, batch(answers)).await
        }

        async fn full_batch(&self) -> ScorecardDto {
            self.submit(vec![
                answer(self.questions[0], Some(4), None),
                answer(self.questions[1], Some(5), None),
                answer(self.questions[2], Some(1), None),
                answer(self.questions[3], None, Some("No budget for licences")),
            ])
            .await
            .unwrap()
        }

        async fn stored_indicators(&self) -> Vec<(String, f64)> {
            sqlx::query_as(
                "SELECT name, value FROM indicators WHERE diagnostic_id = $1 ORDER BY position",
            )
            .bind(self.diagnostic_id)
            .fetch_all(&self.pool)
            .await
            .unwrap()
        }

        async fn stored_score(&self) -> Option<f64> {
            sqlx::query_scalar("SELECT overall_score FROM diagnostics WHERE id = $1")
                .bind(self.diagnostic_id)
                .fetch_one(&self.pool)
                .await
                .unwrap()
        }

        async fn answer_count(&self) -> i64 {
            sqlx::query_scalar("SELECT COUNT(*) FROM answers WHERE diagnostic_id = $1")
                .bind(self.diagnostic_id)
                .fetch_one(&self.pool)
                .await
                .unwrap()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_submit_persists_score_and_indicators(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;

        let scorecard = fx.full_batch().await;

        let expected = vec![
            ("Level of Processes".to_string(), 4.0),
            ("Level of Tools".to_string(), 5.0),
            ("Level of People".to_string(), 1.0),
        ];
        assert_eq!(fx.stored_indicators().await, expected);
        assert!(approx(fx.stored_score().await.unwrap(), 10.0 / 3.0));
        assert!(approx(scorecard.overall_score.unwrap(), 10.0 / 3.0));
        assert_eq!(scorecard.indicators.len(), 3);
        assert_eq!(fx.answer_count().await, 4);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_resubmission_replaces_answers(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;

        fx.full_batch().await;
        let first = fx.stored_indicators().await;
        fx.full_batch().await;

        assert_eq!(fx.stored_indicators().await, first);
        assert_eq!(fx.answer_count().await, 4);

        fx.submit(vec![answer(fx.questions[2], Some(5), None)])
            .await
            .unwrap();

        assert_eq!(fx.answer_count().await, 4);
        assert_eq!(fx.stored_indicators().await[2], ("Level of People".to_string(), 5.0));
        assert!(approx(fx.stored_score().await.unwrap(), 14.0 / 3.0));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_removing_every_answer_clears_indicators(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;
        fx.full_batch().await;
        assert_eq!(fx.stored_indicators().await.len(), 3);

        for question_id in &fx.questions[..2] {
            fx.service
                .delete_answer(fx.diagnostic_id, *question_id, None)
                .await
                .unwrap();
        }
        assert_eq!(
            fx.stored_indicators().await,
            vec![("Level of People".to_string(), 1.0)]
        );
        assert_eq!(fx.stored_score().await, Some(1.0));

        let scorecard = fx
            .service
            .delete_answer(fx.diagnostic_id, fx.questions[2], None)
            .await
            .unwrap();

        // Only the free-text answer is left
        assert!(scorecard.indicators.is_empty());
        assert!(fx.stored_indicators().await.is_empty());
        assert_eq!(fx.stored_score().await, Some(1.0));
        assert_eq!(scorecard.overall_score, Some(1.0));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_empty_recalculation_clears_score_when_configured(pool: PgPool) {
        let fx = fixture(
            pool,
            ScoringConfig {
                clear_score_when_empty: true,
            },
        )
        .await;
        fx.submit(vec![answer(fx.questions[0], Some(3), None)])
            .await
            .unwrap();
        assert_eq!(fx.stored_score().await, Some(3.0));

        fx.service
            .delete_answer(fx.diagnostic_id, fx.questions[0], None)
            .await
            .unwrap();

        assert_eq!(fx.stored_score().await, None);
        assert!(fx.stored_indicators().await.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_recalculate_is_idempotent(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;
        fx.full_batch().await;
        let before = fx.stored_indicators().await;
        let score = fx.stored_score().await;

        let first = fx.service.recalculate(fx.diagnostic_id, None).await.unwrap();
        let second = fx.service.recalculate(fx.diagnostic_id, None).await.unwrap();

        assert_eq!(fx.stored_indicators().await, before);
        assert_eq!(fx.stored_score().await, score);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.indicators.len(), second.indicators.len());

        let logged: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM activity_logs WHERE action = 'Indicators recalculated'",
        )
        .fetch_one(&fx.pool)
        .await
        .unwrap();
        assert_eq!(logged, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_invalid_answer_rolls_back_batch(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;

        let result = fx
            .submit(vec![
                answer(fx.questions[0], Some(4), None),
                answer(fx.questions[1], Some(3), None),
            ])
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(fx.answer_count().await, 0);
        assert!(fx.stored_indicators().await.is_empty());
        assert_eq!(fx.stored_score().await, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_rejects_question_from_other_questionnaire(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;
        let other = seed_questionnaire(
            &fx.pool,
            "Network audit",
            &[("Is the network segmented?", QuestionType::YesNo, "Network")],
        )
        .await;

        let result = fx
            .submit(vec![answer(other.questions[0].id, Some(5), None)])
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_unanswered_question_is_not_found(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;

        let result = fx
            .service
            .delete_answer(fx.diagnostic_id, fx.questions[0], None)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_questionnaire_is_fixed_once_answered(pool: PgPool) {
        let fx = fixture(pool, ScoringConfig::default()).await;
        let other = seed_questionnaire(
            &fx.pool,
            "Network audit",
            &[("Is the network segmented?", QuestionType::YesNo, "Network")],
        )
        .await;
        fx.full_batch().await;

        let result = fx
            .service
            .update(
                fx.diagnostic_id,
                UpdateDiagnosticDto {
                    questionnaire_id: Some(other.questionnaire.id),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
