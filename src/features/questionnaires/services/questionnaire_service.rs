use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity_logs::models::NewActivity;
use crate::features::activity_logs::ActivityLogService;
use crate::features::questionnaires::dtos::{
    CreateQuestionDto, CreateQuestionnaireDto, QuestionResponseDto, QuestionnaireDetailDto,
    QuestionnaireFilter, QuestionnaireResponseDto, UpdateQuestionDto, UpdateQuestionnaireDto,
};
use crate::features::questionnaires::models::{
    distinct_categories, Question, QuestionType, Questionnaire,
};
use crate::shared::types::{like_pattern, PaginationQuery};

const QUESTIONNAIRE_SELECT: &str = r#"
    SELECT q.id, q.title, q.description, q.is_active, q.created_by, q.created_at, q.updated_at,
           (SELECT COUNT(*) FROM questions WHERE questionnaire_id = q.id) AS question_count
    FROM questionnaires q
"#;

const QUESTION_COLUMNS: &str = "id, questionnaire_id, text, question_type, category, display_order";

/// Service for the questionnaire catalog
pub struct QuestionnaireService {
    pool: PgPool,
}

impl QuestionnaireService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a questionnaire together with its initial questions
    pub async fn create(&self, dto: CreateQuestionnaireDto) -> Result<QuestionnaireDetailDto> {
        let mut tx = self.pool.begin().await?;

        let questionnaire_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO questionnaires (title, description, is_active, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.title.trim())
        .bind(&dto.description)
        .bind(dto.is_active)
        .bind(dto.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create questionnaire: {:?}", e);
            AppError::from_db(e)
        })?;

        for question in &dto.questions {
            Self::insert_question(&mut *tx, questionnaire_id, question).await?;
        }

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(
                dto.created_by,
                format!("Questionnaire created: {}", dto.title.trim()),
            )
            .with_details(format!("Questionnaire ID: {}", questionnaire_id)),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Questionnaire created: id={}, questions={}",
            questionnaire_id,
            dto.questions.len()
        );

        self.get_detail(questionnaire_id).await
    }

    /// List questionnaires, newest first
    pub async fn list(
        &self,
        filter: &QuestionnaireFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<QuestionnaireResponseDto>, i64)> {
        let search = filter.search.as_deref().map(like_pattern);
        let where_clause = r#"
            WHERE ($1::text IS NULL OR q.title ILIKE $1 OR q.description ILIKE $1)
              AND ($2::boolean IS NULL OR q.is_active = $2)
        "#;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM questionnaires q {}",
            where_clause
        ))
        .bind(&search)
        .bind(filter.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let questionnaires: Vec<Questionnaire> = sqlx::query_as(&format!(
            "{} {} ORDER BY q.created_at DESC LIMIT $3 OFFSET $4",
            QUESTIONNAIRE_SELECT, where_clause
        ))
        .bind(&search)
        .bind(filter.is_active)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questionnaires: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((questionnaires.into_iter().map(Into::into).collect(), total))
    }

    /// Questionnaire with its questions ordered for presentation
    pub async fn get_detail(&self, id: Uuid) -> Result<QuestionnaireDetailDto> {
        let questionnaire = self.find(id).await?;

        let questions: Vec<Question> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE questionnaire_id = $1 ORDER BY display_order, id",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load questions for questionnaire {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let categories = distinct_categories(questions.iter().map(|q| q.category.as_str()));

        Ok(QuestionnaireDetailDto {
            questionnaire: questionnaire.into(),
            questions: questions.into_iter().map(Into::into).collect(),
            categories,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateQuestionnaireDto,
    ) -> Result<QuestionnaireResponseDto> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE questionnaires
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(dto.title.as_deref().map(str::trim))
        .bind(&dto.description)
        .bind(dto.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update questionnaire {}: {:?}", id, e);
            AppError::from_db(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!("Questionnaire {} not found", id)));
        }

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(dto.user_id, "Questionnaire updated")
                .with_details(format!("Questionnaire ID: {}", id)),
        )
        .await?;

        tx.commit().await?;

        let questionnaire = self.find(id).await?;
        Ok(questionnaire.into())
    }

    /// Delete a questionnaire; questions, diagnostics, answers and indicators cascade
    pub async fn delete(&self, id: Uuid, user_id: Option<Uuid>) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let title: Option<String> =
            sqlx::query_scalar("DELETE FROM questionnaires WHERE id = $1 RETURNING title")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete questionnaire {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        let title =
            title.ok_or_else(|| AppError::NotFound(format!("Questionnaire {} not found", id)))?;

        ActivityLogService::record(
            &mut *tx,
            NewActivity::new(user_id, format!("Questionnaire deleted: {}", title))
                .with_details(format!("ID: {}", id)),
        )
        .await?;

        tx.commit().await?;

        tracing::info!("Questionnaire deleted: id={}", id);
        Ok(())
    }

    // =========================================================================
    // QUESTIONS
    // =========================================================================

    pub async fn add_question(
        &self,
        questionnaire_id: Uuid,
        dto: CreateQuestionDto,
    ) -> Result<QuestionResponseDto> {
        // Surface a 404 rather than a foreign key error
        self.find(questionnaire_id).await?;

        let question = Self::insert_question(&self.pool, questionnaire_id, &dto).await?;
        Self::touch(&self.pool, questionnaire_id).await?;

        tracing::info!(
            "Question added: id={}, questionnaire_id={}, category={}",
            question.id,
            questionnaire_id,
            question.category
        );

        Ok(question.into())
    }

    /// Update a question; the type of an answered question cannot change
    pub async fn update_question(
        &self,
        questionnaire_id: Uuid,
        question_id: Uuid,
        dto: UpdateQuestionDto,
    ) -> Result<QuestionResponseDto> {
        let mut tx = self.pool.begin().await?;

        let current: Option<QuestionType> = sqlx::query_scalar(
            "SELECT question_type FROM questions WHERE id = $1 AND questionnaire_id = $2 FOR UPDATE",
        )
        .bind(question_id)
        .bind(questionnaire_id)
        .fetch_optional(&mut *tx)
        .await?;

        let current = current.ok_or_else(|| {
            AppError::NotFound(format!(
                "Question {} not found in questionnaire {}",
                question_id, questionnaire_id
            ))
        })?;

        if dto.question_type.is_some_and(|t| t != current) {
            let answered: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM answers WHERE question_id = $1)")
                    .bind(question_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if answered {
                return Err(AppError::Conflict(
                    "The question type cannot be changed once answers have been recorded"
                        .to_string(),
                ));
            }
        }

        let question: Question = sqlx::query_as(&format!(
            r#"
            UPDATE questions
            SET text = COALESCE($3, text),
                question_type = COALESCE($4, question_type),
                category = COALESCE($5, category),
                display_order = COALESCE($6, display_order)
            WHERE id = $1 AND questionnaire_id = $2
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        ))
        .bind(question_id)
        .bind(questionnaire_id)
        .bind(dto.text.as_deref().map(str::trim))
        .bind(dto.question_type)
        .bind(&dto.category)
        .bind(dto.display_order)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update question {}: {:?}", question_id, e);
            AppError::from_db(e)
        })?;

        Self::touch(&mut *tx, questionnaire_id).await?;
        tx.commit().await?;

        Ok(question.into())
    }

    pub async fn delete_question(&self, questionnaire_id: Uuid, question_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1 AND questionnaire_id = $2")
            .bind(question_id)
            .bind(questionnaire_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", question_id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Question {} not found in questionnaire {}",
                question_id, questionnaire_id
            )));
        }
        Self::touch(&self.pool, questionnaire_id).await?;

        Ok(())
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    async fn find(&self, id: Uuid) -> Result<Questionnaire> {
        let questionnaire: Option<Questionnaire> =
            sqlx::query_as(&format!("{} WHERE q.id = $1", QUESTIONNAIRE_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get questionnaire {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        questionnaire.ok_or_else(|| AppError::NotFound(format!("Questionnaire {} not found", id)))
    }

    async fn insert_question<'e, E>(
        executor: E,
        questionnaire_id: Uuid,
        dto: &CreateQuestionDto,
    ) -> Result<Question>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            r#"
            INSERT INTO questions (questionnaire_id, text, question_type, category, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        ))
        .bind(questionnaire_id)
        .bind(dto.text.trim())
        .bind(dto.question_type)
        .bind(&dto.category)
        .bind(dto.display_order)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::from_db(e)
        })
    }

    async fn touch<'e, E>(executor: E, id: Uuid) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query("UPDATE questionnaires SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
