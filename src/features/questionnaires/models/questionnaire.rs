use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::questionnaires::dtos::QuestionnaireResponseDto;

/// Database model for questionnaire, with its question count
#[derive(Debug, Clone, FromRow)]
pub struct Questionnaire {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub question_count: i64,
}

impl From<Questionnaire> for QuestionnaireResponseDto {
    fn from(q: Questionnaire) -> Self {
        Self {
            id: q.id,
            title: q.title,
            description: q.description,
            is_active: q.is_active,
            created_by: q.created_by,
            question_count: q.question_count,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}
