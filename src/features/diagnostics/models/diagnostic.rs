use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::diagnostics::dtos::DiagnosticResponseDto;

/// Database model for diagnostic, joined with department and questionnaire
#[derive(Debug, Clone, FromRow)]
pub struct Diagnostic {
    pub id: Uuid,
    pub department_id: Uuid,
    pub department_name: String,
    pub responsible_user_id: Uuid,
    pub questionnaire_id: Uuid,
    pub questionnaire_title: String,
    pub overall_score: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Diagnostic> for DiagnosticResponseDto {
    fn from(d: Diagnostic) -> Self {
        Self {
            id: d.id,
            department_id: d.department_id,
            department_name: d.department_name,
            responsible_user_id: d.responsible_user_id,
            questionnaire_id: d.questionnaire_id,
            questionnaire_title: d.questionnaire_title,
            overall_score: d.overall_score,
            notes: d.notes,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}
