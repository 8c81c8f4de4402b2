use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::diagnostics::dtos::AnswerResponseDto;
use crate::features::indicators::dtos::IndicatorResponseDto;

/// Request DTO for starting a diagnostic
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDiagnosticDto {
    pub department_id: Uuid,

    /// User conducting the evaluation
    pub responsible_user_id: Uuid,

    /// Must reference an active questionnaire
    pub questionnaire_id: Uuid,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// Request DTO for updating a diagnostic; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDiagnosticDto {
    pub department_id: Option<Uuid>,

    pub responsible_user_id: Option<Uuid>,

    /// Only allowed while the diagnostic has no answers
    pub questionnaire_id: Option<Uuid>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    /// User performing the change, recorded in the activity log
    pub user_id: Option<Uuid>,
}

/// Filters for listing diagnostics
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DiagnosticFilter {
    /// Case-insensitive match on department name or questionnaire title
    pub search: Option<String>,

    pub department_id: Option<Uuid>,
}

/// Response DTO for diagnostic
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticResponseDto {
    pub id: Uuid,
    pub department_id: Uuid,
    pub department_name: String,
    pub responsible_user_id: Uuid,
    pub questionnaire_id: Uuid,
    pub questionnaire_title: String,
    /// Mean of all numeric answers; null until the first scored answer
    pub overall_score: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Diagnostic with its answers and current indicators
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticDetailDto {
    pub diagnostic: DiagnosticResponseDto,
    pub answers: Vec<AnswerResponseDto>,
    pub indicators: Vec<IndicatorResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_length_is_bounded() {
        let dto = CreateDiagnosticDto {
            department_id: Uuid::new_v4(),
            responsible_user_id: Uuid::new_v4(),
            questionnaire_id: Uuid::new_v4(),
            notes: Some("x".repeat(2001)),
        };
        assert!(dto.validate().is_err());

        let dto = CreateDiagnosticDto {
            notes: Some("First evaluation of the library".to_string()),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
