use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::indicators::dtos::IndicatorResponseDto;
use crate::features::questionnaires::models::QuestionType;

/// One answer in a submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnswerInputDto {
    pub question_id: Uuid,

    /// 1-5 for scale questions, 1 (no) or 5 (yes) for yes/no questions
    pub numeric_value: Option<i32>,

    /// Only for free-text questions
    #[validate(length(max = 5000, message = "Text answer must be at most 5000 characters"))]
    pub text_value: Option<String>,
}

/// Request DTO for submitting answers
///
/// Existing answers to the same questions are replaced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitAnswersDto {
    #[validate(nested)]
    pub answers: Vec<AnswerInputDto>,

    /// User submitting the answers, recorded in the activity log
    pub user_id: Option<Uuid>,
}

/// Response DTO for a stored answer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponseDto {
    pub id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub category: String,
    pub numeric_value: Option<i32>,
    pub text_value: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a recalculation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScorecardDto {
    pub diagnostic_id: Uuid,
    /// Stored overall score after the recalculation
    pub overall_score: Option<f64>,
    /// One indicator per answered category, in questionnaire order
    pub indicators: Vec<IndicatorResponseDto>,
}
