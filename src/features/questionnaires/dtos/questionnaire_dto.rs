use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::questionnaires::models::QuestionType;
use crate::shared::validation::{CATEGORY_REGEX, NON_BLANK_REGEX};

fn default_true() -> bool {
    true
}

// =============================================================================
// QUESTIONS
// =============================================================================

/// Request DTO for creating a question
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(regex(path = *NON_BLANK_REGEX, message = "Question text must not be blank"))]
    pub text: String,

    pub question_type: QuestionType,

    /// Grouping label; questions with the exact same label share an indicator
    #[validate(
        length(min = 1, max = 100, message = "Category must be 1-100 characters"),
        regex(path = *CATEGORY_REGEX, message = "Category must not start or end with whitespace")
    )]
    pub category: String,

    /// Presentation order within the questionnaire
    #[serde(default)]
    #[validate(range(min = 0, message = "Display order must not be negative"))]
    pub display_order: i32,
}

/// Request DTO for updating a question; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestionDto {
    #[validate(regex(path = *NON_BLANK_REGEX, message = "Question text must not be blank"))]
    pub text: Option<String>,

    pub question_type: Option<QuestionType>,

    #[validate(
        length(min = 1, max = 100, message = "Category must be 1-100 characters"),
        regex(path = *CATEGORY_REGEX, message = "Category must not start or end with whitespace")
    )]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "Display order must not be negative"))]
    pub display_order: Option<i32>,
}

/// Response DTO for question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: Uuid,
    pub questionnaire_id: Uuid,
    pub text: String,
    pub question_type: QuestionType,
    pub category: String,
    pub display_order: i32,
}

// =============================================================================
// QUESTIONNAIRES
// =============================================================================

/// Request DTO for creating a questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionnaireDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        regex(path = *NON_BLANK_REGEX, message = "Title must not be blank")
    )]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// User creating the questionnaire
    pub created_by: Option<Uuid>,

    /// Questions created together with the questionnaire
    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionDto>,
}

/// Request DTO for updating a questionnaire; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestionnaireDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        regex(path = *NON_BLANK_REGEX, message = "Title must not be blank")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    pub is_active: Option<bool>,

    /// User performing the change, recorded in the activity log
    pub user_id: Option<Uuid>,
}

/// Filters for listing questionnaires
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct QuestionnaireFilter {
    /// Case-insensitive match on title or description
    pub search: Option<String>,

    /// Filter by active status (none = all)
    pub is_active: Option<bool>,
}

/// Response DTO for questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Questionnaire with its ordered questions and the category groups they form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireDetailDto {
    pub questionnaire: QuestionnaireResponseDto,
    pub questions: Vec<QuestionResponseDto>,
    /// Distinct categories in order of first appearance
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(category: &str) -> CreateQuestionDto {
        CreateQuestionDto {
            text: "Are academic processes digitized?".to_string(),
            question_type: QuestionType::Scale,
            category: category.to_string(),
            display_order: 1,
        }
    }

    #[test]
    fn test_create_questionnaire_defaults() {
        let dto: CreateQuestionnaireDto =
            serde_json::from_str(r#"{"title": "Digital maturity"}"#).unwrap();
        assert!(dto.is_active);
        assert!(dto.description.is_empty());
        assert!(dto.questions.is_empty());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_nested_question_validation() {
        let mut dto = CreateQuestionnaireDto {
            title: "Digital maturity".to_string(),
            description: String::new(),
            is_active: true,
            created_by: None,
            questions: vec![question("Processes"), question("Tools")],
        };
        assert!(dto.validate().is_ok());

        dto.questions.push(question("Tools "));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_question_rejects_negative_order_and_blank_text() {
        let mut q = question("Processes");
        q.display_order = -1;
        assert!(q.validate().is_err());

        let mut q = question("Processes");
        q.text = "  ".to_string();
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_update_question_partial() {
        let dto = UpdateQuestionDto {
            category: Some("People".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateQuestionDto {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
