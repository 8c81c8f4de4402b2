use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::questionnaires::dtos::QuestionResponseDto;

/// Question type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "question_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Numeric answer from 1 to 5
    Scale,
    /// Numeric answer, 1 for no and 5 for yes
    YesNo,
    /// Text answer, never scored
    FreeText,
}

impl QuestionType {
    /// Whether answers to this type carry a numeric value
    pub fn is_scored(&self) -> bool {
        !matches!(self, QuestionType::FreeText)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::Scale => write!(f, "scale"),
            QuestionType::YesNo => write!(f, "yes_no"),
            QuestionType::FreeText => write!(f, "free_text"),
        }
    }
}

/// Database model for question
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub questionnaire_id: Uuid,
    pub text: String,
    pub question_type: QuestionType,
    pub category: String,
    pub display_order: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            questionnaire_id: q.questionnaire_id,
            text: q.text,
            question_type: q.question_type,
            category: q.category,
            display_order: q.display_order,
        }
    }
}

/// Distinct category labels in order of first appearance.
///
/// Labels are compared byte-for-byte; callers pass them in question order.
pub fn distinct_categories<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories: Vec<String> = Vec::new();
    for label in labels {
        let label = label.as_ref();
        if !categories.iter().any(|c| c == label) {
            categories.push(label.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_categories_keeps_first_appearance_order() {
        let labels = ["Tools", "Processes", "Tools", "People", "Processes"];
        assert_eq!(
            distinct_categories(labels),
            vec!["Tools", "Processes", "People"]
        );
    }

    #[test]
    fn test_distinct_categories_is_exact_match() {
        let labels = ["Tools", "tools", "Tools"];
        assert_eq!(distinct_categories(labels), vec!["Tools", "tools"]);
        assert!(distinct_categories(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_question_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&QuestionType::YesNo).unwrap(),
            "\"yes_no\""
        );
        let parsed: QuestionType = serde_json::from_str("\"free_text\"").unwrap();
        assert_eq!(parsed, QuestionType::FreeText);
        assert!(!parsed.is_scored());
        assert!(QuestionType::Scale.is_scored());
    }
}
