use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::diagnostics::dtos::{AnswerInputDto, AnswerResponseDto};
use crate::features::questionnaires::models::QuestionType;
use crate::shared::constants::{MAX_ANSWERS_PER_SUBMISSION, NO_VALUE, SCALE_MAX, SCALE_MIN, YES_VALUE};

/// Answer joined with the question it responds to
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRow {
    pub id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub category: String,
    pub numeric_value: Option<i32>,
    pub text_value: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnswerRow> for AnswerResponseDto {
    fn from(a: AnswerRow) -> Self {
        Self {
            id: a.id,
            question_id: a.question_id,
            question_text: a.question_text,
            question_type: a.question_type,
            category: a.category,
            numeric_value: a.numeric_value,
            text_value: a.text_value,
            updated_at: a.updated_at,
        }
    }
}

/// Check an answer's values against its question type.
///
/// `text_value` is expected already normalized, with blank text as `None`.
pub fn validate_answer(
    question_type: QuestionType,
    numeric_value: Option<i32>,
    text_value: Option<&str>,
) -> std::result::Result<(), &'static str> {
    if !question_type.is_scored() {
        return match numeric_value {
            Some(_) => Err("numeric values are not accepted for free-text questions"),
            None => Ok(()),
        };
    }

    let value = numeric_value.ok_or("a numeric value is required")?;

    let in_range = match question_type {
        QuestionType::YesNo => value == YES_VALUE || value == NO_VALUE,
        _ => (SCALE_MIN..=SCALE_MAX).contains(&value),
    };
    if !in_range {
        return Err(match question_type {
            QuestionType::YesNo => "numeric value must be 1 (no) or 5 (yes)",
            _ => "numeric value must be between 1 and 5",
        });
    }

    if text_value.is_some() {
        return Err("text is only accepted for free-text questions");
    }

    Ok(())
}

/// Blank text counts as no text
pub fn normalize_text(text_value: Option<&str>) -> Option<String> {
    text_value
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Shape checks on a submitted batch that need no database access
pub fn check_batch(answers: &[AnswerInputDto]) -> Result<()> {
    if answers.is_empty() {
        return Err(AppError::Validation(
            "At least one answer is required".to_string(),
        ));
    }

    if answers.len() > MAX_ANSWERS_PER_SUBMISSION {
        return Err(AppError::Validation(format!(
            "At most {} answers can be submitted at once",
            MAX_ANSWERS_PER_SUBMISSION
        )));
    }

    let mut seen = HashSet::with_capacity(answers.len());
    if let Some(duplicate) = answers.iter().find(|a| !seen.insert(a.question_id)) {
        return Err(AppError::Validation(format!(
            "Question {} is answered more than once",
            duplicate.question_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    fn input(question_id: Uuid, numeric_value: Option<i32>) -> AnswerInputDto {
        AnswerInputDto {
            question_id,
            numeric_value,
            text_value: None,
        }
    }

    #[test]
    fn test_scale_accepts_full_range() {
        for v in SCALE_MIN..=SCALE_MAX {
            assert!(validate_answer(QuestionType::Scale, Some(v), None).is_ok());
        }
        let v: i32 = (1..6).fake();
        assert!(validate_answer(QuestionType::Scale, Some(v), None).is_ok());
    }

    #[test]
    fn test_scale_rejects_out_of_range_and_missing() {
        assert!(validate_answer(QuestionType::Scale, Some(0), None).is_err());
        assert!(validate_answer(QuestionType::Scale, Some(6), None).is_err());
        assert!(validate_answer(QuestionType::Scale, None, None).is_err());
        assert!(validate_answer(QuestionType::Scale, Some(3), Some("note")).is_err());
    }

    #[test]
    fn test_yes_no_only_accepts_one_or_five() {
        assert!(validate_answer(QuestionType::YesNo, Some(NO_VALUE), None).is_ok());
        assert!(validate_answer(QuestionType::YesNo, Some(YES_VALUE), None).is_ok());
        assert!(validate_answer(QuestionType::YesNo, Some(3), None).is_err());
        assert!(validate_answer(QuestionType::YesNo, None, None).is_err());
    }

    #[test]
    fn test_free_text_rejects_numbers() {
        assert!(validate_answer(QuestionType::FreeText, None, Some("Budget")).is_ok());
        assert!(validate_answer(QuestionType::FreeText, None, None).is_ok());
        assert!(validate_answer(QuestionType::FreeText, Some(4), None).is_err());
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text(Some("  slow network ")), Some("slow network".to_string()));
        assert_eq!(normalize_text(Some("   ")), None);
        assert_eq!(normalize_text(None), None);
    }

    #[test]
    fn test_check_batch_rejects_empty() {
        assert!(matches!(check_batch(&[]), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_check_batch_rejects_duplicates() {
        let id = Uuid::new_v4();
        let batch = vec![input(id, Some(3)), input(Uuid::new_v4(), Some(4)), input(id, Some(5))];

        match check_batch(&batch) {
            Err(AppError::Validation(msg)) => assert!(msg.contains(&id.to_string())),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_batch_rejects_oversized() {
        let batch: Vec<AnswerInputDto> = (0..=MAX_ANSWERS_PER_SUBMISSION)
            .map(|_| input(Uuid::new_v4(), Some(1)))
            .collect();

        assert!(check_batch(&batch).is_err());
        assert!(check_batch(&batch[..MAX_ANSWERS_PER_SUBMISSION]).is_ok());
    }
}
