//! Indicator calculation.
//!
//! Turns a diagnostic's answers into an overall score and one indicator per
//! category. Everything here is pure; persistence lives in
//! [`IndicatorEngine`](crate::features::diagnostics::services::IndicatorEngine).

use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Recommendation tier for a category value.
///
/// Bounds are closed below and open above: 2.0 is `Low`, 4.0 is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "maturity_level", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    VeryLow,
    Low,
    Moderate,
    High,
}

impl MaturityLevel {
    pub fn from_value(value: f64) -> Self {
        if value < 2.0 {
            MaturityLevel::VeryLow
        } else if value < 3.0 {
            MaturityLevel::Low
        } else if value < 4.0 {
            MaturityLevel::Moderate
        } else {
            MaturityLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::VeryLow => "very low",
            MaturityLevel::Low => "low",
            MaturityLevel::Moderate => "moderate",
            MaturityLevel::High => "high",
        }
    }

    /// Improvement advice for a category at this level
    pub fn recommendation(&self, category: &str) -> String {
        let advice = match self {
            MaturityLevel::VeryLow => "Immediate action in this area should be prioritized.",
            MaturityLevel::Low => "Improvements should be implemented in this area.",
            MaturityLevel::Moderate => "Keep improving this area.",
            MaturityLevel::High => "Maintain the good practices in this area.",
        };
        format!(
            "The level of {} is {}. {}",
            category,
            self.label(),
            advice
        )
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Answer value tagged with its question's category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnswer {
    pub category: String,
    /// `None` for free-text answers, which never take part in scoring
    pub numeric_value: Option<i32>,
}

impl ScoredAnswer {
    pub fn new(category: impl Into<String>, numeric_value: Option<i32>) -> Self {
        Self {
            category: category.into(),
            numeric_value,
        }
    }
}

/// Indicator ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDraft {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub level: MaturityLevel,
    pub description: String,
    pub recommendation: String,
}

impl IndicatorDraft {
    fn for_category(category: &str, value: f64) -> Self {
        let level = MaturityLevel::from_value(value);
        Self {
            name: indicator_name(category),
            category: category.to_string(),
            value,
            level,
            description: format!("Indicator of {}", category),
            recommendation: level.recommendation(category),
        }
    }
}

/// Result of scoring one diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    /// Flat mean of every numeric answer; `None` when there are none
    pub overall_score: Option<f64>,
    pub indicators: Vec<IndicatorDraft>,
}

pub fn indicator_name(category: &str) -> String {
    format!("Level of {}", category)
}

fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0u32), |(sum, count), v| (sum + i64::from(v), count + 1));

    (count > 0).then(|| sum as f64 / f64::from(count))
}

/// Score a diagnostic.
///
/// `categories` are the questionnaire's distinct labels in presentation
/// order; an indicator is produced for each one that has at least one
/// numeric answer. The overall score is the mean over all numeric answers,
/// not the mean of the category means.
pub fn evaluate(categories: &[String], answers: &[ScoredAnswer]) -> Scorecard {
    let overall_score = mean(answers.iter().filter_map(|a| a.numeric_value));

    let indicators = categories
        .iter()
        .filter_map(|category| {
            let value = mean(
                answers
                    .iter()
                    .filter(|a| a.category == *category)
                    .filter_map(|a| a.numeric_value),
            )?;
            Some(IndicatorDraft::for_category(category, value))
        })
        .collect();

    Scorecard {
        overall_score,
        indicators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    fn categories(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_overall_score_is_flat_mean() {
        let answers = vec![
            ScoredAnswer::new("X", Some(4)),
            ScoredAnswer::new("X", Some(5)),
            ScoredAnswer::new("Y", Some(1)),
            ScoredAnswer::new("Z", Some(2)),
        ];

        let card = evaluate(&categories(&["X", "Y", "Z"]), &answers);

        assert_eq!(card.overall_score, Some(3.0));
    }

    #[test]
    fn test_groups_by_category() {
        let answers = vec![
            ScoredAnswer::new("X", Some(4)),
            ScoredAnswer::new("X", Some(2)),
            ScoredAnswer::new("Y", Some(5)),
        ];

        let card = evaluate(&categories(&["X", "Y"]), &answers);

        assert_eq!(card.indicators.len(), 2);
        assert_eq!(card.indicators[0].name, "Level of X");
        assert_eq!(card.indicators[0].value, 3.0);
        assert_eq!(card.indicators[1].name, "Level of Y");
        assert_eq!(card.indicators[1].value, 5.0);
        assert!(approx(card.overall_score.unwrap(), 11.0 / 3.0));
    }

    #[test]
    fn test_overall_differs_from_mean_of_means() {
        // X mean 1.0, Y mean 5.0 -> mean of means would be 3.0
        let answers = vec![
            ScoredAnswer::new("X", Some(1)),
            ScoredAnswer::new("X", Some(1)),
            ScoredAnswer::new("X", Some(1)),
            ScoredAnswer::new("Y", Some(5)),
        ];

        let card = evaluate(&categories(&["X", "Y"]), &answers);

        assert_eq!(card.overall_score, Some(2.0));
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let card = evaluate(&categories(&["X", "Y"]), &[]);

        assert_eq!(card.overall_score, None);
        assert!(card.indicators.is_empty());
    }

    #[test]
    fn test_free_text_answers_are_excluded() {
        let answers = vec![
            ScoredAnswer::new("Barriers", None),
            ScoredAnswer::new("Tools", Some(4)),
            ScoredAnswer::new("Tools", None),
        ];

        let card = evaluate(&categories(&["Tools", "Barriers"]), &answers);

        assert_eq!(card.overall_score, Some(4.0));
        assert_eq!(card.indicators.len(), 1);
        assert_eq!(card.indicators[0].category, "Tools");
        assert_eq!(card.indicators[0].value, 4.0);
    }

    #[test]
    fn test_only_free_text_yields_no_score() {
        let answers = vec![ScoredAnswer::new("Barriers", None)];

        let card = evaluate(&categories(&["Barriers"]), &answers);

        assert_eq!(card.overall_score, None);
        assert!(card.indicators.is_empty());
    }

    #[test]
    fn test_unanswered_categories_are_skipped() {
        let answers = vec![ScoredAnswer::new("People", Some(3))];

        let card = evaluate(&categories(&["Processes", "People", "Tools"]), &answers);

        assert_eq!(card.indicators.len(), 1);
        assert_eq!(card.indicators[0].name, "Level of People");
    }

    #[test]
    fn test_indicators_follow_category_order() {
        let answers = vec![
            ScoredAnswer::new("B", Some(2)),
            ScoredAnswer::new("A", Some(4)),
            ScoredAnswer::new("C", Some(5)),
        ];

        let card = evaluate(&categories(&["C", "A", "B"]), &answers);
        let names: Vec<&str> = card.indicators.iter().map(|i| i.category.as_str()).collect();

        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let answers = vec![
            ScoredAnswer::new("Tools", Some(5)),
            ScoredAnswer::new("tools", Some(1)),
        ];

        let card = evaluate(&categories(&["Tools", "tools"]), &answers);

        assert_eq!(card.indicators.len(), 2);
        assert_eq!(card.indicators[0].value, 5.0);
        assert_eq!(card.indicators[1].value, 1.0);
    }

    #[test]
    fn test_answers_outside_category_list_only_count_overall() {
        let answers = vec![
            ScoredAnswer::new("Known", Some(2)),
            ScoredAnswer::new("Stray", Some(4)),
        ];

        let card = evaluate(&categories(&["Known"]), &answers);

        assert_eq!(card.overall_score, Some(3.0));
        assert_eq!(card.indicators.len(), 1);
        assert_eq!(card.indicators[0].value, 2.0);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(MaturityLevel::from_value(1.0), MaturityLevel::VeryLow);
        assert_eq!(MaturityLevel::from_value(1.99), MaturityLevel::VeryLow);
        assert_eq!(MaturityLevel::from_value(2.0), MaturityLevel::Low);
        assert_eq!(MaturityLevel::from_value(2.99), MaturityLevel::Low);
        assert_eq!(MaturityLevel::from_value(3.0), MaturityLevel::Moderate);
        assert_eq!(MaturityLevel::from_value(3.99), MaturityLevel::Moderate);
        assert_eq!(MaturityLevel::from_value(4.0), MaturityLevel::High);
        assert_eq!(MaturityLevel::from_value(5.0), MaturityLevel::High);
    }

    #[test]
    fn test_recommendation_text() {
        assert_eq!(
            MaturityLevel::from_value(1.5).recommendation("Digital Tools"),
            "The level of Digital Tools is very low. Immediate action in this area should be prioritized."
        );
        assert_eq!(
            MaturityLevel::from_value(2.0).recommendation("Digital Tools"),
            "The level of Digital Tools is low. Improvements should be implemented in this area."
        );
        assert_eq!(
            MaturityLevel::from_value(3.0).recommendation("Digital Tools"),
            "The level of Digital Tools is moderate. Keep improving this area."
        );
        assert_eq!(
            MaturityLevel::from_value(4.0).recommendation("Digital Tools"),
            "The level of Digital Tools is high. Maintain the good practices in this area."
        );
    }

    #[test]
    fn test_draft_fields() {
        let answers = vec![ScoredAnswer::new("People", Some(2))];

        let card = evaluate(&categories(&["People"]), &answers);
        let draft = &card.indicators[0];

        assert_eq!(draft.name, "Level of People");
        assert_eq!(draft.description, "Indicator of People");
        assert_eq!(draft.level, MaturityLevel::Low);
        assert_eq!(draft.recommendation, MaturityLevel::Low.recommendation("People"));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let labels = categories(&["Processes", "Tools", "People", "Education"]);

        for _ in 0..50 {
            let count: usize = (0..30).fake();
            let answers: Vec<ScoredAnswer> = (0..count)
                .map(|_| {
                    let category = labels[(0..labels.len()).fake::<usize>()].clone();
                    let numeric_value = if (0..4).fake::<u8>() == 0 {
                        None
                    } else {
                        Some((1..6).fake::<i32>())
                    };
                    ScoredAnswer::new(category, numeric_value)
                })
                .collect();

            let first = evaluate(&labels, &answers);
            let second = evaluate(&labels, &answers);

            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_values_stay_within_answer_range() {
        let labels = categories(&["A", "B"]);

        for _ in 0..50 {
            let answers: Vec<ScoredAnswer> = (0..(1..20).fake::<usize>())
                .map(|i| ScoredAnswer::new(labels[i % 2].clone(), Some((1..6).fake::<i32>())))
                .collect();

            let card = evaluate(&labels, &answers);
            let overall = card.overall_score.unwrap();

            assert!((1.0..=5.0).contains(&overall));
            for indicator in &card.indicators {
                assert!((1.0..=5.0).contains(&indicator.value));
                assert_eq!(indicator.level, MaturityLevel::from_value(indicator.value));
            }
        }
    }
}
