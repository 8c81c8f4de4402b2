use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::diagnostics::engine::MaturityLevel;
use crate::features::indicators::dtos::{IndicatorDetailDto, IndicatorResponseDto};

pub const INDICATOR_COLUMNS: &str =
    "id, diagnostic_id, name, category, value, level, description, recommendation, created_at";

/// Database model for indicator
#[derive(Debug, Clone, FromRow)]
pub struct Indicator {
    pub id: Uuid,
    pub diagnostic_id: Uuid,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub level: MaturityLevel,
    pub description: Option<String>,
    pub recommendation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Indicator> for IndicatorResponseDto {
    fn from(i: Indicator) -> Self {
        Self {
            id: i.id,
            diagnostic_id: i.diagnostic_id,
            name: i.name,
            category: i.category,
            value: i.value,
            level: i.level,
            description: i.description,
            recommendation: i.recommendation,
            created_at: i.created_at,
        }
    }
}

/// Indicator joined with the department its diagnostic evaluated
#[derive(Debug, Clone, FromRow)]
pub struct IndicatorWithContext {
    #[sqlx(flatten)]
    pub indicator: Indicator,
    pub department_id: Uuid,
    pub department_name: String,
    pub questionnaire_title: String,
}

impl From<IndicatorWithContext> for IndicatorDetailDto {
    fn from(row: IndicatorWithContext) -> Self {
        Self {
            indicator: row.indicator.into(),
            department_id: row.department_id,
            department_name: row.department_name,
            questionnaire_title: row.questionnaire_title,
        }
    }
}
