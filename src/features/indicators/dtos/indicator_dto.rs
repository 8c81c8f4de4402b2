use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::diagnostics::engine::MaturityLevel;

/// Filters for listing indicators
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct IndicatorFilter {
    /// Case-insensitive match on indicator name or department name
    pub search: Option<String>,

    /// Only indicators of diagnostics for this department
    pub department_id: Option<Uuid>,
}

/// Response DTO for indicator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndicatorResponseDto {
    pub id: Uuid,
    pub diagnostic_id: Uuid,
    /// "Level of <category>"
    pub name: String,
    pub category: String,
    /// Mean of the category's numeric answers
    pub value: f64,
    pub level: MaturityLevel,
    pub description: Option<String>,
    pub recommendation: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Indicator with the department and questionnaire of its diagnostic
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndicatorDetailDto {
    pub indicator: IndicatorResponseDto,
    pub department_id: Uuid,
    pub department_name: String,
    pub questionnaire_title: String,
}
