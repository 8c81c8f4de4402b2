use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Filters for listing activity logs
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ActivityLogFilter {
    /// Only entries recorded for this user
    pub user_id: Option<Uuid>,
}

/// Response DTO for an activity log entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogResponseDto {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
