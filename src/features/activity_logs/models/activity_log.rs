use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::activity_logs::dtos::ActivityLogResponseDto;

/// Database model for an activity log entry
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogResponseDto {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            action: log.action,
            details: log.details,
            created_at: log.created_at,
        }
    }
}

/// Entry to append to the activity trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub details: Option<String>,
}

impl NewActivity {
    pub fn new(user_id: Option<Uuid>, action: impl Into<String>) -> Self {
        Self {
            user_id,
            action: action.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_builder() {
        let user = Uuid::new_v4();
        let entry = NewActivity::new(Some(user), "Evaluation completed")
            .with_details("Department: Library");

        assert_eq!(entry.user_id, Some(user));
        assert_eq!(entry.action, "Evaluation completed");
        assert_eq!(entry.details.as_deref(), Some("Department: Library"));
        assert_eq!(NewActivity::new(None, "Diagnostic deleted").details, None);
    }
}
