use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::NON_BLANK_REGEX;

/// Request DTO for creating a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDepartmentDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        regex(path = *NON_BLANK_REGEX, message = "Name must not be blank")
    )]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    pub location: Option<String>,
}

/// Filters for listing departments
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DepartmentFilter {
    /// Case-insensitive match on the department name
    pub search: Option<String>,
}

/// Response DTO for department
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_department_validation() {
        let valid = CreateDepartmentDto {
            name: "Faculty of Engineering".to_string(),
            description: None,
            location: Some("Building A".to_string()),
        };
        assert!(valid.validate().is_ok());

        let blank = CreateDepartmentDto {
            name: "   ".to_string(),
            ..valid.clone()
        };
        assert!(blank.validate().is_err());

        let too_long = CreateDepartmentDto {
            name: "x".repeat(101),
            ..valid
        };
        assert!(too_long.validate().is_err());
    }
}
