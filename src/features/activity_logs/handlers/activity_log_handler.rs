use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::activity_logs::dtos::{ActivityLogFilter, ActivityLogResponseDto};
use crate::features::activity_logs::services::ActivityLogService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List activity log entries
#[utoipa::path(
    get,
    path = "/api/activity-logs",
    params(PaginationQuery, ActivityLogFilter),
    responses(
        (status = 200, description = "Activity log entries", body = ApiResponse<Vec<ActivityLogResponseDto>>),
    ),
    tag = "activity-logs"
)]
pub async fn list_activity_logs(
    State(service): State<Arc<ActivityLogService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppQuery(filter): AppQuery<ActivityLogFilter>,
) -> Result<Json<ApiResponse<Vec<ActivityLogResponseDto>>>> {
    let (logs, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(logs),
        None,
        Some(Meta::paged(total, &pagination)),
    )))
}
