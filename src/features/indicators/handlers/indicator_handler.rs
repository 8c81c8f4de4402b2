use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::indicators::dtos::{IndicatorDetailDto, IndicatorFilter};
use crate::features::indicators::services::IndicatorService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List indicators
#[utoipa::path(
    get,
    path = "/api/indicators",
    params(PaginationQuery, IndicatorFilter),
    responses(
        (status = 200, description = "List of indicators", body = ApiResponse<Vec<IndicatorDetailDto>>),
    ),
    tag = "indicators"
)]
pub async fn list_indicators(
    State(service): State<Arc<IndicatorService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppQuery(filter): AppQuery<IndicatorFilter>,
) -> Result<Json<ApiResponse<Vec<IndicatorDetailDto>>>> {
    let (indicators, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(indicators),
        None,
        Some(Meta::paged(total, &pagination)),
    )))
}

/// Get indicator by ID
#[utoipa::path(
    get,
    path = "/api/indicators/{id}",
    params(
        ("id" = Uuid, Path, description = "Indicator ID")
    ),
    responses(
        (status = 200, description = "Indicator found", body = ApiResponse<IndicatorDetailDto>),
        (status = 404, description = "Indicator not found")
    ),
    tag = "indicators"
)]
pub async fn get_indicator(
    State(service): State<Arc<IndicatorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IndicatorDetailDto>>> {
    let indicator = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(indicator), None, None)))
}
