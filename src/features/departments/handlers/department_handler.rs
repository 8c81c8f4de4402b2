use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::departments::dtos::{
    CreateDepartmentDto, DepartmentFilter, DepartmentResponseDto,
};
use crate::features::departments::services::DepartmentService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List departments
#[utoipa::path(
    get,
    path = "/api/departments",
    params(PaginationQuery, DepartmentFilter),
    responses(
        (status = 200, description = "List of departments", body = ApiResponse<Vec<DepartmentResponseDto>>),
    ),
    tag = "departments"
)]
pub async fn list_departments(
    State(service): State<Arc<DepartmentService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppQuery(filter): AppQuery<DepartmentFilter>,
) -> Result<Json<ApiResponse<Vec<DepartmentResponseDto>>>> {
    let (departments, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(departments),
        None,
        Some(Meta::paged(total, &pagination)),
    )))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = ApiResponse<DepartmentResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "departments"
)]
pub async fn create_department(
    State(service): State<Arc<DepartmentService>>,
    AppJson(dto): AppJson<CreateDepartmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<DepartmentResponseDto>>)> {
    dto.validate()?;

    let department = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(department), None, None)),
    ))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = ApiResponse<DepartmentResponseDto>),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn get_department(
    State(service): State<Arc<DepartmentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DepartmentResponseDto>>> {
    let department = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(department), None, None)))
}
