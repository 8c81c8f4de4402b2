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
use crate::features::diagnostics::dtos::{
    CreateDiagnosticDto, DiagnosticDetailDto, DiagnosticFilter, DiagnosticResponseDto,
    UpdateDiagnosticDto,
};
use crate::features::diagnostics::services::DiagnosticService;
use crate::shared::types::{ActorQuery, ApiResponse, Meta, PaginationQuery};

/// List diagnostics
#[utoipa::path(
    get,
    path = "/api/diagnostics",
    params(PaginationQuery, DiagnosticFilter),
    responses(
        (status = 200, description = "List of diagnostics", body = ApiResponse<Vec<DiagnosticResponseDto>>),
    ),
    tag = "diagnostics"
)]
pub async fn list_diagnostics(
    State(service): State<Arc<DiagnosticService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppQuery(filter): AppQuery<DiagnosticFilter>,
) -> Result<Json<ApiResponse<Vec<DiagnosticResponseDto>>>> {
    let (diagnostics, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(diagnostics),
        None,
        Some(Meta::paged(total, &pagination)),
    )))
}

/// Start a diagnostic
///
/// The questionnaire must be active. The overall score stays null until the
/// first scored answer is submitted.
#[utoipa::path(
    post,
    path = "/api/diagnostics",
    request_body = CreateDiagnosticDto,
    responses(
        (status = 201, description = "Diagnostic created", body = ApiResponse<DiagnosticResponseDto>),
        (status = 400, description = "Validation error or inactive questionnaire")
    ),
    tag = "diagnostics"
)]
pub async fn create_diagnostic(
    State(service): State<Arc<DiagnosticService>>,
    AppJson(dto): AppJson<CreateDiagnosticDto>,
) -> Result<(StatusCode, Json<ApiResponse<DiagnosticResponseDto>>)> {
    dto.validate()?;

    let diagnostic = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(diagnostic),
            Some("Diagnostic created".to_string()),
            None,
        )),
    ))
}

/// Get a diagnostic with its answers and indicators
#[utoipa::path(
    get,
    path = "/api/diagnostics/{id}",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID")
    ),
    responses(
        (status = 200, description = "Diagnostic found", body = ApiResponse<DiagnosticDetailDto>),
        (status = 404, description = "Diagnostic not found")
    ),
    tag = "diagnostics"
)]
pub async fn get_diagnostic(
    State(service): State<Arc<DiagnosticService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DiagnosticDetailDto>>> {
    let diagnostic = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(diagnostic), None, None)))
}

/// Update a diagnostic
#[utoipa::path(
    put,
    path = "/api/diagnostics/{id}",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID")
    ),
    request_body = UpdateDiagnosticDto,
    responses(
        (status = 200, description = "Diagnostic updated", body = ApiResponse<DiagnosticResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Diagnostic not found"),
        (status = 409, description = "Questionnaire change on an answered diagnostic")
    ),
    tag = "diagnostics"
)]
pub async fn update_diagnostic(
    State(service): State<Arc<DiagnosticService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateDiagnosticDto>,
) -> Result<Json<ApiResponse<DiagnosticResponseDto>>> {
    dto.validate()?;

    let diagnostic = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(diagnostic),
        Some("Diagnostic updated".to_string()),
        None,
    )))
}

/// Delete a diagnostic
#[utoipa::path(
    delete,
    path = "/api/diagnostics/{id}",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Diagnostic deleted"),
        (status = 404, description = "Diagnostic not found")
    ),
    tag = "diagnostics"
)]
pub async fn delete_diagnostic(
    State(service): State<Arc<DiagnosticService>>,
    Path(id): Path<Uuid>,
    AppQuery(actor): AppQuery<ActorQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, actor.user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Diagnostic deleted".to_string()),
        None,
    )))
}
