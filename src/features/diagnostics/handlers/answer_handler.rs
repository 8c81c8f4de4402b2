use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::diagnostics::dtos::{ScorecardDto, SubmitAnswersDto};
use crate::features::diagnostics::services::DiagnosticService;
use crate::shared::types::{ActorQuery, ApiResponse};

/// Submit answers
///
/// Answers to questions already answered are replaced. Indicators and the
/// overall score are recalculated before the response is sent.
#[utoipa::path(
    put,
    path = "/api/diagnostics/{id}/answers",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID")
    ),
    request_body = SubmitAnswersDto,
    responses(
        (status = 200, description = "Answers stored and indicators recalculated", body = ApiResponse<ScorecardDto>),
        (status = 400, description = "Invalid answer"),
        (status = 404, description = "Diagnostic not found")
    ),
    tag = "diagnostics"
)]
pub async fn submit_answers(
    State(service): State<Arc<DiagnosticService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SubmitAnswersDto>,
) -> Result<Json<ApiResponse<ScorecardDto>>> {
    dto.validate()?;

    let scorecard = service.submit_answers(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(scorecard),
        Some("Answers saved".to_string()),
        None,
    )))
}

/// Remove an answer
#[utoipa::path(
    delete,
    path = "/api/diagnostics/{id}/answers/{question_id}",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID"),
        ("question_id" = Uuid, Path, description = "Question ID"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Answer removed and indicators recalculated", body = ApiResponse<ScorecardDto>),
        (status = 404, description = "Diagnostic or answer not found")
    ),
    tag = "diagnostics"
)]
pub async fn delete_answer(
    State(service): State<Arc<DiagnosticService>>,
    Path((id, question_id)): Path<(Uuid, Uuid)>,
    AppQuery(actor): AppQuery<ActorQuery>,
) -> Result<Json<ApiResponse<ScorecardDto>>> {
    let scorecard = service.delete_answer(id, question_id, actor.user_id).await?;
    Ok(Json(ApiResponse::success(
        Some(scorecard),
        Some("Answer removed".to_string()),
        None,
    )))
}

/// Recalculate indicators
#[utoipa::path(
    post,
    path = "/api/diagnostics/{id}/recalculate",
    params(
        ("id" = Uuid, Path, description = "Diagnostic ID"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Indicators recalculated", body = ApiResponse<ScorecardDto>),
        (status = 404, description = "Diagnostic not found")
    ),
    tag = "diagnostics"
)]
pub async fn recalculate_indicators(
    State(service): State<Arc<DiagnosticService>>,
    Path(id): Path<Uuid>,
    AppQuery(actor): AppQuery<ActorQuery>,
) -> Result<Json<ApiResponse<ScorecardDto>>> {
    let scorecard = service.recalculate(id, actor.user_id).await?;
    Ok(Json(ApiResponse::success(Some(scorecard), None, None)))
}
