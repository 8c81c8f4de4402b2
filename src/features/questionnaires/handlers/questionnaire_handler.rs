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
use crate::features::questionnaires::dtos::{
    CreateQuestionDto, CreateQuestionnaireDto, QuestionResponseDto, QuestionnaireDetailDto,
    QuestionnaireFilter, QuestionnaireResponseDto, UpdateQuestionDto, UpdateQuestionnaireDto,
};
use crate::features::questionnaires::services::QuestionnaireService;
use crate::shared::types::{ActorQuery, ApiResponse, Meta, PaginationQuery};

/// List questionnaires
///
/// Supports free-text search on title and description and filtering by the
/// active flag.
#[utoipa::path(
    get,
    path = "/api/questionnaires",
    params(PaginationQuery, QuestionnaireFilter),
    responses(
        (status = 200, description = "List of questionnaires", body = ApiResponse<Vec<QuestionnaireResponseDto>>),
    ),
    tag = "questionnaires"
)]
pub async fn list_questionnaires(
    State(service): State<Arc<QuestionnaireService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
    AppQuery(filter): AppQuery<QuestionnaireFilter>,
) -> Result<Json<ApiResponse<Vec<QuestionnaireResponseDto>>>> {
    let (questionnaires, total) = service.list(&filter, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(questionnaires),
        None,
        Some(Meta::paged(total, &pagination)),
    )))
}

/// Create a questionnaire
#[utoipa::path(
    post,
    path = "/api/questionnaires",
    request_body = CreateQuestionnaireDto,
    responses(
        (status = 201, description = "Questionnaire created", body = ApiResponse<QuestionnaireDetailDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "questionnaires"
)]
pub async fn create_questionnaire(
    State(service): State<Arc<QuestionnaireService>>,
    AppJson(dto): AppJson<CreateQuestionnaireDto>,
) -> Result<(StatusCode, Json<ApiResponse<QuestionnaireDetailDto>>)> {
    dto.validate()?;

    let questionnaire = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(questionnaire),
            Some("Questionnaire created".to_string()),
            None,
        )),
    ))
}

/// Get a questionnaire with its questions
#[utoipa::path(
    get,
    path = "/api/questionnaires/{id}",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID")
    ),
    responses(
        (status = 200, description = "Questionnaire found", body = ApiResponse<QuestionnaireDetailDto>),
        (status = 404, description = "Questionnaire not found")
    ),
    tag = "questionnaires"
)]
pub async fn get_questionnaire(
    State(service): State<Arc<QuestionnaireService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuestionnaireDetailDto>>> {
    let questionnaire = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(questionnaire), None, None)))
}

/// Update a questionnaire
#[utoipa::path(
    put,
    path = "/api/questionnaires/{id}",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID")
    ),
    request_body = UpdateQuestionnaireDto,
    responses(
        (status = 200, description = "Questionnaire updated", body = ApiResponse<QuestionnaireResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Questionnaire not found")
    ),
    tag = "questionnaires"
)]
pub async fn update_questionnaire(
    State(service): State<Arc<QuestionnaireService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateQuestionnaireDto>,
) -> Result<Json<ApiResponse<QuestionnaireResponseDto>>> {
    dto.validate()?;

    let questionnaire = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(questionnaire), None, None)))
}

/// Delete a questionnaire
///
/// Questions, diagnostics, answers and indicators referencing it are deleted too.
#[utoipa::path(
    delete,
    path = "/api/questionnaires/{id}",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Questionnaire deleted"),
        (status = 404, description = "Questionnaire not found")
    ),
    tag = "questionnaires"
)]
pub async fn delete_questionnaire(
    State(service): State<Arc<QuestionnaireService>>,
    Path(id): Path<Uuid>,
    AppQuery(actor): AppQuery<ActorQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, actor.user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Questionnaire deleted".to_string()),
        None,
    )))
}

/// Add a question to a questionnaire
#[utoipa::path(
    post,
    path = "/api/questionnaires/{id}/questions",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID")
    ),
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Question created", body = ApiResponse<QuestionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Questionnaire not found")
    ),
    tag = "questionnaires"
)]
pub async fn add_question(
    State(service): State<Arc<QuestionnaireService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<(StatusCode, Json<ApiResponse<QuestionResponseDto>>)> {
    dto.validate()?;

    let question = service.add_question(id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(question), None, None)),
    ))
}

/// Update a question
#[utoipa::path(
    put,
    path = "/api/questionnaires/{id}/questions/{question_id}",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID"),
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionDto,
    responses(
        (status = 200, description = "Question updated", body = ApiResponse<QuestionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Question not found")
    ),
    tag = "questionnaires"
)]
pub async fn update_question(
    State(service): State<Arc<QuestionnaireService>>,
    Path((id, question_id)): Path<(Uuid, Uuid)>,
    AppJson(dto): AppJson<UpdateQuestionDto>,
) -> Result<Json<ApiResponse<QuestionResponseDto>>> {
    dto.validate()?;

    let question = service.update_question(id, question_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(question), None, None)))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/api/questionnaires/{id}/questions/{question_id}",
    params(
        ("id" = Uuid, Path, description = "Questionnaire ID"),
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Question not found")
    ),
    tag = "questionnaires"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionnaireService>>,
    Path((id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_question(id, question_id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
