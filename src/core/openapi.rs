use utoipa::{Modify, OpenApi};

use crate::features::activity_logs::{
    dtos as activity_logs_dtos, handlers as activity_logs_handlers,
};
use crate::features::departments::{dtos as departments_dtos, handlers as departments_handlers};
use crate::features::diagnostics::{
    dtos as diagnostics_dtos, engine::MaturityLevel, handlers as diagnostics_handlers,
};
use crate::features::indicators::{dtos as indicators_dtos, handlers as indicators_handlers};
use crate::features::questionnaires::{
    dtos as questionnaires_dtos, handlers as questionnaires_handlers, models::QuestionType,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Departments
        departments_handlers::list_departments,
        departments_handlers::create_department,
        departments_handlers::get_department,
        // Questionnaires
        questionnaires_handlers::list_questionnaires,
        questionnaires_handlers::create_questionnaire,
        questionnaires_handlers::get_questionnaire,
        questionnaires_handlers::update_questionnaire,
        questionnaires_handlers::delete_questionnaire,
        questionnaires_handlers::add_question,
        questionnaires_handlers::update_question,
        questionnaires_handlers::delete_question,
        // Diagnostics
        diagnostics_handlers::list_diagnostics,
        diagnostics_handlers::create_diagnostic,
        diagnostics_handlers::get_diagnostic,
        diagnostics_handlers::update_diagnostic,
        diagnostics_handlers::delete_diagnostic,
        diagnostics_handlers::submit_answers,
        diagnostics_handlers::delete_answer,
        diagnostics_handlers::recalculate_indicators,
        // Indicators
        indicators_handlers::list_indicators,
        indicators_handlers::get_indicator,
        // Activity logs
        activity_logs_handlers::list_activity_logs,
    ),
    components(
        schemas(
            Meta,
            QuestionType,
            MaturityLevel,
            // Departments
            departments_dtos::CreateDepartmentDto,
            departments_dtos::DepartmentResponseDto,
            ApiResponse<departments_dtos::DepartmentResponseDto>,
            ApiResponse<Vec<departments_dtos::DepartmentResponseDto>>,
            // Questionnaires
            questionnaires_dtos::CreateQuestionDto,
            questionnaires_dtos::UpdateQuestionDto,
            questionnaires_dtos::QuestionResponseDto,
            questionnaires_dtos::CreateQuestionnaireDto,
            questionnaires_dtos::UpdateQuestionnaireDto,
            questionnaires_dtos::QuestionnaireResponseDto,
            questionnaires_dtos::QuestionnaireDetailDto,
            ApiResponse<questionnaires_dtos::QuestionResponseDto>,
            ApiResponse<questionnaires_dtos::QuestionnaireResponseDto>,
            ApiResponse<questionnaires_dtos::QuestionnaireDetailDto>,
            ApiResponse<Vec<questionnaires_dtos::QuestionnaireResponseDto>>,
            // Diagnostics
            diagnostics_dtos::CreateDiagnosticDto,
            diagnostics_dtos::UpdateDiagnosticDto,
            diagnostics_dtos::DiagnosticResponseDto,
            diagnostics_dtos::DiagnosticDetailDto,
            diagnostics_dtos::AnswerInputDto,
            diagnostics_dtos::SubmitAnswersDto,
            diagnostics_dtos::AnswerResponseDto,
            diagnostics_dtos::ScorecardDto,
            ApiResponse<diagnostics_dtos::DiagnosticResponseDto>,
            ApiResponse<diagnostics_dtos::DiagnosticDetailDto>,
            ApiResponse<Vec<diagnostics_dtos::DiagnosticResponseDto>>,
            ApiResponse<diagnostics_dtos::ScorecardDto>,
            // Indicators
            indicators_dtos::IndicatorResponseDto,
            indicators_dtos::IndicatorDetailDto,
            ApiResponse<indicators_dtos::IndicatorDetailDto>,
            ApiResponse<Vec<indicators_dtos::IndicatorDetailDto>>,
            // Activity logs
            activity_logs_dtos::ActivityLogResponseDto,
            ApiResponse<Vec<activity_logs_dtos::ActivityLogResponseDto>>,
        )
    ),
    tags(
        (name = "departments", description = "University departments under evaluation"),
        (name = "questionnaires", description = "Questionnaire catalog and questions"),
        (name = "diagnostics", description = "Diagnostics, answer submission and indicator recalculation"),
        (name = "indicators", description = "Per-category indicators (read-only)"),
        (name = "activity-logs", description = "Audit trail of user actions"),
    ),
    info(
        title = "Inventory Diagnostics API",
        version = "0.1.0",
        description = "IT asset inventory diagnostics for university departments",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/departments",
            "/api/questionnaires/{id}/questions/{question_id}",
            "/api/diagnostics/{id}/answers",
            "/api/diagnostics/{id}/answers/{question_id}",
            "/api/diagnostics/{id}/recalculate",
            "/api/indicators/{id}",
            "/api/activity-logs",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Campus Diagnostics".to_string(),
            version: "2.0.0".to_string(),
            description: "Staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Campus Diagnostics");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
