use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::diagnostics::handlers;
use crate::features::diagnostics::services::DiagnosticService;

/// Create routes for the diagnostics feature
pub fn routes(service: Arc<DiagnosticService>) -> Router {
    Router::new()
        .route(
            "/api/diagnostics",
            get(handlers::list_diagnostics).post(handlers::create_diagnostic),
        )
        .route(
            "/api/diagnostics/{id}",
            get(handlers::get_diagnostic)
                .put(handlers::update_diagnostic)
                .delete(handlers::delete_diagnostic),
        )
        .route("/api/diagnostics/{id}/answers", put(handlers::submit_answers))
        .route(
            "/api/diagnostics/{id}/answers/{question_id}",
            delete(handlers::delete_answer),
        )
        .route(
            "/api/diagnostics/{id}/recalculate",
            post(handlers::recalculate_indicators),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScoringConfig;
    use crate::features::diagnostics::services::IndicatorEngine;
    use crate::shared::test_helpers::{lazy_pool, test_server};
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    fn server() -> axum_test::TestServer {
        let pool = lazy_pool();
        let engine = Arc::new(IndicatorEngine::new(pool.clone(), ScoringConfig::default()));
        test_server(routes(Arc::new(DiagnosticService::new(pool, engine))))
    }

    fn answers_path() -> String {
        format!("/api/diagnostics/{}/answers", Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_batch() {
        let response = server()
            .put(&answers_path())
            .json(&json!({ "answers": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_submit_rejects_duplicate_questions() {
        let question_id = Uuid::new_v4();
        let response = server()
            .put(&answers_path())
            .json(&json!({
                "answers": [
                    { "question_id": question_id, "numeric_value": 3 },
                    { "question_id": question_id, "numeric_value": 4 }
                ]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("more than once"));
    }

    #[tokio::test]
    async fn test_submit_rejects_non_numeric_value() {
        let response = server()
            .put(&answers_path())
            .json(&json!({
                "answers": [{ "question_id": Uuid::new_v4(), "numeric_value": "five" }]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_long_notes() {
        let response = server()
            .post("/api/diagnostics")
            .json(&json!({
                "department_id": Uuid::new_v4(),
                "responsible_user_id": Uuid::new_v4(),
                "questionnaire_id": Uuid::new_v4(),
                "notes": "n".repeat(2001)
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_department_filter() {
        let response = server()
            .get("/api/diagnostics")
            .add_query_param("department_id", "not-a-uuid")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
