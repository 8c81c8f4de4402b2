use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::questionnaires::handlers;
use crate::features::questionnaires::services::QuestionnaireService;

/// Create routes for the questionnaire catalog
pub fn routes(service: Arc<QuestionnaireService>) -> Router {
    Router::new()
        .route(
            "/api/questionnaires",
            get(handlers::list_questionnaires).post(handlers::create_questionnaire),
        )
        .route(
            "/api/questionnaires/{id}",
            get(handlers::get_questionnaire)
                .put(handlers::update_questionnaire)
                .delete(handlers::delete_questionnaire),
        )
        .route(
            "/api/questionnaires/{id}/questions",
            post(handlers::add_question),
        )
        .route(
            "/api/questionnaires/{id}/questions/{question_id}",
            put(handlers::update_question).delete(handlers::delete_question),
        )
        .with_state(service)
}
