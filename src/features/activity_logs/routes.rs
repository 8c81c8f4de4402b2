use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::activity_logs::handlers;
use crate::features::activity_logs::services::ActivityLogService;

/// Create routes for the activity log feature
pub fn routes(service: Arc<ActivityLogService>) -> Router {
    Router::new()
        .route("/api/activity-logs", get(handlers::list_activity_logs))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, test_server};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_rejects_malformed_user_filter() {
        let server = test_server(routes(Arc::new(ActivityLogService::new(lazy_pool()))));

        let response = server
            .get("/api/activity-logs")
            .add_query_param("user_id", "42")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Invalid query parameters"));
    }
}
