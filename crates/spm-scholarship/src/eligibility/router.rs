use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::intake::StudentSubmission;
use super::service::EligibilityService;

/// Router builder exposing the scholarship table and the eligibility check.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/scholarships", get(catalog_handler))
        .route("/api/v1/eligibility", post(check_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog())).into_response()
}

pub(crate) async fn check_handler(
    State(service): State<Arc<EligibilityService>>,
    axum::Json(submission): axum::Json<StudentSubmission>,
) -> Response {
    match service.check(&submission) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            warn!(%error, "rejected eligibility submission");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
