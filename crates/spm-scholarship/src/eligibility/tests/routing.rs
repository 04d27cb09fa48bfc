use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::eligibility::intake::StudentSubmission;
use crate::eligibility::router::{check_handler, eligibility_router};
use crate::eligibility::service::EligibilityService;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn check_handler_returns_unprocessable_for_bad_score() {
    let service = Arc::new(EligibilityService::default());
    let submission = StudentSubmission {
        cocurricular_score: 12.0,
        ..form_submission()
    };

    let response = check_handler(State(service), axum::Json(submission)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("co-curricular"));
}

#[tokio::test]
async fn scholarships_route_lists_catalog() {
    let router = eligibility_router(Arc::new(EligibilityService::default()));

    let response = router
        .oneshot(
            Request::get("/api/v1/scholarships")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rules = body.as_array().expect("array of rules");
    assert_eq!(rules.len(), 31);
    assert_eq!(rules[0]["state_requirement"], "all");
    assert_eq!(rules[16]["state_requirement"], json!({ "only": "Selangor" }));
}

#[tokio::test]
async fn eligibility_route_explains_rejections() {
    let router = eligibility_router(Arc::new(EligibilityService::default()));
    let payload = json!({
        "state": "Selangor",
        "cocurricular_score": 8.5,
        "explain": true,
        "grades": [
            { "subject": "Bahasa Melayu", "grade": "A+" },
            { "subject": "Bahasa Inggeris", "grade": "A" },
            { "subject": "Sejarah", "grade": "A-" },
            { "subject": "Matematik", "grade": "A+" },
            { "subject": "Pendidikan Moral", "grade": "A" },
            { "subject": null, "grade": null }
        ]
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/eligibility")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["counts"]["subjects"], 5);
    assert_eq!(body["eligible"].as_array().map(Vec::len), Some(6));
    let first_rejection = &body["rejected"][0];
    assert_eq!(first_rejection["reason"]["gate"], "insufficient_a_grades");
    assert_eq!(first_rejection["reason"]["required"], 9);
}

#[tokio::test]
async fn eligibility_route_rejects_unknown_subject() {
    let router = eligibility_router(Arc::new(EligibilityService::default()));
    let payload = json!({
        "cocurricular_score": 5.0,
        "grades": [{ "subject": "Astronomi", "grade": "A" }]
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/eligibility")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
