use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::scoring::domain::EmploymentStatus;
use crate::scoring::router::{score_handler, scoring_router};

use super::common::*;

fn score_request(payload: &Value) -> Request<Body> {
    Request::post("/api/v1/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn score_route_returns_assessment() {
    let router = scoring_router(service());
    let payload = json!({
        "applicant_income": 100000,
        "loan_amount": 150000,
        "loan_term_months": 180,
        "credit_history_months": 96,
        "employment_status": "employed",
        "property_area": "urban",
        "dependents": 1,
        "education": "graduate",
        "existing_debt": 5000
    });

    let response = router
        .oneshot(score_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["risk_category"], "LOW");
    assert_eq!(body["approval_recommendation"], "APPROVE");
    assert!(body["risk_score"].as_u64().expect("integer score") >= 70);
    assert!(body["confidence"].is_f64());
    assert!(body["key_factors"]["positive"].is_array());
    assert!(body["key_factors"]["negative"].is_array());
    assert!(body["application_id"]
        .as_str()
        .expect("id string")
        .starts_with("APP-"));
    assert!(body["processed_at"].is_string());
}

#[tokio::test]
async fn score_route_declines_high_risk_applicant() {
    let router = scoring_router(service());
    let payload = json!({
        "applicant_income": 20000,
        "loan_amount": 200000,
        "loan_term_months": 360,
        "credit_history_months": 6,
        "employment_status": "unemployed",
        "property_area": "rural",
        "dependents": 4,
        "education": "not_graduate",
        "existing_debt": 15000
    });

    let response = router
        .oneshot(score_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["risk_category"], "HIGH");
    assert_eq!(body["approval_recommendation"], "DECLINE");
    assert_eq!(body["risk_score"], 0);
}

#[tokio::test]
async fn score_route_rejects_negative_income() {
    let router = scoring_router(service());
    let payload = json!({
        "applicant_income": -1000,
        "loan_amount": 150000,
        "loan_term_months": 360,
        "credit_history_months": 84,
        "employment_status": "employed",
        "property_area": "urban",
        "dependents": 2,
        "education": "graduate",
        "existing_debt": 15000
    });

    let response = router
        .oneshot(score_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("applicant_income"));
}

#[tokio::test]
async fn score_route_rejects_missing_fields() {
    let router = scoring_router(service());
    let payload = json!({ "applicant_income": 50000 });

    let response = router
        .oneshot(score_request(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn score_handler_recovers_from_unknown_employment() {
    let mut application = nominal_application();
    application.employment_status = EmploymentStatus::parse("contractor");

    let response = score_handler(State(service()), Json(application)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["risk_score"], 65);
    assert_eq!(body["risk_category"], "MEDIUM");
    assert_eq!(body["approval_recommendation"], "REVIEW");
}

#[tokio::test]
async fn model_info_route_returns_static_metadata() {
    let router = scoring_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/model/info")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["model_name"], "Credit Risk Assessment Model");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["accuracy"].is_f64());
    assert_eq!(body["features"].as_array().map(Vec::len), Some(9));
    assert_eq!(body["trained_on"], "2026-02-01");
}

#[tokio::test]
async fn model_features_route_describes_inputs() {
    let router = scoring_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/model/features")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["required_features"]["applicant_income"]["type"], "number");
    assert_eq!(body["example"]["loan_term_months"], 360);
    assert_eq!(body["example"]["employment_status"], "employed");
}
