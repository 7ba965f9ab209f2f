//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against a stub classifier.

mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration as ChronoDuration;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{body_to_json, stub_state, CountingClassifier};
use project_advisor::api::create_router;
use project_advisor::cache::{Clock, ManualClock, DEFAULT_TTL_SECS};

// == Helper Functions ==

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// "Build API" project: 2 of 10 tasks done, deadline `days_out` days away.
fn build_api_project(clock: &ManualClock, days_out: i64) -> Value {
    let mut tasks = Vec::new();
    for i in 0..2 {
        tasks.push(json!({ "description": format!("Finished step {}", i), "status": "completed" }));
    }
    for i in 0..8 {
        tasks.push(json!({ "description": format!("Open step {}", i), "status": "todo" }));
    }
    json!({
        "description": "Build API",
        "deadline": (clock.now() + ChronoDuration::days(days_out)).to_rfc3339(),
        "tasks": tasks,
    })
}

async fn analyze(app: &Router, project: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(post_json("/api/ai/risk-analysis", project.clone()))
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Risk Analysis Tests ==

#[tokio::test]
async fn test_risk_analysis_end_to_end() {
    let classifier = CountingClassifier::answering("high risk");
    let (state, clock) = stub_state(classifier.clone());
    let app = create_router(state);

    let (status, json) = analyze(&app, &build_api_project(&clock, 3)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["riskLevel"], "high");
    assert_eq!(
        json["data"]["riskFactors"],
        json!(["Low task completion rate", "Approaching deadline"])
    );
    assert_eq!(
        json["data"]["mitigationSuggestions"],
        json!([
            "Consider breaking down complex tasks into smaller, manageable pieces",
            "Schedule daily progress reviews",
            "Allocate additional resources to critical path tasks",
            "Establish contingency plans for high-risk areas"
        ])
    );
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn test_risk_analysis_cache_hit_skips_classifier() {
    let classifier = CountingClassifier::answering("medium risk");
    let (state, clock) = stub_state(classifier.clone());
    let app = create_router(state);
    let project = build_api_project(&clock, 20);

    let (_, first) = analyze(&app, &project).await;
    clock.advance(Duration::from_secs(DEFAULT_TTL_SECS - 1));
    let (_, second) = analyze(&app, &project).await;

    assert_eq!(first, second);
    assert_eq!(classifier.calls(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/ai/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_risk_analysis_refreshes_after_ttl() {
    let classifier = CountingClassifier::answering("low risk");
    let (state, clock) = stub_state(classifier.clone());
    let app = create_router(state);
    let project = build_api_project(&clock, 20);

    analyze(&app, &project).await;
    clock.advance(Duration::from_secs(DEFAULT_TTL_SECS + 1));
    let (status, _) = analyze(&app, &project).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_risk_analysis_different_input_misses() {
    let classifier = CountingClassifier::answering("low risk");
    let (state, clock) = stub_state(classifier.clone());
    let app = create_router(state);

    analyze(&app, &build_api_project(&clock, 20)).await;
    analyze(&app, &build_api_project(&clock, 21)).await;

    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_risk_analysis_empty_tasks() {
    let classifier = CountingClassifier::answering("low risk");
    let (state, clock) = stub_state(classifier);
    let app = create_router(state);
    let project = json!({
        "description": "New initiative",
        "dueDate": (clock.now() + ChronoDuration::days(90)).to_rfc3339(),
        "tasks": [],
    });

    let (status, json) = analyze(&app, &project).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["riskFactors"], json!([]));
}

#[tokio::test]
async fn test_risk_analysis_failure() {
    let classifier = CountingClassifier::failing();
    let (state, clock) = stub_state(classifier.clone());
    let advisor = state.advisor.clone();
    let app = create_router(state);

    let (status, json) = analyze(&app, &build_api_project(&clock, 3)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        json,
        json!({ "success": false, "error": "Failed to analyze project risks" })
    );
    assert!(advisor.cache().is_empty());
}

#[tokio::test]
async fn test_risk_analysis_missing_fields() {
    let (state, _) = stub_state(CountingClassifier::answering("low risk"));
    let app = create_router(state);

    let response = app
        .oneshot(post_json("/api/ai/risk-analysis", json!({ "description": "x" })))
        .await
        .unwrap();

    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

// == Priority / Category Tests ==

#[tokio::test]
async fn test_priority_endpoint() {
    let classifier = CountingClassifier::answering("high priority");
    let (state, _) = stub_state(classifier.clone());
    let app = create_router(state);
    let body = json!({ "description": "Patch the authentication bypass in production" });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/api/ai/priority", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json, json!({ "success": true, "data": "high priority" }));
    }

    // Never cached
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_category_endpoint() {
    let (state, _) = stub_state(CountingClassifier::answering("design"));
    let app = create_router(state);

    let response = app
        .oneshot(post_json(
            "/api/ai/category",
            json!({ "description": "Create mockups for the dashboard widgets" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"], "design");
}

#[tokio::test]
async fn test_category_failure() {
    let (state, _) = stub_state(CountingClassifier::failing());
    let app = create_router(state);

    let response = app
        .oneshot(post_json(
            "/api/ai/category",
            json!({ "description": "Create mockups for the dashboard widgets" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Failed to suggest category");
}

#[tokio::test]
async fn test_priority_blank_description() {
    let classifier = CountingClassifier::answering("high priority");
    let (state, _) = stub_state(classifier.clone());
    let app = create_router(state);

    let response = app
        .oneshot(post_json("/api/ai/priority", json!({ "description": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("empty"));
    assert_eq!(classifier.calls(), 0);
}

// == Summarize Tests ==

#[tokio::test]
async fn test_summarize_failure() {
    let (state, _) = stub_state(CountingClassifier::failing());
    let app = create_router(state);

    let response = app
        .oneshot(post_json(
            "/api/ai/summarize",
            json!({ "description": "Long description of the quarterly roadmap." }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Failed to summarize description");
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let (state, _) = stub_state(CountingClassifier::answering("low risk"));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ai/risk-analysis")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 400 or 422 for JSON parsing errors
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let (state, _) = stub_state(CountingClassifier::answering("low risk"));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}
