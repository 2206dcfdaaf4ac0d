//! End-to-end tests for the HTTP API over the in-memory repository.
//!
//! The router is exercised directly with `tower::ServiceExt::oneshot`,
//! so these cover routing, extraction, status codes and response bodies
//! without binding a socket.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use swachhata_backend::db::repositories::LocalRepository;
use swachhata_backend::http::{create_router, AppState};

const ADMIN_TOKEN: &str = "secureAdmin123";

fn test_app(admin_token: Option<&str>) -> Router {
    let repo = Arc::new(LocalRepository::new());
    let state = AppState::new(repo, admin_token.map(str::to_string));
    create_router(state, HeaderValue::from_static("http://localhost:3000"))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn valid_submission() -> Value {
    json!({
        "name": "A",
        "email": "a@x.com",
        "locality": "L1"
    })
}

#[tokio::test]
async fn test_submit_valid_returns_created_with_record() {
    let app = test_app(Some(ADMIN_TOKEN));

    let response = app
        .oneshot(post_json("/submit", valid_submission()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Response submitted successfully");
    assert_eq!(body["data"]["name"], "A");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["locality"], "L1");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_submit_with_optional_answers_echoes_them() {
    let app = test_app(Some(ADMIN_TOKEN));

    let payload = json!({
        "name": "A",
        "email": "a@x.com",
        "locality": "L1",
        "segregateWaste": "yes",
        "awareRRR": "no",
        "awareCTLocation": "yes"
    });
    let response = app.oneshot(post_json("/submit", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["segregateWaste"], "yes");
    assert_eq!(body["data"]["awareRRR"], "no");
    assert_eq!(body["data"]["awareCTLocation"], "yes");
    assert_eq!(body["data"]["cleanDrains"], Value::Null);
}

#[tokio::test]
async fn test_submit_missing_required_field_is_bad_request() {
    let app = test_app(Some(ADMIN_TOKEN));

    for payload in [
        json!({"email": "a@x.com", "locality": "L1"}),
        json!({"name": "A", "locality": "L1"}),
        json!({"name": "A", "email": "a@x.com"}),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/submit", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    // Nothing was persisted by the rejected submissions.
    let response = app.oneshot(get("/data")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_submit_ignores_unknown_fields() {
    let app = test_app(Some(ADMIN_TOKEN));

    let payload = json!({
        "name": "A",
        "email": "a@x.com",
        "locality": "L1",
        "notAColumn": "dropped"
    });
    let response = app.oneshot(post_json("/submit", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["data"].get("notAColumn").is_none());
}

#[tokio::test]
async fn test_data_empty_store_returns_empty_array() {
    let app = test_app(Some(ADMIN_TOKEN));

    let response = app.oneshot(get("/data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_data_lists_submitted_records_idempotently() {
    let app = test_app(Some(ADMIN_TOKEN));

    for name in ["A", "B"] {
        let payload = json!({"name": name, "email": "x@x.com", "locality": "L"});
        let response = app
            .clone()
            .oneshot(post_json("/submit", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let first = body_json(app.clone().oneshot(get("/data")).await.unwrap()).await;
    let second = body_json(app.oneshot(get("/data")).await.unwrap()).await;

    assert_eq!(first.as_array().unwrap().len(), 2);
    assert_eq!(first, second);
    assert_eq!(first[0]["name"], "A");
    assert_eq!(first[1]["name"], "B");
}

#[tokio::test]
async fn test_export_wrong_token_is_forbidden_regardless_of_data() {
    let app = test_app(Some(ADMIN_TOKEN));

    // Empty store.
    let response = app
        .clone()
        .oneshot(get("/export?adminToken=wrong"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Non-empty store.
    app.clone()
        .oneshot(post_json("/submit", valid_submission()))
        .await
        .unwrap();
    let response = app.oneshot(get("/export?adminToken=wrong")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_export_missing_token_is_forbidden() {
    let app = test_app(Some(ADMIN_TOKEN));
    let response = app.oneshot(get("/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_export_denied_when_no_token_configured() {
    let app = test_app(None);

    let response = app
        .oneshot(get(&format!("/export?adminToken={}", ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_export_empty_store_is_not_found() {
    let app = test_app(Some(ADMIN_TOKEN));

    let response = app
        .oneshot(get(&format!("/export?adminToken={}", ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No data available for export");
}

#[tokio::test]
async fn test_export_returns_csv_attachment() {
    let app = test_app(Some(ADMIN_TOKEN));
    app.clone()
        .oneshot(post_json("/submit", valid_submission()))
        .await
        .unwrap();

    let response = app
        .oneshot(get(&format!("/export?adminToken={}", ADMIN_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"survey_data.csv\""
    );

    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "name,email,locality,wasteCollectedDaily,segregateWaste,cleanDrains,awareRRR,\
         usedPublicToilet,cleanPublicToilet,awareCTLocation,cleanlinessNeighborhood,\
         cleanlinessCity"
    );
    assert_eq!(lines[1], "A,a@x.com,L1,,,,,,,,,");
}

#[tokio::test]
async fn test_export_row_count_matches_record_count() {
    let app = test_app(Some(ADMIN_TOKEN));
    for i in 0..3 {
        let payload = json!({"name": format!("U{}", i), "email": "u@x.com", "locality": "L"});
        app.clone()
            .oneshot(post_json("/submit", payload))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(get(&format!("/export?adminToken={}", ADMIN_TOKEN)))
        .await
        .unwrap();
    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(csv.split('\n').count(), 4);
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let app = test_app(Some(ADMIN_TOKEN));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_full_scenario_submit_list_export() {
    let app = test_app(Some(ADMIN_TOKEN));

    // Submit one valid response.
    let response = app
        .clone()
        .oneshot(post_json("/submit", valid_submission()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Listing contains it.
    let listed = body_json(app.clone().oneshot(get("/data")).await.unwrap()).await;
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);

    // Wrong token denied, correct token exports one row.
    let denied = app
        .clone()
        .oneshot(get("/export?adminToken=nope"))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let exported = app
        .oneshot(get(&format!("/export?adminToken={}", ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(exported.status(), StatusCode::OK);
    let csv = String::from_utf8(body_bytes(exported).await).unwrap();
    assert!(csv.starts_with("name,email,locality,"));
    assert!(csv.ends_with("A,a@x.com,L1,,,,,,,,,"));
}
