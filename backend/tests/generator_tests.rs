//! Schedule generator tests against a local text-generation stub
//!
//! Covers:
//! - Generated text is returned verbatim
//! - Missing text, error statuses, and network failures map to the generic error
//! - Only one generation runs at a time, and the flag clears once a call settles

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use aquafarm_backend::config::GenerationConfig;
use aquafarm_backend::external::TextGenerationClient;
use aquafarm_backend::services::ScheduleGenerator;
use aquafarm_backend::AppError;
use axum::{extract::Query, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use shared::GenerateScheduleForm;

// ============================================================================
// Helpers
// ============================================================================

/// Serve a fixed reply on `/generate` and return its URL
async fn spawn_stub(status: StatusCode, body: Value, delay: Duration) -> String {
    let app = Router::new().route(
        "/generate",
        post(move |Query(params): Query<HashMap<String, String>>| {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                if params.get("key").map(String::as_str) != Some("test-key") {
                    return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
                }
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/generate", addr)
}

fn generator(endpoint: String) -> ScheduleGenerator {
    let config = GenerationConfig {
        endpoint,
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        ..GenerationConfig::default()
    };
    ScheduleGenerator::new(TextGenerationClient::new(&config).unwrap())
}

fn form() -> GenerateScheduleForm {
    GenerateScheduleForm {
        farm: "North Valley".to_string(),
        crop: "Soybean".to_string(),
        soil_type: "Silt".to_string(),
        moisture: "42".to_string(),
        method: "Sprinkler System".to_string(),
        efficiency: "75".to_string(),
    }
}

fn reply(text: &str) -> Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_text_returned_verbatim() {
    let text = "Day 1: water 6:00 AM for 2 hours\nDay 3: water 6:00 AM for 1.5 hours";
    let endpoint = spawn_stub(StatusCode::OK, reply(text), Duration::ZERO).await;

    let schedule = generator(endpoint).generate(&form()).await.unwrap();
    assert_eq!(schedule.text, text);
}

#[tokio::test]
async fn test_missing_text_is_generic_failure() {
    let body = json!({"candidates": [{"content": {"parts": []}}]});
    let endpoint = spawn_stub(StatusCode::OK, body, Duration::ZERO).await;

    let err = generator(endpoint).generate(&form()).await.unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_error_status_is_generic_failure() {
    let endpoint = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "overloaded"}),
        Duration::ZERO,
    )
    .await;

    let err = generator(endpoint).generate(&form()).await.unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_generic_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = generator(format!("http://{}/generate", addr))
        .generate(&form())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_second_request_rejected_while_in_flight() {
    let endpoint = spawn_stub(StatusCode::OK, reply("ok"), Duration::from_millis(500)).await;
    let generator = Arc::new(generator(endpoint));

    let first = {
        let generator = generator.clone();
        tokio::spawn(async move { generator.generate(&form()).await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(generator.is_generating());
    let second = generator.generate(&form()).await;
    assert!(matches!(second, Err(AppError::GenerationInProgress)));

    let first = first.await.unwrap();
    assert_eq!(first.unwrap().text, "ok");
    assert!(!generator.is_generating());
}

#[tokio::test]
async fn test_flag_cleared_after_failure() {
    let endpoint = spawn_stub(StatusCode::OK, json!({}), Duration::ZERO).await;
    let generator = generator(endpoint);

    assert!(generator.generate(&form()).await.is_err());
    assert!(!generator.is_generating());

    // A later request is attempted rather than refused
    let err = generator.generate(&form()).await.unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}
