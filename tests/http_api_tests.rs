//! Integration tests for the HTTP surface

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use vitalvoice::application::ports::{ExtractionError, Extractor};
use vitalvoice::domain::extraction::Extraction;
use vitalvoice::domain::record::HealthRecord;
use vitalvoice::server::router;

/// Extractor stub returning a canned outcome
struct StubExtractor {
    outcome: Result<Extraction, ExtractionError>,
}

#[async_trait]
impl Extractor for StubExtractor {
    async fn extract(&self, transcript: &str) -> Result<Extraction, ExtractionError> {
        if transcript.trim().is_empty() {
            return Err(ExtractionError::Validation);
        }
        self.outcome.clone()
    }
}

fn sample_record(transcript: &str) -> HealthRecord {
    HealthRecord {
        symptoms: vec!["headache".to_string()],
        medications: vec![],
        mental_state: "calm".to_string(),
        lifestyle_notes: vec![],
        severity: Default::default(),
        doctor_summary: "Mild headache.".to_string(),
        raw_transcript: transcript.to_string(),
    }
}

fn app_with(outcome: Result<Extraction, ExtractionError>) -> axum::Router {
    router(Arc::new(StubExtractor { outcome }))
}

fn post_analyze(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze-health")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn preflight_gets_cors_headers_and_empty_body() {
    let app = app_with(Ok(Extraction::Parsed(sample_record("x"))));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze-health")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("authorization"));
    assert!(allowed.contains("x-client-info"));
    assert!(allowed.contains("apikey"));
    assert!(allowed.contains("content-type"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn successful_analysis_returns_the_record() {
    let app = app_with(Ok(Extraction::Parsed(sample_record("I have a headache"))));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "I have a headache"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );

    let body = json_body(response).await;
    assert_eq!(body["symptoms"], json!(["headache"]));
    assert_eq!(body["raw_transcript"], "I have a headache");
    assert_eq!(body["severity"], "low");
}

#[tokio::test]
async fn recovered_record_is_still_a_success() {
    let record = HealthRecord::fallback("not json");
    let app = app_with(Ok(Extraction::Recovered(record)));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "mumbling"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["doctor_summary"], "not json");
    assert_eq!(body["mental_state"], "unknown");
}

#[tokio::test]
async fn blank_transcript_returns_400() {
    let app = app_with(Ok(Extraction::Parsed(sample_record("x"))));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No transcript provided");
}

#[tokio::test]
async fn missing_transcript_field_returns_400() {
    let app = app_with(Ok(Extraction::Parsed(sample_record("x"))));

    let response = app.oneshot(post_analyze(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No transcript provided");
}

#[tokio::test]
async fn rate_limit_returns_429_with_message() {
    let app = app_with(Err(ExtractionError::RateLimited));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Rate limit exceeded. Please try again later.");
}

#[tokio::test]
async fn quota_exhaustion_returns_402_with_message() {
    let app = app_with(Err(ExtractionError::QuotaExceeded));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Usage limit reached. Please add credits.");
}

#[tokio::test]
async fn upstream_failure_returns_500() {
    let app = app_with(Err(ExtractionError::Upstream("gateway down".to_string())));

    let response = app
        .oneshot(post_analyze(json!({"transcript": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("gateway down"));
}
