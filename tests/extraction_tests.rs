//! Integration tests for the extraction service against a mock gateway

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitalvoice::application::ports::{ExtractionError, Extractor};
use vitalvoice::application::ExtractionService;
use vitalvoice::domain::record::{Severity, SUMMARY_PLACEHOLDER, UNKNOWN_STATE};
use vitalvoice::infrastructure::AiGatewayClient;

fn service_for(server: &MockServer) -> ExtractionService<AiGatewayClient> {
    let client = AiGatewayClient::with_endpoint("test-key", server.uri(), "test-model");
    ExtractionService::new(client)
}

fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn valid_json_reply_becomes_parsed_record() {
    let server = MockServer::start().await;

    let reply = json!({
        "symptoms": ["headache", "nausea"],
        "medications": [{"name": "ibuprofen", "timing": "this morning"}],
        "mental_state": "stressed",
        "lifestyle_notes": ["slept 5 hours"],
        "severity": "high",
        "doctor_summary": "Patient reports headache and nausea under stress."
    });

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(&reply.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let extraction = service
        .extract("I have a headache and feel nauseous, took ibuprofen this morning")
        .await
        .unwrap();

    assert!(!extraction.is_recovered());
    let record = extraction.record();
    assert_eq!(record.symptoms, vec!["headache", "nausea"]);
    assert_eq!(record.medications[0].name, "ibuprofen");
    assert_eq!(record.severity, Severity::High);
    assert_eq!(
        record.raw_transcript,
        "I have a headache and feel nauseous, took ibuprofen this morning"
    );
}

#[tokio::test]
async fn prose_reply_yields_the_fallback_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(
            "I'm sorry, I can't produce structured output for that.",
        )))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let extraction = service.extract("just rambling").await.unwrap();

    assert!(extraction.is_recovered());
    let record = extraction.record();
    assert!(record.symptoms.is_empty());
    assert!(record.medications.is_empty());
    assert!(record.lifestyle_notes.is_empty());
    assert_eq!(record.mental_state, UNKNOWN_STATE);
    assert_eq!(record.severity, Severity::Low);
    assert_eq!(
        record.doctor_summary,
        "I'm sorry, I can't produce structured output for that."
    );
    assert_eq!(record.raw_transcript, "just rambling");
}

#[tokio::test]
async fn empty_reply_resolves_to_the_placeholder_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("")))
        .mount(&server)
        .await;

    let extraction = service_for(&server).extract("feeling okay").await.unwrap();
    assert!(extraction.is_recovered());

    let record = extraction.record();
    assert_eq!(record.doctor_summary, SUMMARY_PLACEHOLDER);
    assert_eq!(record.mental_state, UNKNOWN_STATE);
    assert_eq!(record.raw_transcript, "feeling okay");
}

#[tokio::test]
async fn whitespace_reply_resolves_to_the_placeholder_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("   ")))
        .mount(&server)
        .await;

    let extraction = service_for(&server).extract("hello").await.unwrap();
    assert!(extraction.is_recovered());
    assert_eq!(extraction.record().doctor_summary, SUMMARY_PLACEHOLDER);
}

#[tokio::test]
async fn parsed_record_without_summary_gets_the_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply(r#"{"symptoms": ["dizziness"]}"#)),
        )
        .mount(&server)
        .await;

    let extraction = service_for(&server).extract("feeling dizzy").await.unwrap();
    assert!(!extraction.is_recovered());

    let record = extraction.record();
    assert_eq!(record.symptoms, vec!["dizziness"]);
    assert_eq!(record.doctor_summary, SUMMARY_PLACEHOLDER);
    assert_eq!(record.mental_state, UNKNOWN_STATE);
}

#[tokio::test]
async fn truncated_json_falls_back_to_the_raw_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("{\"symptoms\": [\"hea")))
        .mount(&server)
        .await;

    let extraction = service_for(&server).extract("hello").await.unwrap();
    assert!(extraction.is_recovered());
    assert_eq!(extraction.record().doctor_summary, "{\"symptoms\": [\"hea");
}

#[tokio::test]
async fn fenced_json_with_surrounding_prose_is_parsed() {
    let server = MockServer::start().await;

    let content = "Here is the structured record you asked for:\n```json\n{\"symptoms\": [\"cough\"], \"severity\": \"medium\", \"doctor_summary\": \"Dry cough.\"}\n```\nLet me know if you need anything else.";

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let extraction = service.extract("I keep coughing").await.unwrap();

    assert!(!extraction.is_recovered());
    let record = extraction.record();
    assert_eq!(record.symptoms, vec!["cough"]);
    assert_eq!(record.severity, Severity::Medium);
    assert_eq!(record.doctor_summary, "Dry cough.");
}

#[tokio::test]
async fn gateway_429_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = service_for(&server).extract("hello").await.unwrap_err();
    assert!(matches!(err, ExtractionError::RateLimited));
    assert_eq!(
        err.to_string(),
        "Rate limit exceeded. Please try again later."
    );
}

#[tokio::test]
async fn gateway_402_maps_to_quota_exceeded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let err = service_for(&server).extract("hello").await.unwrap_err();
    assert!(matches!(err, ExtractionError::QuotaExceeded));
    assert_eq!(err.to_string(), "Usage limit reached. Please add credits.");
}

#[tokio::test]
async fn gateway_500_maps_to_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = service_for(&server).extract("hello").await.unwrap_err();
    assert!(matches!(err, ExtractionError::Upstream(_)));
}

#[tokio::test]
async fn identical_replies_yield_identical_extractions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(
            r#"{"symptoms": ["fatigue"], "doctor_summary": "Tired."}"#,
        )))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let first = service.extract("so tired").await.unwrap();
    let second = service.extract("so tired").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn blank_transcript_never_reaches_the_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server).extract("   \n ").await.unwrap_err();
    assert!(matches!(err, ExtractionError::Validation));
}
