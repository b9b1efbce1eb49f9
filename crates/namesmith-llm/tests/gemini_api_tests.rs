//! Integration tests for the Gemini backend against a mock server.

use namesmith_llm::{CompletionError, GeminiClient, TextCompletion};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    // No retries: failure tests should settle on the first response.
    GeminiClient::with_max_retries("test-key", 0)
        .with_base_url(server.uri())
        .with_model("gemini-2.5-flash")
}

#[tokio::test]
async fn returns_joined_candidate_text_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "{\"ideas\": [\"Code Forge\","},
                        {"text": " \"Byte Garden\"]}"}
                    ]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .complete("prompt")
        .await
        .expect("success response should yield text");

    assert!(text.contains("Code Forge"));
    assert!(text.contains("Byte Garden"));
}

#[tokio::test]
async fn sends_prompt_in_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "the actual prompt"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).complete("the actual prompt").await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn http_429_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let err = client_for(&server).complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::RateLimited));
}

#[tokio::test]
async fn quota_error_body_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error": {"message": "Quota exceeded for project"}}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::RateLimited));
}

#[tokio::test]
async fn safety_finish_reason_maps_to_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::Filtered));
}

#[tokio::test]
async fn server_error_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server).complete("prompt").await.unwrap_err();
    match err {
        CompletionError::Unavailable(message) => {
            assert!(message.contains("500"), "unexpected message: {message}")
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = client_for(&server).complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::Unavailable(_)));
}

#[tokio::test]
async fn empty_candidate_list_yields_empty_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let text = client_for(&server).complete("prompt").await.unwrap();
    assert!(text.is_empty());
}
