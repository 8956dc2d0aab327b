use std::time::Duration;

use ai_llm_service::{AiLlmError, LlmModelConfig, OpenAiService, ProviderErrorKind};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cfg_for(server: &MockServer, max_retries: u32) -> LlmModelConfig {
    LlmModelConfig {
        model: "gpt-4o-mini".into(),
        endpoint: server.uri(),
        api_key: Some("test-key".into()),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: Some(5),
        max_retries,
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

#[tokio::test]
async fn generate_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [ { "role": "user", "content": "ping" } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    let out = svc.generate("ping").await.unwrap();
    assert_eq!(out, "pong");
}

#[tokio::test]
async fn generate_skips_choices_without_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "content": null } },
                { "message": { "content": "second" } }
            ]
        })))
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    assert_eq!(svc.generate("x").await.unwrap(), "second");
}

#[tokio::test]
async fn generate_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"bad key\"}"))
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    match svc.generate("x").await {
        Err(AiLlmError::Provider(p)) => {
            assert_eq!(p.status().map(|s| s.as_u16()), Some(401));
            assert!(matches!(p.kind, ProviderErrorKind::HttpStatus(_)));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn generate_reports_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    let err = svc.generate("x").await.unwrap_err();
    assert!(matches!(
        err,
        AiLlmError::Provider(ref p) if matches!(p.kind, ProviderErrorKind::EmptyChoices)
    ));
}

#[tokio::test]
async fn generate_reports_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    let err = svc.generate("x").await.unwrap_err();
    assert!(matches!(
        err,
        AiLlmError::Provider(ref p) if matches!(p.kind, ProviderErrorKind::Decode(_))
    ));
}

#[tokio::test]
async fn transient_failure_is_retried_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("recovered")))
        .expect(1)
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 2)).unwrap();
    assert_eq!(svc.generate("x").await.unwrap(), "recovered");
}

#[tokio::test]
async fn transient_failure_is_not_retried_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let svc = OpenAiService::new(cfg_for(&server, 0)).unwrap();
    let err = svc.generate("x").await.unwrap_err();
    assert!(matches!(err, AiLlmError::Provider(_)));
}

#[tokio::test]
async fn timeout_stays_a_timeout_when_retries_are_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut cfg = cfg_for(&server, 1);
    cfg.timeout_secs = Some(1);
    let svc = OpenAiService::new(cfg).unwrap();

    let err = svc.generate("x").await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err:?}");
    assert!(matches!(err, AiLlmError::Timeout(d) if d == Duration::from_secs(1)));
}
