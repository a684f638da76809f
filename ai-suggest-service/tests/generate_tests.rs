//! Generation-call tests against a mock inference endpoint.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ai_suggest_service::{OllamaService, SuggestConfig, SuggestError};

fn service_for(endpoint: String) -> OllamaService {
    OllamaService::new(SuggestConfig {
        model: "llama3".into(),
        endpoint,
        timeout_secs: Some(5),
    })
    .expect("service should build")
}

#[tokio::test]
async fn generate_sends_the_fixed_non_streaming_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "llama3",
            "prompt": "say hi",
            "stream": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "hi there" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = service_for(server.uri())
        .generate("say hi")
        .await
        .expect("generation should succeed");

    assert_eq!(text, "hi there");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_snippet() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let err = service_for(server.uri())
        .generate("say hi")
        .await
        .expect_err("500 should fail");

    match err {
        SuggestError::HttpStatus { status, snippet } => {
            assert_eq!(status.as_u16(), 500);
            assert!(snippet.contains("model not loaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Nothing listens on this port; the connection is refused outright.
    let err = service_for("http://127.0.0.1:1".into())
        .generate("say hi")
        .await
        .expect_err("refused connection should fail");

    assert!(matches!(err, SuggestError::Transport(_)));
}

#[test]
fn rejects_a_non_http_endpoint() {
    let result = OllamaService::new(SuggestConfig {
        model: "llama3".into(),
        endpoint: "localhost:11434".into(),
        timeout_secs: None,
    });

    assert!(matches!(result, Err(SuggestError::InvalidEndpoint(_))));
}
