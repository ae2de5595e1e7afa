use httpmock::prelude::*;
use serde_json::json;
use tinyreact_core::{CompletionRequest, ReactError, Runnable};
use tinyreact_llm::{ModelConfig, OllamaClient};

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::new(ModelConfig::new().base_url(server.url("")).model("mistral"))
        .expect("client")
}

#[tokio::test]
async fn ollama_invoke_maps_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200).json_body(json!({
            "message": {"role": "assistant", "content": "hello"},
            "done": true
        }));
    });

    let resp = client_for(&server)
        .invoke(CompletionRequest::new("hi"))
        .await
        .expect("invoke");
    assert_eq!(resp, "hello");
    mock.assert();
}

#[tokio::test]
async fn ollama_sends_prompt_and_stop_sequence() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/chat").json_body_partial(
            r#"{
                "model": "mistral",
                "stream": false,
                "messages": [{"role": "user", "content": "Question: x"}],
                "options": {"temperature": 0.0, "stop": ["\nObservation"]}
            }"#,
        );
        then.status(200).json_body(json!({
            "message": {"role": "assistant", "content": "Final Answer: 3"},
            "done": true
        }));
    });

    let request =
        CompletionRequest::new("Question: x").with_stop(vec!["\nObservation".to_string()]);
    let resp = client_for(&server).invoke(request).await.expect("invoke");
    assert_eq!(resp, "Final Answer: 3");
    mock.assert();
}

#[tokio::test]
async fn ollama_truncates_when_server_ignores_stop() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200).json_body(json!({
            "message": {
                "role": "assistant",
                "content": "Action: get_text_length\nAction Input: 'abc'\nObservation: 42"
            },
            "done": true
        }));
    });

    let request = CompletionRequest::new("q").with_stop(vec!["\nObservation".to_string()]);
    let resp = client_for(&server).invoke(request).await.expect("invoke");
    assert_eq!(resp, "Action: get_text_length\nAction Input: 'abc'");
}

#[tokio::test]
async fn ollama_maps_http_errors_to_provider_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(500).body("model not loaded");
    });

    let err = client_for(&server)
        .invoke(CompletionRequest::new("q"))
        .await
        .unwrap_err();
    assert!(matches!(err, ReactError::LlmProvider(_)));
}

#[tokio::test]
async fn plain_prompts_use_configured_stop_sequences() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .json_body_partial(r#"{"options": {"stop": ["\nObservation"]}}"#);
        then.status(200).json_body(json!({
            "message": {"role": "assistant", "content": " I should count.\nAction: get_text_length"},
            "done": true
        }));
    });

    let client = OllamaClient::new(
        ModelConfig::new()
            .base_url(server.url(""))
            .stop(vec!["\nObservation".to_string()]),
    )
    .expect("client");
    let resp = client.invoke("Question: x".to_string()).await.expect("invoke");
    assert_eq!(resp, " I should count.\nAction: get_text_length");
    mock.assert();
}
