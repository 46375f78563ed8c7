use agent_portal::config::Config;
use agent_portal::llm::CompletionClient;
use agent_portal::models::CodeGenRequest;
use agent_portal::PortalError;
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;

fn mock_config(server: &MockServer) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        base_url: server.base_url(),
        explain_model: "llama3-8b-8192".to_string(),
    }
}

fn codegen_request() -> CodeGenRequest {
    CodeGenRequest {
        framework: "LangChain".to_string(),
        model: "llama3-70b-8192".to_string(),
        goal: "research assistant".to_string(),
        num_agents: 2,
        tools: vec!["search".to_string()],
        memory: None,
    }
}

#[tokio::test]
async fn generate_code_sends_bearer_auth_and_prompt() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer test-key")
            .body_contains("Framework: LangChain")
            .body_contains("llama3-70b-8192");
        then.status(200).json_body(json!({
            "choices": [{"message": {"content": "  print('ok')  "}}]
        }));
    });

    let client = CompletionClient::from_config(&mock_config(&server))?;
    let code = client.generate_code(&codegen_request()).await?;

    // Leading/trailing whitespace from the model is stripped
    assert_eq!(code, "print('ok')");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn explain_uses_configured_model() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .body_contains("\"model\":\"llama3-8b-8192\"")
            .body_contains("```python");
        then.status(200).json_body(json!({
            "choices": [{"message": {"content": "It prints a greeting."}}]
        }));
    });

    let client = CompletionClient::from_config(&mock_config(&server))?;
    let explanation = client.explain_code("print('hi')").await?;

    assert_eq!(explanation, "It prints a greeting.");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn upstream_error_is_surfaced() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(429).body("rate limit exceeded");
    });

    let client = CompletionClient::from_config(&mock_config(&server))?;
    let err = client.explain_code("print('hi')").await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("429"));
    assert!(msg.contains("rate limit exceeded"));
    Ok(())
}

#[tokio::test]
async fn empty_choices_is_an_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(json!({"choices": []}));
    });

    let client = CompletionClient::from_config(&mock_config(&server))?;
    let err = client.explain_code("print('hi')").await.unwrap_err();
    assert!(matches!(err, PortalError::EmptyCompletion));
    Ok(())
}

#[test]
fn missing_api_key_fails_client_construction() {
    let config = Config {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
        explain_model: "llama3-8b-8192".to_string(),
    };
    let err = CompletionClient::from_config(&config).unwrap_err();
    assert!(matches!(err, PortalError::MissingApiKey));
}
