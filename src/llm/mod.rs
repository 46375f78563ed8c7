pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::models::CodeGenRequest;

const CODEGEN_TEMPERATURE: f32 = 0.2;
const CODEGEN_MAX_TOKENS: u32 = 1600;
const EXPLAIN_TEMPERATURE: f32 = 0.3;
const EXPLAIN_MAX_TOKENS: u32 = 1200;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the hosted chat-completions API. One instance is built lazily
/// and reused across requests.
#[derive(Debug)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    explain_model: String,
}

impl CompletionClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(PortalError::MissingApiKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            explain_model: config.explain_model.clone(),
        })
    }

    pub async fn generate_code(&self, req: &CodeGenRequest) -> Result<String> {
        let prompt = prompts::build_codegen_prompt(req);
        self.complete(
            &req.model,
            prompts::CODEGEN_SYSTEM,
            &prompt,
            CODEGEN_TEMPERATURE,
            CODEGEN_MAX_TOKENS,
        )
        .await
    }

    pub async fn explain_code(&self, code: &str) -> Result<String> {
        let prompt = prompts::build_explain_prompt(code);
        self.complete(
            &self.explain_model,
            prompts::EXPLAIN_SYSTEM,
            &prompt,
            EXPLAIN_TEMPERATURE,
            EXPLAIN_MAX_TOKENS,
        )
        .await
    }

    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let body = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature,
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        info!("Completion request to {} (model={})", url, model);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PortalError::Api { status: status.as_u16(), message });
        }

        let completion: ChatCompletionResponse = resp.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or(PortalError::EmptyCompletion)?
            .message
            .content
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
