use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::error::Result;
use crate::models::{CodeGenRequest, CodeGenResponse, ExplainRequest, ExplainResponse};
use crate::samples;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn generate_code(
    State(state): State<AppState>,
    Json(payload): Json<CodeGenRequest>,
) -> impl IntoResponse {
    // Field validation happens before any completion call
    if let Err(e) = payload.validate() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": e.to_string() })))
            .into_response();
    }

    match run_generate(&state, &payload).await {
        Ok(code) => Json(CodeGenResponse { code }).into_response(),
        Err(e) => {
            error!("Code generation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": e.to_string() })))
                .into_response()
        }
    }
}

pub async fn explain(
    State(state): State<AppState>,
    Json(payload): Json<ExplainRequest>,
) -> impl IntoResponse {
    match run_explain(&state, &payload.code).await {
        Ok(explanation) => Json(ExplainResponse { explanation }).into_response(),
        Err(e) => {
            error!("Explanation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": e.to_string() })))
                .into_response()
        }
    }
}

/// Static example endpoint; identical response on every call
pub async fn example_langchain() -> impl IntoResponse {
    Json(CodeGenResponse { code: samples::langchain_agent().to_string() })
}

async fn run_generate(state: &AppState, payload: &CodeGenRequest) -> Result<String> {
    let client = state.completion_client().await?;
    client.generate_code(payload).await
}

async fn run_explain(state: &AppState, code: &str) -> Result<String> {
    let client = state.completion_client().await?;
    client.explain_code(code).await
}
