//! HTTP request/response contract for the chat endpoint

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::assistant::{Answer, Assistant};

/// Inbound chat request
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Outbound chat response. `source` is omitted entirely when absent,
/// never serialized as an empty string.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<Answer> for ChatResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.text,
            source: answer.source,
        }
    }
}

pub fn router(assistant: Arc<Assistant>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(assistant)
}

async fn chat(
    State(assistant): State<Arc<Assistant>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let answer = assistant.answer(&request.message).await;
    Json(ChatResponse::from(answer))
}
