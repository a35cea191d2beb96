//! Chat endpoints: validation, provider fallback, response shaping.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::llm::Completion;
use crate::server::AppState;

/// Placeholder metadata values for the enhanced envelope; not measured.
const PROCESSING_TIME_MS: u64 = 0;
const CONFIDENCE_SCORE: f64 = 0.95;

const ERROR_MISSING_MESSAGE: &str = "Message is required";
const ERROR_PROVIDERS_DOWN: &str =
    "Chat providers are currently unavailable. Please try again later.";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default = "default_subject")]
    subject: String,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default, rename = "useRAG")]
    use_rag: bool,
}

fn default_subject() -> String {
    "chemistry".to_string()
}

fn default_language() -> String {
    "si".to_string()
}

#[derive(Serialize)]
struct ChatSuccess {
    success: bool,
    response: String,
    metadata: ChatMetadata,
}

#[derive(Serialize)]
struct ChatMetadata {
    model: String,
    tokens: u32,
    subject: String,
    language: String,
}

#[derive(Serialize)]
struct EnhancedChatSuccess {
    success: bool,
    response: EnhancedAnswer,
    metadata: EnhancedMetadata,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnhancedAnswer {
    main_answer: String,
    sections: Vec<Section>,
    learn_more: Vec<String>,
}

#[derive(Serialize)]
struct Section {
    title: String,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnhancedMetadata {
    model: String,
    processing_time: u64,
    confidence_score: f64,
    sources: Vec<String>,
}

#[derive(Serialize)]
struct ChatFailure {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/chat
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.is_empty() {
        return missing_message();
    }

    match state.chat.complete(&req.message, "").await {
        Ok(completion) => {
            let response = shape_plain(completion, req.subject, req.language);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => providers_down(),
    }
}

/// POST /api/chat/enhanced
pub async fn chat_enhanced(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Response {
    if req.message.is_empty() {
        return missing_message();
    }

    let context = if req.use_rag {
        lookup_context(&req.message)
    } else {
        String::new()
    };

    match state.chat.complete(&req.message, &context).await {
        Ok(completion) => {
            let response = shape_enhanced(completion, &context);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => providers_down(),
    }
}

// ============================================================================
// Response Shaping
// ============================================================================

fn shape_plain(completion: Completion, subject: String, language: String) -> ChatSuccess {
    let Completion {
        content,
        model,
        tokens,
    } = completion;

    ChatSuccess {
        success: true,
        response: content,
        metadata: ChatMetadata {
            model,
            tokens,
            subject,
            language,
        },
    }
}

fn shape_enhanced(completion: Completion, context: &str) -> EnhancedChatSuccess {
    let Completion { content, model, .. } = completion;

    let sources = if context.is_empty() {
        Vec::new()
    } else {
        vec!["Internal Knowledge Base".to_string()]
    };

    EnhancedChatSuccess {
        success: true,
        response: EnhancedAnswer {
            main_answer: content.clone(),
            sections: vec![Section {
                title: "Main Explanation".to_string(),
                content,
            }],
            learn_more: Vec::new(),
        },
        metadata: EnhancedMetadata {
            model,
            processing_time: PROCESSING_TIME_MS,
            confidence_score: CONFIDENCE_SCORE,
            sources,
        },
    }
}

/// Knowledge-base lookup stub. Always empty until retrieval is implemented,
/// so `useRAG` requests behave exactly like plain enhanced requests.
fn lookup_context(_message: &str) -> String {
    String::new()
}

// ============================================================================
// Error Envelopes
// ============================================================================

fn missing_message() -> Response {
    let body = ChatFailure {
        success: false,
        error: ERROR_MISSING_MESSAGE.to_string(),
        details: Some("provide a non-empty 'message' field".to_string()),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Both providers failed. The upstream errors were already logged by the
/// fallback chain; the caller only gets a generic message.
fn providers_down() -> Response {
    let body = ChatFailure {
        success: false,
        error: ERROR_PROVIDERS_DOWN.to_string(),
        details: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

// ============================================================================
// Tests
// ============================================================================
