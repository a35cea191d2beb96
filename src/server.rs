use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::llm::FallbackChain;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat: FallbackChain,
    pub groq_configured: bool,
    pub deepseek_configured: bool,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat/enhanced", post(handlers::chat_enhanced))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
