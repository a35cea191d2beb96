//! Service index endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    message: &'static str,
    version: &'static str,
    endpoints: Vec<&'static str>,
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Kemibot chat API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec!["/api/health", "/api/chat", "/api/chat/enhanced"],
    })
}
