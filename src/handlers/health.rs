//! Service health endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    success: bool,
    status: &'static str,
    version: &'static str,
    features: Vec<&'static str>,
    environment: EnvironmentStatus,
}

/// Which provider keys were actually supplied, without echoing them.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStatus {
    groq_configured: bool,
    deepseek_configured: bool,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        features: vec!["chat", "enhanced-chat", "provider-fallback"],
        environment: EnvironmentStatus {
            groq_configured: state.groq_configured,
            deepseek_configured: state.deepseek_configured,
        },
    })
}
