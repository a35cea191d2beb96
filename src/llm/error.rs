//! Chat provider error types.

use thiserror::Error;

/// Errors that can occur when calling a chat provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response with no completion choices
    #[error("provider returned no completion choices")]
    EmptyCompletion,
}

/// Every configured provider rejected the request.
///
/// Deliberately carries no upstream detail; per-provider failures are
/// logged where they occur and must not reach the caller.
#[derive(Debug, Error)]
#[error("all chat providers are currently unavailable")]
pub struct ProvidersUnavailable;
