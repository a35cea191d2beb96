//! Sequential provider fallback.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::ProvidersUnavailable;
use super::provider::{ChatProvider, OpenAiChatClient, ProviderConfig};
use super::types::Completion;
use crate::config::Config;

/// Ordered chain of chat providers, tried in turn.
///
/// Each provider is tried exactly once per request; the first success wins
/// and later providers are never invoked.
#[derive(Clone)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn ChatProvider>>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn ChatProvider>>) -> Self {
        Self { providers }
    }

    /// Build the Groq-then-DeepSeek chain from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let groq = OpenAiChatClient::new(ProviderConfig::groq(config.groq_api_key()));
        info!(model = groq.model(), "registered primary chat provider");

        let deepseek =
            OpenAiChatClient::new(ProviderConfig::deepseek(config.deepseek_api_key()));
        info!(model = deepseek.model(), "registered fallback chat provider");

        Self::new(vec![Arc::new(groq), Arc::new(deepseek)])
    }

    /// Run the fallback protocol for one request.
    ///
    /// Provider failures are logged and swallowed here; the caller only
    /// ever sees the terminal `ProvidersUnavailable`.
    pub async fn complete(
        &self,
        message: &str,
        context: &str,
    ) -> Result<Completion, ProvidersUnavailable> {
        for provider in &self.providers {
            match provider.complete(message, context).await {
                Ok(completion) => return Ok(completion),
                Err(e) => {
                    warn!(model = provider.model(), error = %e, "chat provider failed");
                }
            }
        }

        Err(ProvidersUnavailable)
    }
}
