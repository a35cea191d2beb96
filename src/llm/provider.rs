//! Chat provider trait and the OpenAI-compatible client.
//!
//! Groq and DeepSeek both speak the OpenAI chat-completions format, so a
//! single client covers both; only the `ProviderConfig` differs.

use async_trait::async_trait;
use reqwest::Client;

use super::error::ProviderError;
use super::types::{Completion, CompletionRequest, CompletionResponse, Message, Role};

/// Fixed instruction prepended to every outbound conversation.
const SYSTEM_INSTRUCTION: &str = "Si prijazen učitelj kemije za srednješolce. \
    Odgovarjaj v slovenščini, jasno in po korakih, s pravilno kemijsko \
    terminologijo. Kadar je smiselno, dodaj preprost primer ali enačbo.";

/// Static per-provider settings, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ProviderConfig {
    /// Primary provider.
    pub fn groq(api_key: String) -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key,
            model: "llama-3.3-70b-versatile".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    /// Secondary provider.
    pub fn deepseek(api_key: String) -> Self {
        Self {
            endpoint: "https://api.deepseek.com/v1/chat/completions".to_string(),
            api_key,
            model: "deepseek-chat".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Model label reported in response metadata.
    fn model(&self) -> &str;

    /// Make one chat completion request. No internal retry.
    async fn complete(&self, message: &str, context: &str) -> Result<Completion, ProviderError>;
}

/// Client for OpenAI-compatible chat completion APIs.
pub struct OpenAiChatClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiChatClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        message: &str,
        context: &str,
    ) -> Result<Completion, ProviderError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(message, context),
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let CompletionResponse { choices, usage } = response.json().await?;

        let content = choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ProviderError::EmptyCompletion)?;

        Ok(Completion {
            content,
            model: self.config.model.clone(),
            tokens: usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }
}

/// Build the outbound conversation: system instruction first, user message
/// second. Context, when present, is appended to the instruction.
fn build_messages(message: &str, context: &str) -> Vec<Message> {
    let system = if context.is_empty() {
        SYSTEM_INSTRUCTION.to_string()
    } else {
        format!("{SYSTEM_INSTRUCTION}\n\n{context}")
    };

    vec![
        Message {
            role: Role::System,
            content: system,
        },
        Message {
            role: Role::User,
            content: message.to_string(),
        },
    ]
}
