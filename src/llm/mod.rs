//! Chat-completion provider clients and fallback orchestration.

mod error;
mod fallback;
mod provider;
mod types;

pub use error::{ProviderError, ProvidersUnavailable};
pub use fallback::FallbackChain;
pub use provider::{ChatProvider, OpenAiChatClient, ProviderConfig};
pub use types::{Completion, CompletionRequest, CompletionResponse, Message, Role};
