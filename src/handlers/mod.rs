//! HTTP request handlers.

mod chat;
mod health;
mod index;

pub use chat::{ChatRequest, chat, chat_enhanced};
pub use health::health;
pub use index::index;
