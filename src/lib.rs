//! Kemibot - backend chat API for a chemistry tutoring assistant.
//!
//! Requests are forwarded to OpenAI-compatible chat-completion providers
//! with a primary-to-secondary fallback and reshaped into a fixed JSON
//! envelope.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod server;
