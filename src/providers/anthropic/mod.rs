//! Anthropic provider adapter.

pub mod client;
pub mod types;

pub use client::AnthropicAssistant;
