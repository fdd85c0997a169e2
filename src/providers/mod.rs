//! Provider implementations for the assistant capabilities.

pub mod anthropic;
pub mod openai;

// Re-export commonly used provider types
pub use anthropic::AnthropicAssistant;
pub use openai::OpenAiAssistant;
