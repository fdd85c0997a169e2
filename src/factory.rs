use crate::provider::TextCompletion;
use crate::{AnthropicAssistant, Error, OpenAiAssistant};
use std::env;

/// Supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

/// Configuration for creating an assistant adapter. Built once per
/// session or settings change; adapters are reconstructed, not mutated.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AssistantConfig {
    /// Configuration for the OpenAI provider.
    pub fn openai(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            api_key,
            model,
            max_tokens,
        }
    }

    /// Configuration for the Anthropic provider.
    pub fn anthropic(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            kind: ProviderKind::Anthropic,
            api_key,
            model,
            max_tokens,
        }
    }

    /// Read configuration from environment variables.
    ///
    /// `PROVIDER_KIND` selects the provider (`openai` / `anthropic`);
    /// otherwise whichever of `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` is
    /// set wins, OpenAI first. `ASSISTANT_MODEL` is required;
    /// `ASSISTANT_MAX_TOKENS` defaults to 1024.
    pub fn from_env() -> Result<Self, Error> {
        let model = env::var("ASSISTANT_MODEL")
            .map_err(|_| Error::config("ASSISTANT_MODEL environment variable is required"))?;
        let max_tokens = match env::var("ASSISTANT_MAX_TOKENS") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::config("ASSISTANT_MAX_TOKENS must be an integer"))?,
            Err(_) => 1024,
        };

        if let Ok(kind) = env::var("PROVIDER_KIND") {
            return match kind.to_lowercase().as_str() {
                "openai" => {
                    let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
                        Error::config("OPENAI_API_KEY is required for the OpenAI provider")
                    })?;
                    Ok(Self::openai(api_key, model, max_tokens))
                }
                "anthropic" => {
                    let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
                        Error::config("ANTHROPIC_API_KEY is required for the Anthropic provider")
                    })?;
                    Ok(Self::anthropic(api_key, model, max_tokens))
                }
                other => Err(Error::config(format!(
                    "Invalid PROVIDER_KIND '{other}'. Valid values are: openai, anthropic"
                ))),
            };
        }

        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            return Ok(Self::openai(api_key, model, max_tokens));
        }
        if let Ok(api_key) = env::var("ANTHROPIC_API_KEY") {
            return Ok(Self::anthropic(api_key, model, max_tokens));
        }

        Err(Error::config(
            "No API credentials found in environment. Set PROVIDER_KIND with the matching API key",
        ))
    }
}

/// Factory for creating assistant adapters.
pub struct AssistantFactory;

impl AssistantFactory {
    /// Create a text completion adapter from configuration.
    ///
    /// Only the text capability is provider-agnostic; image and speech
    /// operations are OpenAI-only and are constructed directly.
    pub fn create_text(config: &AssistantConfig) -> Result<Box<dyn TextCompletion>, Error> {
        match config.kind {
            ProviderKind::OpenAi => {
                let adapter = OpenAiAssistant::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    config.max_tokens,
                )?;
                Ok(Box::new(adapter))
            }
            ProviderKind::Anthropic => {
                let adapter = AnthropicAssistant::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    config.max_tokens,
                )?;
                Ok(Box::new(adapter))
            }
        }
    }

    /// Create a text completion adapter from environment variables.
    pub fn from_env() -> Result<Box<dyn TextCompletion>, Error> {
        let config = AssistantConfig::from_env()?;
        Self::create_text(&config)
    }
}
