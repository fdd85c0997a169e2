use thiserror::Error;

/// Errors that can occur when using the editor-llm library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Streaming error: {0}")]
    Streaming(String),
}

impl Error {
    pub fn api(
        provider: impl Into<String>,
        status: u16,
        message: impl Into<String>,
        code: Option<String>,
    ) -> Self {
        Error::Api {
            provider: provider.into(),
            status,
            message: message.into(),
            code,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn streaming(message: impl Into<String>) -> Self {
        Error::Streaming(message.into())
    }

    /// Whether this error carries a structured provider response
    /// (as opposed to a transport or local failure).
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
