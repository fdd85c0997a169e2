use super::types::{AnthropicMessage, ApiErrorBody, MessagesRequest, MessagesResponse};
use crate::provider::TextCompletion;
use crate::types::{CompletionRequest, FinishReason, StreamEvent};
use crate::{CompletionStream, Error};
use reqwest::Client;
use std::time::Duration;

const PROVIDER: &str = "Anthropic";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Anthropic adapter. Text completion only; the messages endpoint takes
/// no temperature on this path and streaming is not implemented yet.
pub struct AnthropicAssistant {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicAssistant {
    /// Create a new Anthropic adapter for the given model and token budget.
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, model, max_tokens, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Anthropic adapter with custom base URL (for testing).
    pub fn new_with_base_url(
        api_key: String,
        model: String,
        max_tokens: u32,
        base_url: String,
    ) -> Result<Self, Error> {
        if model.is_empty() {
            return Err(Error::config("model identifier must be set"));
        }
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            model,
            max_tokens,
            base_url,
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn convert_request(&self, request: &CompletionRequest) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: request
                .messages
                .iter()
                .map(AnthropicMessage::from)
                .collect(),
            // Streaming is not implemented yet for this provider.
            stream: false,
        }
    }

    async fn error_from_response(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => Error::api(PROVIDER, status, parsed.error.message, parsed.error.kind),
                Err(_) => Error::api(PROVIDER, status, body, None),
            },
            Err(e) => Error::Http(e),
        }
    }
}

#[async_trait::async_trait]
impl TextCompletion for AnthropicAssistant {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let body = self.convert_request(request);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: MessagesResponse = response.json().await?;
        Ok(parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .unwrap_or_default())
    }

    /// Streaming is not implemented yet; the buffered result is replayed
    /// as a single fragment so rendering works uniformly across providers.
    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, Error> {
        let text = self.complete(request).await?;
        let events = vec![
            Ok(StreamEvent::ContentDelta { delta: text }),
            Ok(StreamEvent::Done {
                finish_reason: FinishReason::Stop,
            }),
        ];
        Ok(CompletionStream::from_events(futures_util::stream::iter(
            events,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    #[test]
    fn test_empty_model_rejected() {
        let result = AnthropicAssistant::new("key".to_string(), String::new(), 256);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_request_carries_no_temperature_and_no_streaming() {
        let adapter =
            AnthropicAssistant::new("key".to_string(), "claude-3-haiku".to_string(), 512).unwrap();
        let request = CompletionRequest::new(vec![Message::user("Hi")]).with_temperature(0.9);

        let body = adapter.convert_request(&request);
        assert!(!body.stream);
        assert_eq!(body.max_tokens, 512);

        // The caller's temperature is dropped, not forwarded.
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("temperature").is_none());
    }
}
