use super::types::{
    ApiErrorBody, ChatChunk, ChatMessage, ChatRequest, ChatResponse, ImagesRequest,
    ImagesResponse, SpeechRequest, TranscriptionResponse,
};
use crate::playback::SpeechAudio;
use crate::provider::{ImageGeneration, SpeechToText, TextCompletion, TextToSpeech};
use crate::sse_stream::SseStream;
use crate::types::{
    CompletionRequest, FinishReason, ImageRequest, StreamEvent, TranscriptionRequest,
    DEFAULT_TEMPERATURE,
};
use crate::{CompletionStream, Error};
use futures_util::StreamExt;
use reqwest::Client;
use std::time::Duration;

const PROVIDER: &str = "OpenAI";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model families with the "gpt-5" prefix only accept the default
/// temperature and take their output budget via `max_completion_tokens`.
const REASONING_MODEL_PREFIX: &str = "gpt-5";
const REASONING_TEMPERATURE: f32 = 1.0;

/// Substituted for models without native multimodal support when the
/// prompt carries an image. Hard-coded fallback, not configurable.
const VISION_FALLBACK_MODEL: &str = "gpt-4-vision-preview";

/// The only image model with a quality setting.
const HD_CAPABLE_IMAGE_MODEL: &str = "dall-e-3";

const TRANSCRIPTION_MODEL: &str = "whisper-1";
const SPEECH_MODEL: &str = "tts-1";
const SPEECH_VOICE: &str = "alloy";

/// OpenAI adapter: text completion plus the image and speech operations.
pub struct OpenAiAssistant {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

fn is_reasoning_tier(model: &str) -> bool {
    model.starts_with(REASONING_MODEL_PREFIX)
}

impl OpenAiAssistant {
    /// Create a new OpenAI adapter for the given model and token budget.
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, model, max_tokens, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI adapter with custom base URL (for testing).
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

    /// Shape a chat request around the configured model's quirks.
    fn convert_request(&self, request: &CompletionRequest, stream: bool) -> ChatRequest {
        let reasoning = is_reasoning_tier(&self.model);

        // Reasoning-tier models handle images natively; everything else
        // falls back to the dedicated vision model for multimodal turns.
        let model = if request.has_images() && !reasoning {
            tracing::debug!(
                configured = %self.model,
                fallback = VISION_FALLBACK_MODEL,
                "prompt has image content, substituting vision-capable model"
            );
            VISION_FALLBACK_MODEL.to_string()
        } else {
            self.model.clone()
        };

        let temperature = if reasoning {
            tracing::debug!(
                model = %self.model,
                "reasoning-tier model, forcing temperature to {REASONING_TEMPERATURE}"
            );
            REASONING_TEMPERATURE
        } else {
            request.temperature.unwrap_or(DEFAULT_TEMPERATURE)
        };

        let (max_tokens, max_completion_tokens) = if reasoning {
            (None, Some(self.max_tokens))
        } else {
            (Some(self.max_tokens), None)
        };

        ChatRequest {
            model,
            messages: request.messages.iter().map(ChatMessage::from).collect(),
            stream,
            temperature,
            max_tokens,
            max_completion_tokens,
        }
    }

    /// Turn a non-success response into a structured API error.
    async fn error_from_response(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => Error::api(PROVIDER, status, parsed.error.message, parsed.error.code),
                Err(_) => Error::api(PROVIDER, status, body, None),
            },
            Err(e) => Error::Http(e),
        }
    }

    /// Convert one streamed chunk into stream events.
    fn convert_chunk(chunk: ChatChunk) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        for choice in chunk.choices {
            if let Some(delta) = choice.delta.content {
                if !delta.is_empty() {
                    events.push(StreamEvent::ContentDelta { delta });
                }
            }
            if let Some(reason) = choice.finish_reason {
                events.push(StreamEvent::Done {
                    finish_reason: FinishReason::from_wire(&reason),
                });
            }
        }
        events
    }
}

#[async_trait::async_trait]
impl TextCompletion for OpenAiAssistant {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let body = self.convert_request(request, false);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: ChatResponse = response.json().await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, Error> {
        let body = self.convert_request(request, true);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let sse = SseStream::new(response.bytes_stream());
        let events = sse
            .filter_map(|sse_result| async move {
                match sse_result {
                    Ok(event) => {
                        if event.is_done() {
                            return None;
                        }
                        match serde_json::from_str::<ChatChunk>(&event.data) {
                            Ok(chunk) => Some(Ok(OpenAiAssistant::convert_chunk(chunk))),
                            // Skip non-JSON keep-alive data.
                            Err(_) => None,
                        }
                    }
                    Err(e) => Some(Err(e)),
                }
            })
            .map(|result| match result {
                Ok(events) => events.into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            })
            .map(futures_util::stream::iter)
            .flatten();

        Ok(CompletionStream::from_events(events))
    }
}

#[async_trait::async_trait]
impl ImageGeneration for OpenAiAssistant {
    async fn generate_images(&self, request: &ImageRequest) -> Result<Vec<String>, Error> {
        let quality = (request.model == HD_CAPABLE_IMAGE_MODEL && request.high_definition)
            .then(|| "hd".to_string());

        let body = ImagesRequest {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            n: request.count,
            size: request.size.clone(),
            quality,
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: ImagesResponse = response.json().await?;
        Ok(parsed.data.into_iter().map(|datum| datum.url).collect())
    }
}

#[async_trait::async_trait]
impl SpeechToText for OpenAiAssistant {
    async fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, Error> {
        let file = reqwest::multipart::Part::bytes(request.audio.clone())
            .file_name(request.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .text("model", TRANSCRIPTION_MODEL)
            .text("language", request.language.clone())
            .part("file", file);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: TranscriptionResponse = response.json().await?;
        Ok(parsed.text)
    }
}

#[async_trait::async_trait]
impl TextToSpeech for OpenAiAssistant {
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, Error> {
        let body = SpeechRequest {
            model: SPEECH_MODEL.to_string(),
            voice: SPEECH_VOICE.to_string(),
            input: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let bytes = response.bytes().await?;
        Ok(SpeechAudio::mp3(bytes.to_vec()))
    }
}
