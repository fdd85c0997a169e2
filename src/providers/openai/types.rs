use crate::types::{ContentPart, Message, MessageContent, Role};
use serde::{Deserialize, Serialize};

/// Chat completions request body.
///
/// Exactly one of `max_tokens` / `max_completion_tokens` is serialized:
/// reasoning-tier models take the completion token budget field, all
/// others the classic max tokens field.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

/// A message on the wire: text content stays a plain string, multimodal
/// content becomes a list of typed parts.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: ChatContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChatContent {
    Text(String),
    Parts(Vec<ChatContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageSource },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageSource {
    pub url: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let content = match &message.content {
            MessageContent::Text(text) => ChatContent::Text(text.clone()),
            MessageContent::Parts(parts) => ChatContent::Parts(
                parts
                    .iter()
                    .map(|part| match part {
                        ContentPart::Text(text) => ChatContentPart::Text { text: text.clone() },
                        ContentPart::Image { url } => ChatContentPart::ImageUrl {
                            image_url: ImageSource { url: url.clone() },
                        },
                    })
                    .collect(),
            ),
        };
        ChatMessage {
            role: message.role,
            content,
        }
    }
}

/// Buffered chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
}

/// One streamed chat completions chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChunk {
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    pub delta: ChunkDelta,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    pub content: Option<String>,
}

/// Image generation request body. The quality flag is only present for
/// high definition requests on a model that supports it.
#[derive(Debug, Clone, Serialize)]
pub struct ImagesRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    pub url: String,
}

/// Transcription response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

/// Speech synthesis request body.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
}

/// Error body shape shared by the OpenAI endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}
