use super::message::Message;

/// A text completion request. The target model and output token budget are
/// adapter fields, fixed at construction; the request carries only the
/// per-call inputs.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation in order. Must be non-empty for the call to be meaningful.
    pub messages: Vec<Message>,
    /// Sampling temperature in [0, 1]. `None` uses the default of 0.5.
    /// Reasoning-tier models override this, see the OpenAI adapter.
    pub temperature: Option<f32>,
}

/// Default sampling temperature when the caller does not supply one.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

impl CompletionRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Whether any message in the conversation carries image content.
    pub fn has_images(&self) -> bool {
        self.messages.iter().any(Message::has_image)
    }
}

impl From<super::prompt::Prompt> for CompletionRequest {
    fn from(prompt: super::prompt::Prompt) -> Self {
        Self::new(prompt.messages().to_vec())
    }
}

/// An image generation request.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Image model identifier, selected per call.
    pub model: String,
    pub prompt: String,
    /// Size string in the provider's format, e.g. "1024x1024".
    pub size: String,
    /// Number of images to generate.
    pub count: u32,
    /// Request high definition output. Only honored by models that
    /// support a quality setting.
    pub high_definition: bool,
}

/// A speech-to-text request carrying the raw audio to transcribe.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    /// File name hint for the upload, e.g. "recording.webm".
    pub file_name: String,
    /// ISO-639-1 language code, e.g. "en".
    pub language: String,
}
