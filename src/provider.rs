//! Capability traits implemented by the provider adapters.
//!
//! Each adapter implements exactly the capabilities its provider offers
//! and holds only the credentials it needs; there is no fallback from one
//! provider's operations to another's.

use crate::playback::{AudioSink, SpeechAudio};
use crate::types::{CompletionRequest, ImageRequest, TranscriptionRequest};
use crate::{CompletionStream, Error};

/// Text completion against a chat model.
#[async_trait::async_trait]
pub trait TextCompletion: Send + Sync + 'static {
    /// Issue a buffered completion and return the full text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error>;

    /// Issue a streaming completion and return the fragment stream.
    async fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, Error>;
}

/// Image generation from a text prompt.
#[async_trait::async_trait]
pub trait ImageGeneration: Send + Sync + 'static {
    /// Generate images and return their URLs in the provider's order.
    async fn generate_images(&self, request: &ImageRequest) -> Result<Vec<String>, Error>;
}

/// Transcription of recorded audio.
#[async_trait::async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe audio and return the plain text.
    async fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, Error>;
}

/// Speech synthesis from text.
#[async_trait::async_trait]
pub trait TextToSpeech: Send + Sync + 'static {
    /// Synthesize speech and return the playable audio.
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, Error>;

    /// Synthesize speech and hand it straight to the sink for playback.
    /// Playback is fire-and-forget; concurrent calls may overlap audibly.
    async fn speak(&self, text: &str, sink: &dyn AudioSink) -> Result<(), Error> {
        let audio = self.synthesize(text).await?;
        sink.play(audio);
        Ok(())
    }
}
