//! Provider adapters for editor assistant features.
//!
//! This library gives an editor plugin a consistent API over two LLM
//! providers: OpenAI (text completion, image generation, speech-to-text,
//! text-to-speech) and Anthropic (text completion only). Streamed
//! completions are exposed as lazy fragment streams and folded into the
//! host's output surface by the rendering collaborators.

pub mod accumulator;
pub mod error;
pub mod factory;
pub mod notify;
pub mod playback;
pub mod provider;
pub mod providers;
pub mod render;
pub mod response;
pub mod sse_stream;
pub mod types;

// Re-export core types for easy usage
pub use accumulator::TranscriptAccumulator;
pub use error::Error;
pub use factory::{AssistantConfig, AssistantFactory, ProviderKind};
pub use notify::{ErrorReporter, LogReporter};
pub use playback::{AudioSink, SpeechAudio};
pub use provider::{ImageGeneration, SpeechToText, TextCompletion, TextToSpeech};
pub use providers::*;
pub use render::{MarkdownHtml, MarkupRenderer, OutputSurface, RawText};
pub use response::CompletionStream;
pub use sse_stream::SseEvent;
pub use types::*;
