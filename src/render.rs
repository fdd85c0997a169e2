//! Rendering collaborators for streamed completions.
//!
//! The host hands this layer an output surface; streamed text is folded
//! into an accumulating transcript, and the surface is re-rendered from
//! the full transcript after every fragment so formatted markup stays
//! consistent as it grows.

use crate::accumulator::TranscriptAccumulator;
use crate::{CompletionStream, Error};
use futures_util::StreamExt;
use pulldown_cmark::{html, Parser};

/// An opaque output target the adapter writes into. Each call replaces
/// the surface's whole content; nothing is appended incrementally.
pub trait OutputSurface: Send {
    fn set_content(&mut self, markup: &str);
}

/// Turns accumulated transcript text into the markup the surface shows.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// Pass-through renderer used when no render context is supplied.
pub struct RawText;

impl MarkupRenderer for RawText {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Renders the transcript as HTML from markdown.
pub struct MarkdownHtml;

impl MarkupRenderer for MarkdownHtml {
    fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        html::push_html(&mut out, Parser::new(text));
        out
    }
}

/// Fold a completion stream into the surface.
///
/// After every fragment the full accumulated transcript is re-rendered
/// and written to the surface. Returns the final transcript. If the
/// stream fails mid-way the surface keeps whatever partial state it
/// reached and the error is returned.
pub async fn present(
    stream: CompletionStream,
    surface: &mut dyn OutputSurface,
    renderer: &dyn MarkupRenderer,
) -> Result<String, Error> {
    let mut events = stream.events();
    let mut transcript = TranscriptAccumulator::new();

    while let Some(event) = events.next().await {
        let event = event?;
        let grew = matches!(&event, crate::types::StreamEvent::ContentDelta { delta } if !delta.is_empty());
        transcript.push(&event);
        if grew {
            surface.set_content(&renderer.render(transcript.as_str()));
        }
    }

    Ok(transcript.into_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishReason, StreamEvent};

    /// Surface double that records every full repaint.
    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<String>,
    }

    impl OutputSurface for RecordingSurface {
        fn set_content(&mut self, markup: &str) {
            self.frames.push(markup.to_string());
        }
    }

    fn delta(text: &str) -> Result<StreamEvent, Error> {
        Ok(StreamEvent::ContentDelta {
            delta: text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_surface_shows_full_transcript_after_each_fragment() {
        let events = vec![
            delta("# Title"),
            delta("\n\nBody "),
            delta("text"),
            Ok(StreamEvent::Done {
                finish_reason: FinishReason::Stop,
            }),
        ];
        let stream = CompletionStream::from_events(futures_util::stream::iter(events));
        let mut surface = RecordingSurface::default();

        let text = present(stream, &mut surface, &RawText).await.unwrap();

        assert_eq!(text, "# Title\n\nBody text");
        assert_eq!(
            surface.frames,
            vec!["# Title", "# Title\n\nBody ", "# Title\n\nBody text"]
        );
    }

    #[tokio::test]
    async fn test_markdown_rendering_of_accumulated_buffer() {
        let events = vec![
            delta("**bo"),
            delta("ld**"),
            Ok(StreamEvent::Done {
                finish_reason: FinishReason::Stop,
            }),
        ];
        let stream = CompletionStream::from_events(futures_util::stream::iter(events));
        let mut surface = RecordingSurface::default();

        present(stream, &mut surface, &MarkdownHtml).await.unwrap();

        // The half-received emphasis marker renders as literal text until
        // the closing marker arrives; the final frame is proper HTML.
        assert_eq!(surface.frames.len(), 2);
        assert!(surface.frames[1].contains("<strong>bold</strong>"));
    }

    #[tokio::test]
    async fn test_partial_state_kept_on_failure() {
        let events = vec![delta("partial"), Err(Error::streaming("connection reset"))];
        let stream = CompletionStream::from_events(futures_util::stream::iter(events));
        let mut surface = RecordingSurface::default();

        let result = present(stream, &mut surface, &RawText).await;

        assert!(result.is_err());
        assert_eq!(surface.frames, vec!["partial"]);
    }

    #[test]
    fn test_raw_text_passthrough() {
        assert_eq!(RawText.render("a **b**"), "a **b**");
    }
}
