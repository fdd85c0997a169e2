//! Streaming completion results.

use crate::accumulator::TranscriptAccumulator;
use crate::types::StreamEvent;
use crate::Error;
use futures_util::stream::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

/// A lazy, finite, non-restartable sequence of completion fragments.
///
/// Consumption is sequential; awaiting the next item suspends until the
/// provider delivers another fragment or the stream ends.
pub struct CompletionStream {
    events: Pin<Box<dyn Stream<Item = Result<StreamEvent, Error>> + Send>>,
}

impl CompletionStream {
    /// Create a completion stream from a stream of events.
    pub fn from_events<S>(events: S) -> Self
    where
        S: Stream<Item = Result<StreamEvent, Error>> + Send + 'static,
    {
        Self {
            events: Box::pin(events),
        }
    }

    /// Consume the stream as raw events.
    pub fn events(self) -> Pin<Box<dyn Stream<Item = Result<StreamEvent, Error>> + Send>> {
        self.events
    }

    /// Buffer the whole stream and return the final text.
    pub async fn text(mut self) -> Result<String, Error> {
        let mut acc = TranscriptAccumulator::new();
        while let Some(event) = self.events.next().await {
            acc.push(&event?);
        }
        Ok(acc.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FinishReason;

    #[tokio::test]
    async fn test_text_buffers_all_deltas() {
        let events = vec![
            Ok(StreamEvent::ContentDelta {
                delta: "The ".to_string(),
            }),
            Ok(StreamEvent::ContentDelta {
                delta: "answer".to_string(),
            }),
            Ok(StreamEvent::Done {
                finish_reason: FinishReason::Stop,
            }),
        ];
        let stream = CompletionStream::from_events(futures_util::stream::iter(events));
        assert_eq!(stream.text().await.unwrap(), "The answer");
    }

    #[tokio::test]
    async fn test_text_propagates_stream_errors() {
        let events: Vec<Result<StreamEvent, Error>> = vec![
            Ok(StreamEvent::ContentDelta {
                delta: "partial".to_string(),
            }),
            Err(Error::streaming("connection reset")),
        ];
        let stream = CompletionStream::from_events(futures_util::stream::iter(events));
        assert!(stream.text().await.is_err());
    }
}
