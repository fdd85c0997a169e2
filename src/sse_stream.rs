//! Stream adapter for parsing SSE (Server-Sent Events) from byte chunks.

use crate::Error;
use futures_util::{Stream, StreamExt};
use memchr::memmem;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// Events larger than this indicate a broken stream rather than real data.
const MAX_BUFFER_BYTES: usize = 1_000_000;

/// A Server-Sent Events (SSE) event. Only the fields the chat endpoints
/// use are kept; `id` and `retry` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    /// Event type (optional).
    pub event_type: Option<String>,
    /// Event data. Multi-line data is joined with newlines.
    pub data: String,
}

impl SseEvent {
    /// Check if this is the terminator event OpenAI sends at end of stream.
    pub fn is_done(&self) -> bool {
        self.data.trim() == "[DONE]"
    }
}

/// A stream adapter that parses SSE events from a byte stream.
/// Handles events split across chunks and UTF-8 sequences split across
/// chunk boundaries.
pub struct SseStream<S> {
    inner: S,
    /// Raw bytes carried over from previous chunks.
    buffer: Vec<u8>,
    /// Parsed events not yet yielded.
    pending: VecDeque<SseEvent>,
}

impl<S> SseStream<S> {
    /// Create a new SSE stream from a byte stream.
    pub fn new(stream: S) -> Self {
        Self {
            inner: stream,
            buffer: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Drain complete events out of the byte buffer into `pending`.
    fn drain_buffer(&mut self) -> Result<(), Error> {
        let finder = memmem::Finder::new(b"\n\n");
        let mut consumed = 0;

        while let Some(pos) = finder.find(&self.buffer[consumed..]) {
            let end = consumed + pos;
            let raw = &self.buffer[consumed..end];
            let text = std::str::from_utf8(raw)
                .map_err(|e| Error::streaming(format!("invalid UTF-8 in SSE event: {e}")))?;
            if let Some(event) = parse_event(text) {
                self.pending.push_back(event);
            }
            consumed = end + 2;
        }

        if consumed > 0 {
            self.buffer.drain(..consumed);
        }
        Ok(())
    }
}

/// Parse one complete event block into an `SseEvent`.
/// Returns `None` for comment-only or field-less blocks.
fn parse_event(block: &str) -> Option<SseEvent> {
    let mut event_type = None;
    let mut data_lines: Vec<&str> = Vec::new();

    for line in block.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value);
        match field {
            "event" => event_type = Some(value.to_string()),
            "data" => data_lines.push(value),
            _ => {}
        }
    }

    if data_lines.is_empty() {
        return None;
    }

    Some(SseEvent {
        event_type,
        data: data_lines.join("\n"),
    })
}

impl<S, E> Stream for SseStream<S>
where
    S: Stream<Item = Result<bytes::Bytes, E>> + Unpin,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Item = Result<SseEvent, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Poll::Ready(Some(Ok(event)));
            }

            let chunk = match ready!(self.inner.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => chunk,
                Some(Err(e)) => {
                    return Poll::Ready(Some(Err(Error::streaming(format!(
                        "stream error: {}",
                        e.into()
                    )))));
                }
                None => {
                    // The final event may arrive without a trailing blank line.
                    if !self.buffer.is_empty() {
                        let tail = std::mem::take(&mut self.buffer);
                        if let Ok(text) = std::str::from_utf8(&tail) {
                            if let Some(event) = parse_event(text.trim()) {
                                return Poll::Ready(Some(Ok(event)));
                            }
                        }
                    }
                    return Poll::Ready(None);
                }
            };

            self.buffer.extend_from_slice(&chunk);
            if self.buffer.len() > MAX_BUFFER_BYTES {
                self.buffer.clear();
                return Poll::Ready(Some(Err(Error::streaming(
                    "SSE buffer exceeded maximum size",
                ))));
            }

            if let Err(e) = self.drain_buffer() {
                return Poll::Ready(Some(Err(e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn chunks(parts: &[&[u8]]) -> Vec<Result<bytes::Bytes, std::io::Error>> {
        parts
            .iter()
            .map(|p| Ok(bytes::Bytes::copy_from_slice(p)))
            .collect()
    }

    #[tokio::test]
    async fn test_complete_events() {
        let byte_stream = stream::iter(chunks(&[b"data: Hello\n\ndata: World\n\n"]));
        let mut sse = SseStream::new(byte_stream);

        assert_eq!(sse.next().await.unwrap().unwrap().data, "Hello");
        assert_eq!(sse.next().await.unwrap().unwrap().data, "World");
        assert!(sse.next().await.is_none());
    }

    #[tokio::test]
    async fn test_event_split_across_chunks() {
        let byte_stream = stream::iter(chunks(&[b"data: Hel", b"lo World\n\ndata: ", b"Next\n\n"]));
        let mut sse = SseStream::new(byte_stream);

        assert_eq!(sse.next().await.unwrap().unwrap().data, "Hello World");
        assert_eq!(sse.next().await.unwrap().unwrap().data, "Next");
        assert!(sse.next().await.is_none());
    }

    #[tokio::test]
    async fn test_multiline_data_and_fields() {
        let byte_stream = stream::iter(chunks(&[b"event: delta\ndata: Line 1\ndata: Line 2\n\n"]));
        let mut sse = SseStream::new(byte_stream);

        let event = sse.next().await.unwrap().unwrap();
        assert_eq!(event.event_type, Some("delta".to_string()));
        assert_eq!(event.data, "Line 1\nLine 2");
    }

    #[tokio::test]
    async fn test_comments_are_skipped() {
        let byte_stream = stream::iter(chunks(&[b": keep-alive\n\ndata: real\n\n"]));
        let mut sse = SseStream::new(byte_stream);

        assert_eq!(sse.next().await.unwrap().unwrap().data, "real");
        assert!(sse.next().await.is_none());
    }

    #[tokio::test]
    async fn test_utf8_split_across_chunks() {
        // The Euro sign is three bytes; split it across two chunks.
        let euro = "€".as_bytes();
        let first = [b"data: Price: ".as_slice(), &euro[..2]].concat();
        let second = [&euro[2..], b"100\n\n".as_slice()].concat();
        let byte_stream = stream::iter(chunks(&[&first, &second]));
        let mut sse = SseStream::new(byte_stream);

        assert_eq!(sse.next().await.unwrap().unwrap().data, "Price: €100");
    }

    #[tokio::test]
    async fn test_done_without_trailing_newlines() {
        let byte_stream = stream::iter(chunks(&[b"data: first\n\n", b"data: [DONE]"]));
        let mut sse = SseStream::new(byte_stream);

        assert_eq!(sse.next().await.unwrap().unwrap().data, "first");
        let last = sse.next().await.unwrap().unwrap();
        assert!(last.is_done());
        assert!(sse.next().await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let byte_stream = stream::iter(chunks(&[b"data: ok \xFF\xFE bad\n\n"]));
        let mut sse = SseStream::new(byte_stream);

        assert!(sse.next().await.unwrap().is_err());
    }
}
