//! Delta accumulation for streaming completions.

use crate::types::{FinishReason, StreamEvent};

/// Accumulates streamed fragments into the full completion text.
///
/// The accumulated buffer after every event equals the in-order
/// concatenation of all deltas received so far; consumers re-render the
/// whole buffer rather than appending fragments.
#[derive(Debug, Default)]
pub struct TranscriptAccumulator {
    buffer: String,
    finish_reason: Option<FinishReason>,
}

impl TranscriptAccumulator {
    /// Create a new, empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one stream event into the transcript.
    pub fn push(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::ContentDelta { delta } => self.buffer.push_str(delta),
            StreamEvent::Done { finish_reason } => self.finish_reason = Some(*finish_reason),
        }
    }

    /// The full text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The finish reason, once the `Done` event has arrived.
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    /// Consume the accumulator and return the final text.
    pub fn into_text(self) -> String {
        self.buffer
    }
}
