//! Types for streaming completions.

/// Events emitted while a completion streams in.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A fragment of content was received.
    ContentDelta { delta: String },
    /// The stream has finished.
    Done { finish_reason: FinishReason },
}

/// Reason why generation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

impl FinishReason {
    /// Map a provider's finish reason string, defaulting to `Stop` for
    /// values this layer does not distinguish.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reason_mapping() {
        assert_eq!(FinishReason::from_wire("stop"), FinishReason::Stop);
        assert_eq!(FinishReason::from_wire("length"), FinishReason::Length);
        assert_eq!(
            FinishReason::from_wire("content_filter"),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_wire("tool_calls"), FinishReason::Stop);
    }
}
