//! Audio playback seam for synthesized speech.
//!
//! This layer never persists audio; the host supplies a sink and owns
//! the actual playback device.

/// Synthesized speech returned by a text-to-speech call.
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    /// MIME type of the payload, e.g. "audio/mpeg".
    pub mime_type: String,
}

impl SpeechAudio {
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: "audio/mpeg".to_string(),
        }
    }
}

/// A host-provided playback device. `play` must not block; playback of
/// overlapping calls is allowed to overlap audibly.
pub trait AudioSink: Send + Sync {
    fn play(&self, audio: SpeechAudio);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        played: Mutex<Vec<SpeechAudio>>,
    }

    impl AudioSink for RecordingSink {
        fn play(&self, audio: SpeechAudio) {
            self.played.lock().unwrap().push(audio);
        }
    }

    #[test]
    fn test_sink_receives_audio() {
        let sink = RecordingSink {
            played: Mutex::new(Vec::new()),
        };
        sink.play(SpeechAudio::mp3(vec![1, 2, 3]));

        let played = sink.played.lock().unwrap();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].mime_type, "audio/mpeg");
        assert_eq!(played[0].bytes, vec![1, 2, 3]);
    }
}
