//! Cross-cutting error reporting.
//!
//! Operations return `Result` values; turning a failure into a
//! user-visible notice is the caller's job, routed through a reporter so
//! the host can surface it however it likes.

use crate::Error;

/// Receives failures the caller chooses to surface to the user.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &Error);
}

/// Reporter that logs through `tracing`. Structured provider errors keep
/// their status and code as fields; everything else is logged generically.
#[derive(Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &Error) {
        match error {
            Error::Api {
                provider,
                status,
                message,
                code,
            } => {
                tracing::error!(
                    provider = %provider,
                    status = *status,
                    code = code.as_deref(),
                    "{message}"
                );
            }
            other => {
                tracing::error!("assistant error: {other}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct CountingReporter {
        count: AtomicUsize,
    }

    impl ErrorReporter for CountingReporter {
        fn report(&self, _error: &Error) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_reporter_invoked_per_failure() {
        let reporter = CountingReporter::default();
        reporter.report(&Error::streaming("boom"));
        reporter.report(&Error::api("OpenAI", 500, "oops", None));
        assert_eq!(reporter.count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_log_reporter_handles_both_taxonomies() {
        // Structured and generic paths both log without panicking.
        LogReporter.report(&Error::api("Anthropic", 401, "bad key", Some("auth".into())));
        LogReporter.report(&Error::config("missing model"));
    }
}
