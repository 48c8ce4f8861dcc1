//! Trace sinks for soft reports.
//!
//! A soft report writes its message as a trace line and raises a non-fatal
//! assertion notification. Where those go is decided by the sink:
//! - Tracing: `tracing` events under the `guardrail::report` target (default)
//! - Buffer: captured in memory for assertions in tests
//! - Silent: discarded
//!
//! Uses enum dispatch rather than trait objects, like the other handler
//! types in this crate.

use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that captures trace lines and assertion notifications.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
    assertions: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_line(&self, message: &str) {
        self.lines.lock().push(message.to_owned());
    }

    pub fn assertion_failed(&self, message: &str) {
        self.assertions.lock().push(message.to_owned());
    }

    /// Trace lines written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Assertion notifications raised so far, oldest first.
    pub fn assertions(&self) -> Vec<String> {
        self.assertions.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
        self.assertions.lock().clear();
    }
}

/// Destination for soft-report output.
#[derive(Debug)]
pub enum TraceSink {
    /// Emit `tracing` events (default).
    Tracing,
    /// Capture in memory.
    Buffer(BufferSink),
    /// Discard everything.
    Silent,
}

impl TraceSink {
    /// Write one trace line.
    pub fn write_line(&self, message: &str) {
        match self {
            Self::Tracing => tracing::debug!(target: "guardrail::report", "{message}"),
            Self::Buffer(sink) => sink.write_line(message),
            Self::Silent => {}
        }
    }

    /// Raise a non-fatal assertion notification.
    pub fn assertion_failed(&self, message: &str) {
        match self {
            Self::Tracing => {
                tracing::warn!(target: "guardrail::report", report = message, "recoverable assertion failed");
            }
            Self::Buffer(sink) => sink.assertion_failed(message),
            Self::Silent => {}
        }
    }

    /// Captured trace lines. Empty for sinks that don't capture.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Buffer(sink) => sink.lines(),
            Self::Tracing | Self::Silent => Vec::new(),
        }
    }

    /// Captured assertion notifications. Empty for sinks that don't capture.
    pub fn assertions(&self) -> Vec<String> {
        match self {
            Self::Buffer(sink) => sink.assertions(),
            Self::Tracing | Self::Silent => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(sink) = self {
            sink.clear();
        }
    }
}

/// Trace sink shared between reporters and threads.
pub type SharedTraceSink = Arc<TraceSink>;

pub fn tracing_sink() -> SharedTraceSink {
    Arc::new(TraceSink::Tracing)
}

pub fn buffer_sink() -> SharedTraceSink {
    Arc::new(TraceSink::Buffer(BufferSink::new()))
}

pub fn silent_sink() -> SharedTraceSink {
    Arc::new(TraceSink::Silent)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
