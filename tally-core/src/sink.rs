//! Output sinks
//!
//! Every observable line the service produces (`base ..`, `count ..`,
//! `saved ..`) goes through an [`OutputSink`]. The binary writes to stdout;
//! tests and embedders can collect lines in a [`BufferedSink`] instead.

use std::sync::{Arc, Mutex, PoisonError};

/// Trait for output sinks
///
/// # Thread Safety
/// Sinks are shared as `Arc<dyn OutputSink>` between the logger, the store
/// and the service, so implementations must be Send + Sync.
pub trait OutputSink: Send + Sync {
    /// Writes a single line (without trailing newline)
    fn write_line(&self, line: &str);
}

/// Sink that prints each line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// In-memory sink that keeps lines in write order
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferedSink {
    /// Creates a new empty buffered sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns all buffered lines and clears the buffer
    pub fn drain(&self) -> Vec<String> {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.drain(..).collect()
    }
}

impl OutputSink for BufferedSink {
    fn write_line(&self, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.push(line.to_string());
    }
}
