//! Logging capability
//!
//! The service does not inherit logging behavior; it holds an
//! `Arc<dyn Logger>` and calls [`Logger::log`] explicitly.

use std::sync::Arc;
use tracing::debug;

use crate::sink::OutputSink;

/// Tag written in front of every value logged by [`BaseLogger`]
pub const BASE_TAG: &str = "base";

/// Trait for the logging capability
pub trait Logger: Send + Sync {
    /// Logs an integer value
    fn log(&self, value: i64);
}

/// Logger that writes `base <value>` lines to an output sink
pub struct BaseLogger {
    sink: Arc<dyn OutputSink>,
}

impl BaseLogger {
    /// Creates a new base logger
    ///
    /// # Arguments
    /// * `sink` - Where the tagged lines are written
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Logger for BaseLogger {
    fn log(&self, value: i64) {
        debug!("Logging base value {}", value);
        self.sink.write_line(&format!("{} {}", BASE_TAG, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferedSink;

    #[test]
    fn test_log_writes_tagged_line() {
        let sink = BufferedSink::new();
        let logger = BaseLogger::new(Arc::new(sink.clone()));

        logger.log(3);
        logger.log(-1);

        assert_eq!(sink.lines(), vec!["base 3", "base -1"]);
    }
}
