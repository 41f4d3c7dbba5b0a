//! Processing service
//!
//! Handles a single invocation:
//! - Logging the count through the logging capability
//! - Reporting the count through the stateless helper
//! - Saving the name when a repository is configured
//! - Returning the `<name>-<count>` label

use std::sync::Arc;
use tracing::debug;

use crate::domain::record::Record;
use crate::logger::Logger;
use crate::repository::NameRepository;
use crate::sink::OutputSink;

/// Trait for anything that can be run without arguments
pub trait Runner: Send + Sync {
    /// Runs with the configured settings and returns the produced label
    fn run(&self) -> String;
}

/// Name and count used by [`Runner::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub name: String,
    pub count: i64,
}

impl RunSettings {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::new("demo", 3)
    }
}

/// Writes a `count <count>` line to the sink
pub fn record_count(sink: &dyn OutputSink, count: i64) {
    sink.write_line(&format!("count {}", count));
}

/// Processing service with an optional repository collaborator
///
/// The repository is shared: whoever builds the store keeps its own handle
/// and can inspect it after the service has run.
pub struct ProcessingService {
    logger: Arc<dyn Logger>,
    sink: Arc<dyn OutputSink>,
    repository: Option<Arc<dyn NameRepository>>,
    settings: RunSettings,
}

impl ProcessingService {
    /// Creates a service with no repository and default run settings
    ///
    /// # Arguments
    /// * `logger` - The logging capability `process` delegates to
    /// * `sink` - Where the helper writes its `count` line
    pub fn new(logger: Arc<dyn Logger>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            logger,
            sink,
            repository: None,
            settings: RunSettings::default(),
        }
    }

    /// Wires a repository that receives the name on every `process` call
    pub fn with_repository(mut self, repository: Arc<dyn NameRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replaces the settings used by `run`
    pub fn with_settings(mut self, settings: RunSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn repository(&self) -> Option<&Arc<dyn NameRepository>> {
        self.repository.as_ref()
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Processes a name and count
    ///
    /// Logs the count, reports it through [`record_count`], saves the name
    /// if a repository is wired, and returns the label.
    pub fn process(&self, name: &str, count: i64) -> String {
        self.logger.log(count);
        record_count(self.sink.as_ref(), count);

        match &self.repository {
            Some(repository) => repository.save(name),
            None => debug!("No repository configured, not saving {}", name),
        }

        Record::new(name, count).label()
    }
}

impl Runner for ProcessingService {
    fn run(&self) -> String {
        self.process(&self.settings.name, self.settings.count)
    }
}
