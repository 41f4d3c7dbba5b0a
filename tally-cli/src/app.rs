//! Wiring
//!
//! Builds the processing service from a [`Config`], runs it through the
//! `Runner` capability, and collects what the caller reports afterwards.

use serde::Serialize;
use std::sync::Arc;
use tally_core::{
    BaseLogger, InMemoryStore, NameRepository, OutputSink, ProcessingService, Runner,
};
use tracing::info;

use crate::config::Config;

/// Result of a single run, printed with `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub last_saved: Option<String>,
}

/// Builds the service described by `config`, writing all output to `sink`
///
/// Returns the store alongside the service when one is wired, so the caller
/// keeps its own handle to it.
pub fn build_service(
    config: &Config,
    sink: Arc<dyn OutputSink>,
) -> (ProcessingService, Option<Arc<InMemoryStore>>) {
    let logger = Arc::new(BaseLogger::new(sink.clone()));
    let service = ProcessingService::new(logger, sink.clone()).with_settings(config.run_settings());

    if !config.with_store {
        return (service, None);
    }

    let store = Arc::new(InMemoryStore::new(sink));
    (service.with_repository(store.clone()), Some(store))
}

/// Runs the configured service once
pub fn execute(config: &Config, sink: Arc<dyn OutputSink>) -> RunSummary {
    let (service, store) = build_service(config, sink);
    let runner: &dyn Runner = &service;

    let label = runner.run();
    let last_saved = store.and_then(|store| store.last());

    info!("Run finished: label={}, last_saved={:?}", label, last_saved);

    RunSummary { label, last_saved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::BufferedSink;

    #[test]
    fn test_default_config_runs_with_store() {
        let sink = BufferedSink::new();

        let summary = execute(&Config::default(), Arc::new(sink.clone()));

        assert_eq!(
            summary,
            RunSummary {
                label: "demo-3".to_string(),
                last_saved: Some("demo".to_string()),
            }
        );
        assert_eq!(sink.lines(), vec!["base 3", "count 3", "saved demo"]);
    }

    #[test]
    fn test_without_store_skips_save() {
        let sink = BufferedSink::new();
        let config = Config {
            with_store: false,
            ..Config::default()
        };

        let summary = execute(&config, Arc::new(sink.clone()));

        assert_eq!(summary.label, "demo-3");
        assert_eq!(summary.last_saved, None);
        assert_eq!(sink.lines(), vec!["base 3", "count 3"]);
    }

    #[test]
    fn test_build_service_shares_store() {
        let sink = BufferedSink::new();
        let (service, store) = build_service(&Config::default(), Arc::new(sink));
        let store = store.unwrap();

        service.process("other", 9);

        assert_eq!(store.last().as_deref(), Some("other"));
        assert!(service.repository().is_some());
    }

    #[test]
    fn test_summary_json() {
        let with_store = RunSummary {
            label: "demo-3".to_string(),
            last_saved: Some("demo".to_string()),
        };
        let without_store = RunSummary {
            label: "demo-3".to_string(),
            last_saved: None,
        };

        assert_eq!(
            serde_json::to_string(&with_store).unwrap(),
            r#"{"label":"demo-3","last_saved":"demo"}"#
        );
        assert_eq!(
            serde_json::to_string(&without_store).unwrap(),
            r#"{"label":"demo-3","last_saved":null}"#
        );
    }
}
