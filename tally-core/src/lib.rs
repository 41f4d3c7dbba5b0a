//! Tally Core
//!
//! Core types and services for the Tally processing service.
//!
//! This crate contains:
//! - Domain types: the record processed on each invocation
//! - Sinks: destinations for the observable output lines
//! - Logger: the logging capability the service delegates to
//! - Repository: the name store capability and its in-memory implementation
//! - Service: the processing service and the `Runner` capability

pub mod domain;
pub mod logger;
pub mod repository;
pub mod service;
pub mod sink;

pub use domain::record::Record;
pub use logger::{BaseLogger, Logger};
pub use repository::{InMemoryStore, NameRepository};
pub use service::{ProcessingService, RunSettings, Runner, record_count};
pub use sink::{BufferedSink, OutputSink, StdoutSink};
