//! Service layer
//!
//! Services contain the processing logic. They delegate to the logging
//! capability and, when one is configured, to a repository.
//!
//! Services are exposed through the `Runner` trait so callers can drive
//! them without knowing the concrete type.

mod processing;

// Re-export traits
pub use processing::Runner;

// Re-export implementations
pub use processing::{ProcessingService, RunSettings, record_count};
