//! Name store
//!
//! Keeps the last name handed to `save`. There is no history: each save
//! overwrites the previous value.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::sink::OutputSink;

/// Repository trait for storing named records
pub trait NameRepository: Send + Sync {
    /// Stores a name, replacing whatever was stored before
    ///
    /// # Arguments
    /// * `name` - The name to store
    fn save(&self, name: &str);

    /// Returns the most recently saved name, or `None` if nothing was saved
    fn last(&self) -> Option<String>;
}

/// In-memory implementation of NameRepository
///
/// Writes a `saved <name>` confirmation to its sink on every save.
pub struct InMemoryStore {
    last: Mutex<Option<String>>,
    sink: Arc<dyn OutputSink>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store
    ///
    /// # Arguments
    /// * `sink` - Where save confirmations are written
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            last: Mutex::new(None),
            sink,
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NameRepository for InMemoryStore {
    fn save(&self, name: &str) {
        *self.slot() = Some(name.to_string());

        info!("Saved name: {}", name);
        self.sink.write_line(&format!("saved {}", name));
    }

    fn last(&self) -> Option<String> {
        self.slot().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferedSink;

    fn store_with_sink() -> (InMemoryStore, BufferedSink) {
        let sink = BufferedSink::new();
        let store = InMemoryStore::new(Arc::new(sink.clone()));
        (store, sink)
    }

    #[test]
    fn test_new_store_is_empty() {
        let (store, sink) = store_with_sink();

        assert_eq!(store.last(), None);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_save_sets_last_and_confirms() {
        let (store, sink) = store_with_sink();

        store.save("demo");

        assert_eq!(store.last().as_deref(), Some("demo"));
        assert_eq!(sink.lines(), vec!["saved demo"]);
    }

    #[test]
    fn test_save_twice_is_idempotent() {
        let (store, _sink) = store_with_sink();

        store.save("demo");
        store.save("demo");

        assert_eq!(store.last().as_deref(), Some("demo"));
    }

    #[test]
    fn test_save_overwrites_previous_name() {
        let (store, sink) = store_with_sink();

        store.save("first");
        store.save("second");

        assert_eq!(store.last().as_deref(), Some("second"));
        assert_eq!(sink.lines(), vec!["saved first", "saved second"]);
    }

    #[test]
    fn test_last_through_trait_object() {
        let (store, _sink) = store_with_sink();
        let repository: Arc<dyn NameRepository> = Arc::new(store);

        repository.save("shared");

        assert_eq!(repository.last().as_deref(), Some("shared"));
    }
}
