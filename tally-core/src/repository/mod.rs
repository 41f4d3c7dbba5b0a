//! Repository layer
//!
//! Repositories hold what the service persists between calls. The only
//! capability today is storing a name; the in-memory store keeps the most
//! recent one for the lifetime of the process.
//!
//! Repositories are trait-based so the service can run with any store, or
//! with none at all.

mod store;

// Re-export traits
pub use store::NameRepository;

// Re-export implementations
pub use store::InMemoryStore;
