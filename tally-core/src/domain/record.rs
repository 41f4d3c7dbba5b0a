//! Record domain type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name and count handled by a single `process` call
///
/// Records are never stored as a whole; the repository keeps only the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub count: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Returns the `<name>-<count>` label for this record
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.count)
    }
}
