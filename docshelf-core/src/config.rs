//! Store configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when a backend is built.
///
/// Deserializable so it can sit inside an application's own configuration file.
///
/// ```ignore
/// use docshelf::config::StoreConfig;
///
/// let config = StoreConfig { capacity: 1_024 };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of documents to reserve room for up front. Zero reserves nothing.
    pub capacity: usize,
}
