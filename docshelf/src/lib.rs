//! An in-memory document repository with upsert, lookup by identifier and multi-criteria search.
//!
//! This crate is the primary entry point. It re-exports the core types and provides the
//! [`DocumentManager`](manager::DocumentManager) that ties a storage backend to identifier
//! generation, validation and search.
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! #[tokio::main]
//! async fn main() -> DocumentStoreResult<()> {
//!     let manager = DocumentManager::in_memory();
//!     let now = Utc::now();
//!
//!     manager
//!         .save(Document::new(
//!             "First Document",
//!             "Content with keyword test.",
//!             Author::new("author1", "Author One"),
//!             now,
//!         ))
//!         .await?;
//!
//!     let results = manager
//!         .search(&SearchCriteria {
//!             title_prefixes: Some(vec!["first".to_string()]),
//!             contains_contents: Some(vec!["TEST".to_string()]),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     assert_eq!(results.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! # Filter expressions
//!
//! When the criteria object cannot express a query (an OR across dimensions, a negation),
//! build a filter directly:
//!
//! ```ignore
//! let filter = Filter::any_of(DocumentField::AuthorId, vec!["author1"])
//!     .or(Filter::contains_ignore_case(DocumentField::Content, "urgent"));
//!
//! let results = manager.query(&filter).await?;
//! ```
//!
//! # Logging
//!
//! Store operations emit `tracing` events at `debug` and `trace` level. Install a subscriber
//! in the application to see them.

pub mod manager;
pub mod prelude;

pub use docshelf_core::{backend, config, criteria, document, error, id, query};

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};
}
