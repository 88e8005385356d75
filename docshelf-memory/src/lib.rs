//! In-memory document storage backend for docshelf.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses an async-aware read-write lock for access and evaluates filter expressions by
//! scanning every stored document.
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryStore::builder().build().await?;
//!     let manager = DocumentManager::new(backend);
//!
//!     let saved = manager.save(document).await?;
//!     assert!(saved.has_id());
//!
//!     Ok(())
//! }
//! ```

pub mod store;
mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
