//! Storage backend abstraction for the document repository.
//!
//! The [`StoreBackend`] trait provides a unified async interface for the storage operations the
//! repository needs: upsert, point lookup, filtered enumeration and counting. Identifier
//! assignment and validation happen above this layer, so a backend only ever sees documents
//! that already carry a non-empty identifier.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    document::{Document, DocumentId},
    error::DocumentStoreResult,
    query::Expr,
};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe. The exact concurrency model is
/// implementation-specific but should be documented by the implementer.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a document under `id`, replacing any document already stored under it.
    ///
    /// The replacement is total: no field of the previous document survives.
    async fn upsert_document(&self, id: DocumentId, document: Document) -> DocumentStoreResult<()>;

    /// Retrieves the document stored under `id`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no document exists for the identifier. A missing document is not an error.
    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns every stored document matching `filter`, or every document when it is `None`.
    ///
    /// The result is fully materialized. Its order is whatever order the backend enumerates
    /// documents in and carries no meaning.
    async fn query_documents(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the number of stored documents.
    async fn count_documents(&self) -> DocumentStoreResult<usize>;
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn upsert_document(&self, id: DocumentId, document: Document) -> DocumentStoreResult<()> {
        (*self)
            .upsert_document(id, document)
            .await
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (*self).get_document(id).await
    }

    async fn query_documents(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>> {
        (*self).query_documents(filter).await
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        (*self).count_documents().await
    }
}

/// Factory for backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
