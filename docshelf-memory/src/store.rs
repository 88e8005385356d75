//! In-memory storage implementation for the document repository.
//!
//! Documents live in a `HashMap` keyed by identifier, behind an async-aware read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;

use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    config::StoreConfig,
    document::{Document, DocumentId},
    error::DocumentStoreResult,
    query::Expr,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<DocumentId, Document>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state. Clones of the same
/// instance share the same underlying data, while every call to [`InMemoryStore::new`] starts
/// an independent, empty store. Each operation holds the lock for its whole duration: writes
/// are exclusive, reads are shared.
///
/// # Performance
///
/// Queries scan every stored document. There is no indexing.
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf::backend::StoreBackend;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     store.upsert_document("1".into(), document.with_id("1")).await?;
///     assert!(store.get_document("1").await?.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates a new empty store sized according to `config`.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(config.capacity))),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docshelf_memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::builder().capacity(128).build().await?;
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn upsert_document(&self, id: DocumentId, document: Document) -> DocumentStoreResult<()> {
        let mut documents = self.documents.write().await;
        let replaced = documents
            .insert(id.clone(), document)
            .is_some();

        tracing::debug!(document_id = %id, replaced, "stored document");

        Ok(())
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let found = self.documents
            .read()
            .await
            .get(id)
            .cloned();

        tracing::trace!(document_id = id, found = found.is_some(), "looked up document");

        Ok(found)
    }

    async fn query_documents(&self, filter: Option<&Expr>) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read().await;

        // Apply the filter expression if present
        let matched = match filter {
            Some(filter) => DocumentEvaluator::filter_documents(
                documents.values(),
                filter,
            )?,
            None => documents
                .values()
                .cloned()
                .collect::<Vec<_>>(),
        };

        tracing::debug!(scanned = documents.len(), matched = matched.len(), "queried documents");

        Ok(matched)
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().await.len())
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStore::builder().build().await.unwrap();
/// }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    config: StoreConfig,
}

impl InMemoryStoreBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the number of documents to reserve room for.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::with_config(&self.config))
    }
}
