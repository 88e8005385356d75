//! The document repository interface.
//!
//! [`DocumentManager`] owns a storage backend and an identifier generator. It is the only place
//! where documents are validated and assigned identifiers; backends only ever see documents that
//! already carry one.
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//! use chrono::Utc;
//!
//! let manager = DocumentManager::in_memory();
//! let saved = manager
//!     .save(Document::new("Title", "Body", Author::new("a1", "Ann"), Utc::now()))
//!     .await?;
//!
//! let found = manager.find_by_id(saved.id_str().unwrap_or_default()).await?;
//! assert_eq!(found, Some(saved));
//! ```

use docshelf_core::{
    backend::StoreBackend,
    criteria::SearchCriteria,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, UuidGenerator},
    query::Expr,
};
use docshelf_memory::InMemoryStore;

/// A document repository bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentManager<B: StoreBackend> {
    backend: B,
    id_generator: Box<dyn IdGenerator>,
}

impl DocumentManager<InMemoryStore> {
    /// Creates a repository over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<B: StoreBackend> DocumentManager<B> {
    /// Creates a new repository with the given backend, generating UUID v4 identifiers.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_generator: Box::new(UuidGenerator),
        }
    }

    /// Replaces the identifier generator used for documents saved without an identifier.
    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Box::new(id_generator);
        self
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Inserts or replaces a document.
    ///
    /// A document without an identifier (unset or empty) is given a freshly generated one. A
    /// document that already has an identifier keeps it and fully replaces whatever was stored
    /// under it, `created` included.
    ///
    /// # Returns
    ///
    /// The saved document, guaranteed to carry a non-empty identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidDocument`] if the document fails validation.
    pub async fn save(&self, mut document: Document) -> DocumentStoreResult<Document> {
        document.validate()?;

        let id = match document.id.clone().filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let id = self.id_generator.next_id();

                if id.is_empty() {
                    return Err(DocumentStoreError::InvalidDocument(
                        "identifier generator produced an empty identifier".to_string(),
                    ));
                }

                tracing::debug!(document_id = %id, "assigned identifier");
                document.id = Some(id.clone());
                id
            }
        };

        self.backend
            .upsert_document(id, document.clone())
            .await?;

        Ok(document)
    }

    /// Looks up a document by identifier.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no document is stored under `id`.
    pub async fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        self.backend.get_document(id).await
    }

    /// Returns every stored document matching all of the set criteria.
    ///
    /// Unconstrained criteria return every stored document. The order of the result carries
    /// no meaning.
    pub async fn search(&self, criteria: &SearchCriteria) -> DocumentStoreResult<Vec<Document>> {
        let filter = criteria.to_expr();
        let documents = self.backend
            .query_documents(filter.as_ref())
            .await?;

        tracing::debug!(matched = documents.len(), "search finished");

        Ok(documents)
    }

    /// Returns every stored document matching an arbitrary filter expression.
    pub async fn query(&self, filter: &Expr) -> DocumentStoreResult<Vec<Document>> {
        self.backend
            .query_documents(Some(filter))
            .await
    }

    /// Returns the number of stored documents.
    pub async fn count(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents().await
    }
}
