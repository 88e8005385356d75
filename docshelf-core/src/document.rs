//! Core types for document representation, validation and serialization.
//!
//! A [`Document`] is owned by the store once saved. Its identifier is optional until the
//! store assigns one, after which it is always non-empty.

use std::{borrow::Borrow, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// Unique identifier of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The author of a document. Embedded by value, it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A stored record with identifier, title, content, author and creation timestamp.
///
/// # Example
///
/// ```ignore
/// use docshelf::prelude::*;
/// use chrono::Utc;
///
/// let document = Document::new(
///     "First Document",
///     "Content with keyword test.",
///     Author::new("author1", "Author One"),
///     Utc::now(),
/// );
/// assert!(!document.has_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, assigned by the store on save when unset or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    pub author: Author,
    /// Caller-supplied creation time. Replaced along with every other field on upsert.
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a document without an identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Sets the identifier, consuming and returning the document.
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns `true` if the document carries a non-empty identifier.
    ///
    /// An identifier of `Some("")` counts as unset.
    pub fn has_id(&self) -> bool {
        self.id
            .as_ref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Returns the identifier as a string slice if it is set.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(DocumentId::as_str)
    }

    /// Checks that the document holds everything search relies on.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidDocument`] if the author identifier is blank.
    /// Any non-empty document identifier is accepted as given.
    pub fn validate(&self) -> DocumentStoreResult<()> {
        if self.author.id.trim().is_empty() {
            return Err(DocumentStoreError::InvalidDocument(format!(
                "author identifier must not be blank (document {})",
                self.id_str()
                    .filter(|_| self.has_id())
                    .unwrap_or("<unassigned>"),
            )));
        }

        Ok(())
    }
}

/// Extension trait providing JSON conversion for documents.
pub trait DocumentExt: Sized {
    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value>;

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> DocumentStoreResult<Self>;
}

impl DocumentExt for Document {
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}
