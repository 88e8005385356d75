//! Identifier generation for documents saved without an identifier.

use std::fmt::Debug;

use uuid::Uuid;

use crate::document::DocumentId;

/// Source of fresh document identifiers.
///
/// Implementations must return a non-empty identifier that is unique for the lifetime of
/// the store they are attached to.
pub trait IdGenerator: Send + Sync + Debug {
    fn next_id(&self) -> DocumentId;
}

/// Generates random, hyphenated UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> DocumentId {
        DocumentId::new(Uuid::new_v4().hyphenated().to_string())
    }
}
