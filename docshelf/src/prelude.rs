//! Convenient re-exports of commonly used types from docshelf.
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```

pub use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    config::StoreConfig,
    criteria::SearchCriteria,
    document::{Author, Document, DocumentExt, DocumentId},
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, UuidGenerator},
    query::{DocumentField, Expr, FieldOp, FieldValue, Filter, Match, QueryVisitor},
};

pub use crate::manager::DocumentManager;
