//! Core of the docshelf in-memory document repository.
//!
//! This crate provides:
//!
//! - **Data model** ([`document`]) - Documents, authors, identifiers and validation
//! - **Search criteria** ([`criteria`]) - Optional-field search requests
//! - **Filter expressions** ([`query`]) - Composable filters and the visitor backends implement
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Identifier generation** ([`id`]) - Fresh identifiers for unsaved documents
//! - **Configuration** ([`config`]) - Settings consumed by backend builders
//! - **Error handling** ([`error`]) - Error types and result types
//! - **Text matching** ([`text`]) - Case-insensitive string comparisons

pub mod backend;
pub mod config;
pub mod criteria;
pub mod document;
pub mod error;
pub mod id;
pub mod query;
pub mod text;
