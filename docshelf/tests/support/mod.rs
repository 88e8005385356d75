#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use docshelf::{memory::InMemoryStore, prelude::*};

/// Fixed reference instant so timestamp filters are reproducible.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn one_hour_ago() -> DateTime<Utc> {
    now() - Duration::hours(1)
}

pub fn first_document(created: DateTime<Utc>) -> Document {
    Document::new(
        "First Document",
        "Content with keyword test.",
        Author::new("author1", "Author One"),
        created,
    )
    .with_id("1")
}

pub fn second_document(created: DateTime<Utc>) -> Document {
    Document::new(
        "Second Document",
        "Content without keyword.",
        Author::new("author2", "Author Two"),
        created,
    )
    .with_id("2")
}

/// A manager holding the first document (created now) and the second (created an hour ago).
pub async fn seeded_manager() -> DocumentManager<InMemoryStore> {
    let manager = DocumentManager::in_memory();
    manager.save(first_document(now())).await.unwrap();
    manager.save(second_document(one_hour_ago())).await.unwrap();
    manager
}

/// Sorted identifiers of the given documents, for order-independent comparison.
pub fn ids(documents: &[Document]) -> Vec<String> {
    let mut ids = documents
        .iter()
        .filter_map(|document| document.id_str().map(str::to_string))
        .collect::<Vec<_>>();
    ids.sort();
    ids
}

/// Hands out `doc-1`, `doc-2`, ... in order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> DocumentId {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        DocumentId::new(format!("doc-{id}"))
    }
}
