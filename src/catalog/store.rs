use super::pipeline::{Document, Pipeline};
use super::types::{BookDraft, BookRecord};

use anyhow::Result;
use chrono::Utc;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

/// In-process record store for the catalog.
///
/// One instance is constructed at startup, shared behind an `Arc` by every
/// handler and engine, and dropped when the process exits. Reads are
/// snapshot-style: an aggregation sees each record as it was when the
/// snapshot was taken, with no ordering guarantee across concurrent writes.
pub struct BookStore {
    books: DashMap<String, BookRecord>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    /// Validates the draft and stores it under a fresh id.
    ///
    /// `created_at` and `updated_at` are assigned here; callers never
    /// supply them.
    pub fn insert(&self, draft: BookDraft) -> Result<BookRecord> {
        draft.validate()?;

        let now = Utc::now();
        let record = BookRecord {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            author: draft.author,
            published_date: draft.published_date,
            genre: draft.genre,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };
        self.books.insert(record.id.clone(), record.clone());

        Ok(record)
    }

    pub fn get(&self, id: &str) -> Option<BookRecord> {
        self.books.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Runs an aggregation pipeline over a snapshot of every record.
    ///
    /// Records are lowered into raw JSON documents first, so stages see the
    /// same representation the wire does (string decimals, ISO dates). The
    /// order a sort stage establishes is preserved in the returned sequence.
    pub fn run_aggregation(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        let mut docs = Vec::with_capacity(self.books.len());
        for entry in self.books.iter() {
            match serde_json::to_value(entry.value())? {
                Value::Object(doc) => docs.push(doc),
                other => {
                    return Err(anyhow::anyhow!(
                        "Record {} did not serialize to a document: {}",
                        entry.key(),
                        other
                    ));
                }
            }
        }
        pipeline.run(docs)
    }
}
