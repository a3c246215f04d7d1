use crate::catalog::pipeline::Document;
use crate::catalog::types::Genre;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A ranked search hit: the full record plus its relevance score.
///
/// Prices serialize as fixed-point strings and ids stay opaque strings, so
/// nothing monetary ever round-trips through a float.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    pub genre: Genre,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub score: u32,
}

impl ScoredBook {
    /// Decodes a raw pipeline document into engine-native types.
    pub fn from_document(doc: Document) -> Result<Self> {
        let book = serde_json::from_value(Value::Object(doc))?;
        Ok(book)
    }
}
