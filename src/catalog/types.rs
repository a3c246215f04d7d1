//! Catalog Data Types
//!
//! Defines the book record stored by the catalog and the validated payload
//! used to create one. Monetary amounts are fixed-point decimals end to end;
//! no binary floating point touches a price.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of genre codes a book can carry.
///
/// Serialized as the three-letter code on the wire and inside pipeline
/// documents, so a free-text search can match against the code itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    #[serde(rename = "FIC")]
    Fiction,
    #[serde(rename = "NOF")]
    NonFiction,
    #[serde(rename = "SCI")]
    Science,
    #[serde(rename = "ROM")]
    Romance,
    #[serde(rename = "MIS")]
    Mystery,
    #[serde(rename = "FAN")]
    Fantasy,
    #[serde(rename = "PRO")]
    Programming,
    #[serde(rename = "DAT")]
    Databases,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::Romance,
        Genre::Mystery,
        Genre::Fantasy,
        Genre::Programming,
        Genre::Databases,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Genre::Fiction => "FIC",
            Genre::NonFiction => "NOF",
            Genre::Science => "SCI",
            Genre::Romance => "ROM",
            Genre::Mystery => "MIS",
            Genre::Fantasy => "FAN",
            Genre::Programming => "PRO",
            Genre::Databases => "DAT",
        }
    }
}

/// A book as held by the store.
///
/// `id`, `created_at` and `updated_at` are store-assigned and never touched
/// by the query engines; the engines only read records and derive transient
/// results from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    pub genre: Genre,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a book.
///
/// Validated before the store accepts it: non-empty bounded title/author,
/// non-negative price with at most two decimal places and ten total digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    pub genre: Genre,
    pub price: Decimal,
}

impl BookDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(anyhow::anyhow!("Title must not be empty"));
        }
        if self.title.chars().count() > 200 {
            return Err(anyhow::anyhow!("Title must be at most 200 characters"));
        }
        if self.author.is_empty() {
            return Err(anyhow::anyhow!("Author must not be empty"));
        }
        if self.author.chars().count() > 100 {
            return Err(anyhow::anyhow!("Author must be at most 100 characters"));
        }
        if self.price.is_sign_negative() {
            return Err(anyhow::anyhow!("Price must not be negative"));
        }
        if self.price.normalize().scale() > 2 {
            return Err(anyhow::anyhow!("Price must have at most 2 decimal places"));
        }
        // 10 total digits at 2 decimal places caps the price at 99,999,999.99.
        if self.price > Decimal::new(9_999_999_999, 2) {
            return Err(anyhow::anyhow!("Price must have at most 10 digits"));
        }
        Ok(())
    }
}
