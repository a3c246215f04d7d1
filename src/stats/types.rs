use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-book summary pushed into the statistics response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub price: Decimal,
}

/// Price statistics for one publication year.
///
/// `books` lists every matched record, ordered by price descending.
#[derive(Debug, Clone, Serialize)]
pub struct YearStats {
    pub year: i32,
    pub average_price: Decimal,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub total_books: u64,
    pub books: Vec<BookSummary>,
}
