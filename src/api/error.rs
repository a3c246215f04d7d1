use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy shared by the search engine and the statistics
/// aggregator.
///
/// Every failure path produces exactly one of these; nothing is swallowed.
/// Validation variants are raised before the store is touched, `NoBooksForYear`
/// is a well-formed query with no matching data, and `Store` wraps whatever
/// the aggregation run reported.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The search term was missing or empty.
    #[error("The search parameter \"q\" is required")]
    EmptyQuery,
    /// The year parameter was missing or not a non-negative integer.
    #[error("Year parameter is required and must be a number")]
    InvalidYear,
    /// The requested year matched no records.
    #[error("No books found for year {0}")]
    NoBooksForYear(i32),
    /// The aggregation against the record store failed.
    #[error("Error processing aggregation: {0}")]
    Store(#[from] anyhow::Error),
}

impl QueryError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            QueryError::EmptyQuery | QueryError::InvalidYear => StatusCode::BAD_REQUEST,
            QueryError::NoBooksForYear(_) => StatusCode::NOT_FOUND,
            QueryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
