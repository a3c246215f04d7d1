use super::aggregator;
use crate::api::error::{ErrorBody, QueryError};
use crate::catalog::store::BookStore;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub year: Option<String>,
}

/// Body returned when a well-formed year matches no books.
#[derive(Debug, Serialize)]
pub struct NoBooksBody {
    pub year: i32,
    pub message: String,
}

/// Per-year price statistics for the catalog.
///
/// The year must be supplied as a plain non-negative integer; anything else
/// is a 400 before the store is touched. A year with no books is a 404
/// carrying the year back, and a store failure is a 500.
pub async fn handle_year_stats(
    Query(params): Query<StatsParams>,
    Extension(store): Extension<Arc<BookStore>>,
) -> Response {
    let year = match parse_year(params.year.as_deref()) {
        Some(year) => year,
        None => {
            let err = QueryError::InvalidYear;
            return (
                err.status(),
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
    };

    match aggregator::year_statistics(&store, year) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(QueryError::NoBooksForYear(year)) => (
            StatusCode::NOT_FOUND,
            Json(NoBooksBody {
                year,
                message: format!("No books found for year {}", year),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Statistics aggregation failed: {}", err);
            (
                err.status(),
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Digits-only parse, so signs, blanks and non-numeric input are all
/// rejected without touching the store.
fn parse_year(raw: Option<&str>) -> Option<i32> {
    let raw = raw?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
