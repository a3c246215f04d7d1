use super::engine;
use crate::api::error::{ErrorBody, QueryError};
use crate::catalog::store::BookStore;
use crate::pagination::{self, PageParams};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Free-text relevance search over the catalog.
///
/// Returns the ranked matches wrapped in the paged envelope. A missing or
/// empty `q` is a 400 before any aggregation runs; a store failure is a 500
/// carrying the underlying message.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<BookStore>>,
) -> Response {
    let term = params.q.unwrap_or_default();
    let page_params = PageParams {
        page: params.page,
        page_size: params.page_size,
    };

    match engine::search(&store, &term) {
        Ok(results) => {
            let page =
                pagination::paginate(results, &page_params, "/books/search", &[("q", term.as_str())]);
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(err) => {
            if let QueryError::Store(_) = err {
                tracing::error!("Search failed: {}", err);
            }
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
