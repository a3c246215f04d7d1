use super::store::BookStore;
use super::types::BookDraft;
use crate::api::error::ErrorBody;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// Creates a book from a validated draft.
pub async fn handle_create_book(
    Extension(store): Extension<Arc<BookStore>>,
    Json(draft): Json<BookDraft>,
) -> Response {
    match store.insert(draft) {
        Ok(record) => {
            tracing::debug!("Created book {}", record.id);
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create book: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Fetches a single book by its store-assigned id.
pub async fn handle_get_book(
    Extension(store): Extension<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Response {
    match store.get(&id) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: format!("Book {} not found", id),
            }),
        )
            .into_response(),
    }
}
