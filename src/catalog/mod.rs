//! Catalog Module
//!
//! The system of record for books and the aggregation capability the query
//! engines are built on.
//!
//! ## Responsibilities
//! - **Model**: The `BookRecord` entity, its closed genre set, and the
//!   validated `BookDraft` create payload.
//! - **Storage**: `BookStore`, a process-wide concurrent map of records,
//!   constructed once at startup and injected everywhere as an `Arc`.
//! - **Aggregation**: A typed pipeline language (match / score / sort /
//!   group) executed against JSON document snapshots of the records.
//! - **API**: Minimal ingestion endpoints (create, fetch by id) so the
//!   store can be populated over HTTP.
//!
//! ## Submodules
//! - **`types`**: Domain entities and validation.
//! - **`store`**: The shared record store and its aggregation entry point.
//! - **`pipeline`**: Stage and filter definitions plus the executor.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod pipeline;
pub mod store;
pub mod types;
