//! Relevance Search Module
//!
//! Scores and ranks catalog records against a free-text query.
//!
//! ## Overview
//! A query term matches a record when it occurs as a case-insensitive
//! substring of the title, the author or the genre code. Matches are
//! weighted by which fields hit (title counts most, genre least), sorted by
//! score with a deterministic title tie-break, and only then paginated.
//!
//! ## Submodules
//! - **`engine`**: Builds and runs the match/score/sort pipeline.
//! - **`types`**: The `ScoredBook` result object.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod engine;
pub mod handlers;
pub mod types;
