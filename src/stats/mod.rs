//! Statistics Module
//!
//! Grouped price statistics for books published in a given calendar year.
//!
//! ## Overview
//! The aggregator filters the catalog on the publication date's year,
//! orders the filtered set by price descending, and collapses it into one
//! summary: average (rounded to two decimals, half-up), exact min and max,
//! the record count, and a `{title, author, price}` entry per matched book.
//! All arithmetic runs on fixed-point decimals.
//!
//! ## Submodules
//! - **`aggregator`**: Builds and runs the match/sort/group pipeline.
//! - **`types`**: The `YearStats` summary and its per-book entries.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod aggregator;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
