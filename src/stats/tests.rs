//! Statistics Module Tests
//!
//! Validates the year aggregation: filtering, decimal reductions, rounding,
//! the not-found path, and the HTTP handler's parameter validation.
//!
//! ## Test Scopes
//! - **Aggregator**: Average/min/max/count over the matched year, ordering
//!   of the per-book summaries, half-up rounding of the average.
//! - **Handler**: 400 on missing/non-numeric year, 404 body for empty
//!   years, 200 payload shape.

#[cfg(test)]
mod tests {
    use crate::api::error::QueryError;
    use crate::catalog::store::BookStore;
    use crate::catalog::types::{BookDraft, Genre};
    use crate::stats::aggregator;
    use crate::stats::handlers::{StatsParams, handle_year_stats};
    use axum::Extension;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn draft(title: &str, author: &str, date: &str, genre: Genre, price: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            published_date: date.parse().unwrap(),
            genre,
            price: price.parse().unwrap(),
        }
    }

    fn sample_store() -> BookStore {
        let store = BookStore::new();
        store
            .insert(draft(
                "Python Programming",
                "John Doe",
                "2023-01-01",
                Genre::Programming,
                "29.99",
            ))
            .unwrap();
        store
            .insert(draft(
                "Django Master",
                "Jane Smith",
                "2023-02-01",
                Genre::Programming,
                "39.99",
            ))
            .unwrap();
        store
            .insert(draft(
                "MongoDB Basics",
                "John Doe",
                "2022-01-01",
                Genre::Databases,
                "24.99",
            ))
            .unwrap();
        store
    }

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    // ============================================================
    // AGGREGATOR TESTS
    // ============================================================

    #[test]
    fn test_year_statistics_basic() {
        let store = sample_store();
        let stats = aggregator::year_statistics(&store, 2023).unwrap();

        assert_eq!(stats.year, 2023);
        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.average_price, dec("34.99"));
        assert_eq!(stats.min_price, dec("29.99"));
        assert_eq!(stats.max_price, dec("39.99"));
        assert_eq!(stats.books.len(), 2);
    }

    #[test]
    fn test_books_ordered_by_price_descending() {
        let store = sample_store();
        let stats = aggregator::year_statistics(&store, 2023).unwrap();

        assert_eq!(stats.books[0].title, "Django Master");
        assert_eq!(stats.books[0].price, dec("39.99"));
        assert_eq!(stats.books[1].title, "Python Programming");
        assert_eq!(stats.books[1].price, dec("29.99"));
    }

    #[test]
    fn test_single_book_year() {
        let store = sample_store();
        let stats = aggregator::year_statistics(&store, 2022).unwrap();

        assert_eq!(stats.total_books, 1);
        assert_eq!(stats.average_price, dec("24.99"));
        assert_eq!(stats.min_price, dec("24.99"));
        assert_eq!(stats.max_price, dec("24.99"));
        assert_eq!(stats.books[0].author, "John Doe");
    }

    #[test]
    fn test_empty_year_is_not_found() {
        let store = sample_store();
        let result = aggregator::year_statistics(&store, 2021);

        assert!(matches!(result, Err(QueryError::NoBooksForYear(2021))));
    }

    #[test]
    fn test_average_rounds_half_up() {
        let store = BookStore::new();
        store
            .insert(draft("Book A", "Author", "2020-03-01", Genre::Fiction, "10.00"))
            .unwrap();
        store
            .insert(draft("Book B", "Author", "2020-06-01", Genre::Fiction, "10.05"))
            .unwrap();

        let stats = aggregator::year_statistics(&store, 2020).unwrap();
        // Exact mean is 10.025; half-up takes it to 10.03
        assert_eq!(stats.average_price, dec("10.03"));
    }

    #[test]
    fn test_average_rounds_down_below_midpoint() {
        let store = BookStore::new();
        store
            .insert(draft("Book A", "Author", "2020-03-01", Genre::Fiction, "10.00"))
            .unwrap();
        store
            .insert(draft("Book B", "Author", "2020-06-01", Genre::Fiction, "10.00"))
            .unwrap();
        store
            .insert(draft("Book C", "Author", "2020-09-01", Genre::Fiction, "10.01"))
            .unwrap();

        let stats = aggregator::year_statistics(&store, 2020).unwrap();
        // Exact mean is 10.00333...; rounds down to 10.00
        assert_eq!(stats.average_price, dec("10.00"));
    }

    #[test]
    fn test_min_max_stay_exact() {
        let store = BookStore::new();
        store
            .insert(draft("Book A", "Author", "2020-03-01", Genre::Fiction, "11.37"))
            .unwrap();
        store
            .insert(draft("Book B", "Author", "2020-06-01", Genre::Fiction, "92.41"))
            .unwrap();

        let stats = aggregator::year_statistics(&store, 2020).unwrap();
        assert_eq!(stats.min_price, dec("11.37"));
        assert_eq!(stats.max_price, dec("92.41"));
    }

    #[test]
    fn test_year_boundary_is_exact() {
        let store = BookStore::new();
        store
            .insert(draft("Eve", "Author", "2022-12-31", Genre::Fiction, "10.00"))
            .unwrap();
        store
            .insert(draft("Day One", "Author", "2023-01-01", Genre::Fiction, "20.00"))
            .unwrap();

        let stats = aggregator::year_statistics(&store, 2023).unwrap();
        assert_eq!(stats.total_books, 1);
        assert_eq!(stats.books[0].title, "Day One");
    }

    #[test]
    fn test_stats_serialize_with_string_prices() {
        let store = sample_store();
        let stats = aggregator::year_statistics(&store, 2023).unwrap();

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["average_price"], "34.99");
        assert_eq!(json["min_price"], "29.99");
        assert_eq!(json["max_price"], "39.99");
        assert_eq!(json["total_books"], serde_json::Value::from(2u64));
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_handler_returns_statistics() {
        let store = Arc::new(sample_store());
        let params = StatsParams {
            year: Some("2023".to_string()),
        };

        let response = handle_year_stats(Query(params), Extension(store)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["year"], serde_json::Value::from(2023));
        assert_eq!(body["average_price"], "34.99");
        assert_eq!(body["books"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_handler_rejects_missing_year() {
        let store = Arc::new(sample_store());
        let params = StatsParams { year: None };

        let response = handle_year_stats(Query(params), Extension(store)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handler_rejects_non_numeric_year() {
        let store = Arc::new(sample_store());
        let params = StatsParams {
            year: Some("invalid".to_string()),
        };

        let response = handle_year_stats(Query(params), Extension(store)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_handler_rejects_signed_year() {
        let store = Arc::new(sample_store());
        let params = StatsParams {
            year: Some("-2023".to_string()),
        };

        let response = handle_year_stats(Query(params), Extension(store)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handler_not_found_body_echoes_year() {
        let store = Arc::new(sample_store());
        let params = StatsParams {
            year: Some("2021".to_string()),
        };

        let response = handle_year_stats(Query(params), Extension(store)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["year"], serde_json::Value::from(2021));
        assert_eq!(body["message"], "No books found for year 2021");
    }
}
