use super::types::{BookSummary, YearStats};
use crate::api::error::QueryError;
use crate::catalog::pipeline::{Field, Filter, GroupSpec, Pipeline, SortKey, Stage};
use crate::catalog::store::BookStore;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde_json::Value;

/// Raw shape of the single document a group stage emits.
#[derive(Debug, Deserialize)]
struct GroupRow {
    average: Decimal,
    min: Decimal,
    max: Decimal,
    count: u64,
    items: Vec<BookSummary>,
}

/// Computes price statistics over every book published in `year`.
///
/// The pipeline filters on the date's own calendar year, sorts the filtered
/// set by price descending (a deliberate contract: the `books` list comes
/// back most-expensive-first), and reduces it to average/min/max/count.
/// The average is rounded to two decimals half-up at this final shaping
/// step; min and max are returned exact.
///
/// A year with no records is `NoBooksForYear`, distinct from a validation
/// failure; the engine itself is stateless and silent.
pub fn year_statistics(store: &BookStore, year: i32) -> Result<YearStats, QueryError> {
    let pipeline = Pipeline::new(vec![
        Stage::Match(Filter::YearEquals {
            field: Field::PublishedDate,
            year,
        }),
        Stage::Sort(vec![SortKey::desc(Field::Price)]),
        Stage::Group(GroupSpec {
            amount: Field::Price,
            item_fields: vec![Field::Title, Field::Author, Field::Price],
        }),
    ]);

    let mut docs = store.run_aggregation(&pipeline)?;
    let Some(doc) = docs.pop() else {
        return Err(QueryError::NoBooksForYear(year));
    };

    let row: GroupRow =
        serde_json::from_value(Value::Object(doc)).map_err(|e| QueryError::Store(e.into()))?;

    Ok(YearStats {
        year,
        average_price: round_half_up(row.average),
        min_price: row.min,
        max_price: row.max,
        total_books: row.count,
        books: row.items,
    })
}

/// Rounds to two decimal places, midpoints away from zero.
fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
