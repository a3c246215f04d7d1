use super::types::ScoredBook;
use crate::api::error::QueryError;
use crate::catalog::pipeline::{Field, Filter, Pipeline, ScoreExpr, SortKey, Stage};
use crate::catalog::store::BookStore;

/// Score contributed by a term occurring in the title.
const TITLE_WEIGHT: u32 = 3;
/// Score contributed by a term occurring in the author.
const AUTHOR_WEIGHT: u32 = 2;
/// Score contributed by a term occurring in the genre code.
const GENRE_WEIGHT: u32 = 1;

/// Runs a relevance search for `term` across title, author and genre.
///
/// A record matches if the term occurs case-insensitively as a substring of
/// any of the three fields. Matches are ranked by the weighted sum of the
/// fields that hit (title 3, author 2, genre 1), ties broken by title
/// ascending in raw ordinal order. The full ranked set is returned; paging
/// is the caller's concern and happens strictly after this ranking.
///
/// An empty term is rejected before the store is touched. The engine holds
/// no state and performs no logging; a failed aggregation surfaces as
/// `QueryError::Store` with the underlying cause.
pub fn search(store: &BookStore, term: &str) -> Result<Vec<ScoredBook>, QueryError> {
    if term.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let pipeline = Pipeline::new(vec![
        Stage::Match(Filter::AnyFieldContains {
            term: term.to_string(),
            fields: vec![Field::Title, Field::Author, Field::Genre],
        }),
        Stage::AddScore(ScoreExpr {
            term: term.to_string(),
            weights: vec![
                (Field::Title, TITLE_WEIGHT),
                (Field::Author, AUTHOR_WEIGHT),
                (Field::Genre, GENRE_WEIGHT),
            ],
        }),
        Stage::Sort(vec![SortKey::desc(Field::Score), SortKey::asc(Field::Title)]),
    ]);

    let docs = store.run_aggregation(&pipeline)?;

    let mut results = Vec::with_capacity(docs.len());
    for doc in docs {
        results.push(ScoredBook::from_document(doc)?);
    }
    Ok(results)
}
