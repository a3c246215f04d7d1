//! Typed Aggregation Pipeline
//!
//! A small query language executed by the store against its documents,
//! shaped like a declarative sequence of filter/transform/group stages.
//!
//! ## Stages
//! - **`Match`**: keeps documents passing a filter (substring across fields,
//!   or calendar-year equality on a date field).
//! - **`AddScore`**: attaches an integer relevance score computed as a
//!   weighted sum of field matches.
//! - **`Sort`**: re-orders documents by one or more typed keys.
//! - **`Group`**: collapses the whole sequence into a single summary
//!   document (average/min/max/count over a decimal field plus a pushed
//!   list of per-document summaries).
//!
//! Documents are plain JSON object maps; stages read typed values back out
//! of them (decimals arrive as strings, dates as ISO-8601). Substring
//! matching is explicit case-folding plus `contains`, locale-naive.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde_json::Value;
use std::cmp::Ordering;

/// Raw document flowing through a pipeline.
pub type Document = serde_json::Map<String, Value>;

/// Fields of a book document addressable from a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Genre,
    PublishedDate,
    Price,
    /// Present only after an `AddScore` stage has run.
    Score,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::PublishedDate => "published_date",
            Field::Price => "price",
            Field::Score => "score",
        }
    }
}

/// Predicate applied by a `Match` stage.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Case-insensitive substring match against any of the listed fields.
    AnyFieldContains { term: String, fields: Vec<Field> },
    /// Keeps documents whose date field falls in the given calendar year.
    ///
    /// The year is taken from the date itself; no time zone is involved.
    YearEquals { field: Field, year: i32 },
}

/// Weighted field-match expression evaluated by an `AddScore` stage.
///
/// Each field that contains the term (case-insensitively) contributes its
/// weight; the sum is written into the document under `score`.
#[derive(Debug, Clone)]
pub struct ScoreExpr {
    pub term: String,
    pub weights: Vec<(Field, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One component of a compound sort.
///
/// Comparison is type-aware: scores compare as integers, prices as
/// decimals, everything else as raw strings (ordinal, byte-wise).
#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    pub field: Field,
    pub direction: Direction,
}

impl SortKey {
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }
}

/// Reduction spec for a `Group` stage.
///
/// Produces a single document with keys `average`, `min`, `max`, `count`
/// and `items`. The average is exact (unrounded); rounding is left to the
/// caller's final shaping step. `items` preserves the order the documents
/// had when the stage ran, so an upstream `Sort` decides its ordering.
#[derive(Debug, Clone)]
pub struct GroupSpec {
    /// Decimal field the average/min/max reductions run over.
    pub amount: Field,
    /// Fields copied into each element of the pushed `items` list.
    pub item_fields: Vec<Field>,
}

/// A single pipeline stage.
#[derive(Debug, Clone)]
pub enum Stage {
    Match(Filter),
    AddScore(ScoreExpr),
    Sort(Vec<SortKey>),
    Group(GroupSpec),
}

/// An ordered sequence of stages executed against a document snapshot.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Folds every stage, in order, over the document sequence.
    pub fn run(&self, mut docs: Vec<Document>) -> Result<Vec<Document>> {
        for stage in &self.stages {
            docs = match stage {
                Stage::Match(filter) => apply_match(filter, docs)?,
                Stage::AddScore(expr) => apply_score(expr, docs)?,
                Stage::Sort(keys) => apply_sort(keys, docs)?,
                Stage::Group(spec) => apply_group(spec, docs)?,
            };
        }
        Ok(docs)
    }
}

fn apply_match(filter: &Filter, docs: Vec<Document>) -> Result<Vec<Document>> {
    match filter {
        Filter::AnyFieldContains { term, fields } => {
            let needle = term.to_lowercase();
            let mut kept = Vec::new();
            for doc in docs {
                let mut matched = false;
                for field in fields {
                    if get_str(&doc, field.key())?.to_lowercase().contains(&needle) {
                        matched = true;
                        break;
                    }
                }
                if matched {
                    kept.push(doc);
                }
            }
            Ok(kept)
        }
        Filter::YearEquals { field, year } => {
            let mut kept = Vec::new();
            for doc in docs {
                if get_date(&doc, field.key())?.year() == *year {
                    kept.push(doc);
                }
            }
            Ok(kept)
        }
    }
}

fn apply_score(expr: &ScoreExpr, mut docs: Vec<Document>) -> Result<Vec<Document>> {
    let needle = expr.term.to_lowercase();
    for doc in &mut docs {
        let mut score = 0u32;
        for (field, weight) in &expr.weights {
            if get_str(doc, field.key())?.to_lowercase().contains(&needle) {
                score += weight;
            }
        }
        doc.insert(Field::Score.key().to_string(), Value::from(score));
    }
    Ok(docs)
}

/// Typed comparison value extracted from a document for one sort key.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Int(u64),
    Amount(Decimal),
    Text(String),
}

fn sort_value(doc: &Document, field: Field) -> Result<SortValue> {
    match field {
        Field::Score => Ok(SortValue::Int(get_u64(doc, field.key())?)),
        Field::Price => Ok(SortValue::Amount(get_decimal(doc, field.key())?)),
        _ => Ok(SortValue::Text(get_str(doc, field.key())?.to_string())),
    }
}

fn apply_sort(keys: &[SortKey], docs: Vec<Document>) -> Result<Vec<Document>> {
    // Extract the comparison values up front so the comparator stays
    // infallible; a malformed document fails the whole stage instead.
    let mut decorated = Vec::with_capacity(docs.len());
    for doc in docs {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(sort_value(&doc, key.field)?);
        }
        decorated.push((values, doc));
    }

    decorated.sort_by(|a, b| {
        for (index, key) in keys.iter().enumerate() {
            let ordering = match key.direction {
                Direction::Ascending => a.0[index].cmp(&b.0[index]),
                Direction::Descending => b.0[index].cmp(&a.0[index]),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    Ok(decorated.into_iter().map(|(_, doc)| doc).collect())
}

fn apply_group(spec: &GroupSpec, docs: Vec<Document>) -> Result<Vec<Document>> {
    // Grouping an empty sequence yields no document at all, which lets the
    // caller tell "no matches" apart from a zero-valued summary.
    if docs.is_empty() {
        return Ok(Vec::new());
    }

    let mut amounts = Vec::with_capacity(docs.len());
    for doc in &docs {
        amounts.push(get_decimal(doc, spec.amount.key())?);
    }

    let mut min = amounts[0];
    let mut max = amounts[0];
    let mut sum = Decimal::ZERO;
    for &amount in &amounts {
        if amount < min {
            min = amount;
        }
        if amount > max {
            max = amount;
        }
        sum += amount;
    }
    let count = amounts.len() as u64;
    let average = sum / Decimal::from(count);

    let mut items = Vec::with_capacity(docs.len());
    for doc in &docs {
        let mut item = Document::new();
        for field in &spec.item_fields {
            let key = field.key();
            let value = doc
                .get(key)
                .ok_or_else(|| anyhow::anyhow!("Document is missing field {}", key))?;
            item.insert(key.to_string(), value.clone());
        }
        items.push(Value::Object(item));
    }

    let mut summary = Document::new();
    summary.insert("average".to_string(), serde_json::to_value(average)?);
    summary.insert("min".to_string(), serde_json::to_value(min)?);
    summary.insert("max".to_string(), serde_json::to_value(max)?);
    summary.insert("count".to_string(), Value::from(count));
    summary.insert("items".to_string(), Value::Array(items));

    Ok(vec![summary])
}

fn get_value<'a>(doc: &'a Document, key: &str) -> Result<&'a Value> {
    doc.get(key)
        .ok_or_else(|| anyhow::anyhow!("Document is missing field {}", key))
}

fn get_str<'a>(doc: &'a Document, key: &str) -> Result<&'a str> {
    get_value(doc, key)?
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Field {} is not a string", key))
}

fn get_u64(doc: &Document, key: &str) -> Result<u64> {
    get_value(doc, key)?
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("Field {} is not an integer", key))
}

fn get_decimal(doc: &Document, key: &str) -> Result<Decimal> {
    let value = get_value(doc, key)?;
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(anyhow::anyhow!("Field {} is not a decimal", key)),
    };
    text.parse()
        .map_err(|e| anyhow::anyhow!("Field {} is not a decimal: {}", key, e))
}

fn get_date(doc: &Document, key: &str) -> Result<NaiveDate> {
    get_str(doc, key)?
        .parse()
        .map_err(|e| anyhow::anyhow!("Field {} is not a date: {}", key, e))
}
