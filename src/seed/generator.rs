use crate::catalog::store::BookStore;
use crate::catalog::types::{BookDraft, Genre};

use anyhow::Result;
use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

/// Books inserted per progress report.
pub const CHUNK_SIZE: usize = 50;

const TITLE_OPENERS: &[&str] = &[
    "Adaptive", "Balanced", "Compact", "Distributed", "Essential", "Practical", "Modern",
    "Profound", "Quiet", "Visual",
];

const TITLE_QUALIFIERS: &[&str] = &[
    "Composite", "Digital", "Forgotten", "Hidden", "Incremental", "Lasting", "Parallel",
    "Radiant", "Secondary", "Uncharted",
];

const TITLE_SUBJECTS: &[&str] = &[
    "Algorithms", "Architecture", "Chronicles", "Gardens", "Horizons", "Journeys", "Patterns",
    "Shadows", "Systems", "Voyages",
];

/// Fixed pool of author names used for generated books.
pub const AUTHORS: &[&str] = &[
    "Gabriel García Márquez",
    "Jorge Luis Borges",
    "Isabel Allende",
    "Julio Cortázar",
    "Mario Vargas Llosa",
    "Pablo Neruda",
    "Octavio Paz",
    "Miguel de Cervantes",
    "Federico García Lorca",
    "Carlos Ruiz Zafón",
];

/// Builds one random, valid draft.
///
/// Titles are three-word phrases, authors come from a fixed list,
/// publication dates fall within the last fifty years, and prices span
/// 10.00 to 150.00. Prices are generated as integer cents so the money
/// path stays float-free.
pub fn random_draft(rng: &mut impl Rng) -> BookDraft {
    let title = format!(
        "{} {} {}",
        TITLE_OPENERS[rng.gen_range(0..TITLE_OPENERS.len())],
        TITLE_QUALIFIERS[rng.gen_range(0..TITLE_QUALIFIERS.len())],
        TITLE_SUBJECTS[rng.gen_range(0..TITLE_SUBJECTS.len())],
    );
    let author = AUTHORS[rng.gen_range(0..AUTHORS.len())].to_string();
    let days_back = rng.gen_range(0..=50 * 365);
    let published_date = Utc::now().date_naive() - Duration::days(days_back);
    let genre = Genre::ALL[rng.gen_range(0..Genre::ALL.len())];
    let price = Decimal::new(rng.gen_range(1_000..=15_000), 2);

    BookDraft {
        title,
        author,
        published_date,
        genre,
        price,
    }
}

/// Fills the store with `total` random books, reporting progress per chunk.
pub fn populate(store: &BookStore, total: usize) -> Result<usize> {
    let mut rng = rand::thread_rng();

    let mut created = 0;
    while created < total {
        let chunk = CHUNK_SIZE.min(total - created);
        for _ in 0..chunk {
            store.insert(random_draft(&mut rng))?;
        }
        created += chunk;
        tracing::info!("Seeded {} of {} books", created, total);
    }

    Ok(created)
}
