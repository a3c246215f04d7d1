use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use biblio::catalog::handlers::{handle_create_book, handle_get_book};
use biblio::catalog::store::BookStore;
use biblio::search::handlers::handle_search;
use biblio::seed::generator;
use biblio::stats::handlers::handle_year_stats;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut seed_total: usize = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--seed" => {
                seed_total = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                eprintln!("Usage: {} [--bind <addr:port>] [--seed <count>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8000 --seed 200", args[0]);
                std::process::exit(1);
            }
        }
    }

    // 1. Record store, constructed once and shared for the process lifetime:
    let store = Arc::new(BookStore::new());

    if seed_total > 0 {
        tracing::info!("Seeding {} books in chunks of {}", seed_total, generator::CHUNK_SIZE);
        let created = generator::populate(&store, seed_total)?;
        tracing::info!("Seed complete: {} books stored", created);
    }

    // 2. HTTP Router:
    let app = Router::new()
        .route("/books", post(handle_create_book))
        .route("/books/search", get(handle_search))
        .route("/books/stats", get(handle_year_stats))
        .route("/books/:id", get(handle_get_book))
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
