//! Example searching for benches near a fixed point.
//!
//! Wires the REST directory adapter to the search engine and prints the
//! nearest benches around Berlin Alexanderplatz.
//!
//! Run with:
//! ```bash
//! PERCH_DIRECTORY_URL=http://127.0.0.1:8000 cargo run -p perch-search --example search_nearby
//! ```
//!
//! Configuration comes from the environment (a `.env` file works too):
//!   PERCH_DIRECTORY_URL        base URL of the bench directory backend
//!   PERCH_DIRECTORY_KEY        API key, if the backend requires one
//!   PERCH_DIRECTORY_PAGE_SIZE  rows per page (default 100)
//!   RUST_LOG                   standard env filter (default: "info")

use std::sync::Arc;

use perch_core::Coordinates;
use perch_directory::RestDirectory;
use perch_search::{BenchSearchEngine, SearchRequest, SortKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let directory = Arc::new(RestDirectory::from_env()?);
    let engine = BenchSearchEngine::new(directory);

    // Alexanderplatz, Berlin
    let origin = Coordinates::new(52.5219, 13.4132);

    let results = SearchRequest::new()
        .with_origin(origin)
        .with_max_distance_km(25.0)
        .with_sort_key(SortKey::Distance)
        .with_limit(10)
        .execute(&engine)
        .await?;

    println!("=== Benches within 25 km of Alexanderplatz ===\n");

    if results.is_empty() {
        println!("No benches found. Is the directory populated?");
        return Ok(());
    }

    println!("{:<8} {:>8} {:<10} {}", "dist km", "rating", "category", "title");
    for bench in &results {
        let distance = bench
            .distance_km
            .map(|d| format!("{:.2}", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:>8.1} {:<10} {}",
            distance, bench.average_rating, bench.record.category, bench.record.title
        );
    }

    Ok(())
}
