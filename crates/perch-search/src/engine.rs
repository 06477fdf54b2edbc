//! Async search engine wiring a bench directory to the ranking pipeline.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use perch_core::{BenchDirectory, Coordinates, LocationProvider, Result, ViewCategory};

use crate::query::{SearchQuery, SortKey};
use crate::rank::{rank, RankedBench};

/// Trait for bench search operations.
#[async_trait]
pub trait BenchSearch: Send + Sync {
    /// Fetch the current bench collection and rank it against `query`.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RankedBench>>;
}

/// Search engine over a pluggable bench directory.
///
/// The engine adds no ranking semantics of its own: it fetches the full
/// collection from the directory, hands it to [`rank`], and reports stage
/// timings. Every search fetches fresh; caching, debouncing, and cancellation
/// of superseded searches belong to the caller.
pub struct BenchSearchEngine {
    directory: Arc<dyn BenchDirectory>,
}

impl BenchSearchEngine {
    /// Create a new engine backed by `directory`.
    pub fn new(directory: Arc<dyn BenchDirectory>) -> Self {
        Self { directory }
    }

    /// Name of the backing directory, for logs and diagnostics.
    pub fn directory_name(&self) -> &str {
        self.directory.name()
    }
}

#[async_trait]
impl BenchSearch for BenchSearchEngine {
    #[instrument(skip(self, query), fields(
        subsystem = "search",
        component = "engine",
        op = "search",
        directory = %self.directory.name(),
        sort_key = ?query.sort_key,
    ))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RankedBench>> {
        let start = Instant::now();

        let fetch_start = Instant::now();
        let records = self.directory.fetch_all().await?;
        debug!(
            record_count = records.len(),
            fetch_ms = fetch_start.elapsed().as_millis() as u64,
            "Directory fetch complete"
        );

        let rank_start = Instant::now();
        let results = rank(&records, query);
        debug!(
            result_count = results.len(),
            rank_ms = rank_start.elapsed().as_millis() as u64,
            "Ranking stage complete"
        );

        info!(
            record_count = records.len(),
            result_count = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Bench search completed"
        );

        Ok(results)
    }
}

/// One search invocation, built fluently and executed against an engine.
///
/// Mirrors the [`SearchQuery`] builder and adds the pieces a caller wires per
/// invocation: an optional result cap and an optional [`LocationProvider`]
/// consulted for the origin when the query does not carry one. A provider
/// without a fix (or a failing one) degrades to an origin-less search, never
/// an error.
#[derive(Clone, Default)]
pub struct SearchRequest {
    query: SearchQuery,
    limit: Option<usize>,
    location_provider: Option<Arc<dyn LocationProvider>>,
}

impl SearchRequest {
    /// Create an empty request: match everything, distance sort, no cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole query.
    pub fn with_query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    /// Set the free-text filter.
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.query = self.query.with_free_text(text);
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: ViewCategory) -> Self {
        self.query = self.query.with_category(category);
        self
    }

    /// Set the minimum average rating filter.
    pub fn with_min_average_rating(mut self, min: f64) -> Self {
        self.query = self.query.with_min_average_rating(min);
        self
    }

    /// Set the maximum distance filter in kilometers.
    pub fn with_max_distance_km(mut self, max: f64) -> Self {
        self.query = self.query.with_max_distance_km(max);
        self
    }

    /// Set the sort order.
    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.query = self.query.with_sort_key(sort_key);
        self
    }

    /// Set the origin explicitly. Takes precedence over a location provider.
    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        self.query = self.query.with_origin(origin);
        self
    }

    /// Cap the number of results. Applied after ranking, so the cap keeps the
    /// best-ordered prefix.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resolve the origin from `provider` at execution time when the query
    /// has none of its own.
    pub fn with_location_provider(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.location_provider = Some(provider);
        self
    }

    /// Run the search against `engine`.
    pub async fn execute(self, engine: &dyn BenchSearch) -> Result<Vec<RankedBench>> {
        let mut query = self.query;

        if query.origin.is_none() {
            if let Some(provider) = &self.location_provider {
                match provider.current_location().await {
                    Ok(Some(origin)) => query.origin = Some(origin),
                    Ok(None) => {
                        debug!("No location fix; searching without an origin");
                    }
                    Err(e) => {
                        warn!(error = %e, "Location provider failed; searching without an origin");
                    }
                }
            }
        }

        let mut results = engine.search(&query).await?;
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
        Ok(results)
    }
}
