//! REST directory adapter for the hosted bench backend.
//!
//! Speaks the backend's row endpoint dialect: offset/limit pagination with
//! `Prefer: count=exact` and a `Content-Range` total on the first page,
//! embedded rating rows selected alongside the bench columns, and an API key
//! sent as both `apikey` and bearer token. Rows are mapped into the decoupled
//! [`BenchRecord`] model at the ingestion boundary; rows that fail validation
//! are skipped with a warning rather than failing the whole fetch.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use perch_core::defaults::{
    DEFAULT_DIRECTORY_TABLE, DEFAULT_DIRECTORY_URL, DIRECTORY_PAGE_SIZE, DIRECTORY_TIMEOUT_SECS,
    ENV_DIRECTORY_KEY, ENV_DIRECTORY_PAGE_SIZE, ENV_DIRECTORY_URL,
};
use perch_core::{
    validate_record, BenchDirectory, BenchRating, BenchRecord, Coordinates, Error, Result,
    ViewCategory,
};

/// Column selection for bench rows, with rating rows embedded per bench.
const SELECT_COLUMNS: &str = "*,bench_rating(view_rating,comfort_rating)";

/// Configuration for the REST directory adapter.
#[derive(Debug, Clone)]
pub struct RestDirectoryConfig {
    /// Base URL of the backend's REST endpoint.
    pub base_url: String,
    /// API key sent as `apikey` and bearer token; `None` for open backends.
    pub api_key: Option<String>,
    /// Table path for bench rows, relative to the base URL.
    pub table: String,
    /// Rows per page.
    pub page_size: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RestDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DIRECTORY_URL.to_string(),
            api_key: None,
            table: DEFAULT_DIRECTORY_TABLE.to_string(),
            page_size: DIRECTORY_PAGE_SIZE,
            timeout_secs: DIRECTORY_TIMEOUT_SECS,
        }
    }
}

impl RestDirectoryConfig {
    /// Build from environment variables, falling back to the named defaults
    /// for anything unset. An empty `PERCH_DIRECTORY_KEY` counts as unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_DIRECTORY_URL).unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string());
        let api_key = std::env::var(ENV_DIRECTORY_KEY)
            .ok()
            .filter(|k| !k.is_empty());
        let page_size = std::env::var(ENV_DIRECTORY_PAGE_SIZE)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DIRECTORY_PAGE_SIZE);

        Self {
            base_url,
            api_key,
            page_size,
            ..Default::default()
        }
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the bench table path.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("directory base URL is empty".to_string()));
        }
        if self.table.trim().is_empty() {
            return Err(Error::Config("directory table path is empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("directory page size must be > 0".to_string()));
        }
        Ok(())
    }
}

/// Bench directory backed by the hosted REST endpoint.
pub struct RestDirectory {
    client: Client,
    config: RestDirectoryConfig,
}

impl RestDirectory {
    /// Create a new REST directory with the given configuration.
    pub fn new(config: RestDirectoryConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "directory",
            component = "rest",
            base_url = %config.base_url,
            table = %config.table,
            page_size = config.page_size,
            "Initializing REST directory"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(RestDirectoryConfig::from_env())
    }

    /// The active configuration.
    pub fn config(&self) -> &RestDirectoryConfig {
        &self.config
    }

    fn rows_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn page_request(&self, offset: usize) -> RequestBuilder {
        // A fixed order keeps offset pagination consistent between pages.
        let mut request = self
            .client
            .get(self.rows_url())
            .query(&[("select", SELECT_COLUMNS), ("order", "bench_id.asc")])
            .query(&[("offset", offset), ("limit", self.config.page_size)]);

        if let Some(key) = &self.config.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }
        request
    }

    async fn fetch_page(&self, offset: usize) -> Result<Vec<BenchRow>> {
        let response = self.page_request(offset).send().await?;
        Self::decode_rows(response).await
    }

    /// Fetch the first page along with the backend's total row count.
    async fn fetch_first_page(&self) -> Result<(Vec<BenchRow>, usize)> {
        let response = self
            .page_request(0)
            .header("Prefer", "count=exact")
            .send()
            .await?;

        // Grab the header before the body consumes the response.
        let content_range = response
            .headers()
            .get("Content-Range")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let rows = Self::decode_rows(response).await?;

        let total = match content_range {
            Some(value) => content_range_total(&value)?,
            None => {
                return Err(Error::Directory(
                    "Missing Content-Range header in paged response".to_string(),
                ))
            }
        };

        Ok((rows, total))
    }

    async fn decode_rows(response: Response) -> Result<Vec<BenchRow>> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Directory(format!(
                "Directory returned {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let rows: Vec<BenchRow> = serde_json::from_str(&body)?;
        Ok(rows)
    }
}

#[async_trait]
impl BenchDirectory for RestDirectory {
    #[instrument(skip(self), fields(
        subsystem = "directory",
        component = "rest",
        op = "fetch_all",
        table = %self.config.table,
    ))]
    async fn fetch_all(&self) -> Result<Vec<BenchRecord>> {
        let start = Instant::now();

        let (mut rows, total) = self.fetch_first_page().await?;
        let page_count = if total == 0 {
            1
        } else {
            total.div_ceil(self.config.page_size)
        };
        debug!(total_count = total, page_count, "First page fetched");

        if page_count > 1 {
            let page_size = self.config.page_size;
            let remaining =
                try_join_all((1..page_count).map(|page| self.fetch_page(page * page_size))).await?;
            for page_rows in remaining {
                rows.extend(page_rows);
            }
        }

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for row in rows {
            let row_id = row.bench_id.clone();
            match BenchRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!(bench_id = %row_id, error = %e, "Skipping invalid directory row");
                }
            }
        }

        info!(
            record_count = records.len(),
            skipped_count = skipped,
            page_count,
            total_count = total,
            duration_ms = start.elapsed().as_millis() as u64,
            "Directory fetch complete"
        );

        Ok(records)
    }

    fn name(&self) -> &str {
        "rest"
    }
}

/// Total row count from a `Content-Range` value such as `0-99/3573`
/// (`*/0` for an empty collection).
fn content_range_total(value: &str) -> Result<usize> {
    let (_, total) = value
        .rsplit_once('/')
        .ok_or_else(|| Error::Directory(format!("Malformed Content-Range: {}", value)))?;
    total
        .trim()
        .parse()
        .map_err(|_| Error::Directory(format!("Malformed Content-Range total: {}", value)))
}

/// Bench row as served by the backend.
///
/// Column names mirror the backend schema; everything downstream of the
/// [`TryFrom`] mapping sees only [`BenchRecord`].
#[derive(Debug, Clone, Deserialize)]
struct BenchRow {
    bench_id: String,
    bench_title: String,
    #[serde(default)]
    bench_description: Option<String>,
    latitude: f64,
    longitude: f64,
    view_type: String,
    inserted_at: DateTime<Utc>,
    #[serde(default)]
    bench_rating: Vec<RatingRow>,
}

/// Embedded rating row.
#[derive(Debug, Clone, Deserialize)]
struct RatingRow {
    view_rating: u8,
    comfort_rating: u8,
}

impl TryFrom<BenchRow> for BenchRecord {
    type Error = Error;

    fn try_from(row: BenchRow) -> Result<Self> {
        let category = ViewCategory::from_str_loose(&row.view_type)
            .ok_or_else(|| Error::InvalidRecord(format!("unknown view type: {}", row.view_type)))?;

        let record = BenchRecord {
            id: row.bench_id,
            title: row.bench_title,
            description: row.bench_description,
            location: Coordinates::new(row.latitude, row.longitude),
            category,
            created_at: row.inserted_at,
            ratings: row
                .bench_rating
                .into_iter()
                .map(|r| BenchRating::new(r.view_rating, r.comfort_rating))
                .collect(),
        };
        validate_record(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> BenchRow {
        BenchRow {
            bench_id: "b-001".to_string(),
            bench_title: "Harbour View".to_string(),
            bench_description: Some("Faces the old pier".to_string()),
            latitude: 53.5511,
            longitude: 9.9937,
            view_type: "ocean".to_string(),
            inserted_at: "2026-03-14T09:00:00Z".parse().unwrap(),
            bench_rating: vec![RatingRow {
                view_rating: 5,
                comfort_rating: 4,
            }],
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = RestDirectoryConfig::default();
        assert_eq!(config.base_url, DEFAULT_DIRECTORY_URL);
        assert_eq!(config.table, DEFAULT_DIRECTORY_TABLE);
        assert_eq!(config.page_size, DIRECTORY_PAGE_SIZE);
        assert_eq!(config.timeout_secs, DIRECTORY_TIMEOUT_SECS);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = RestDirectoryConfig::default()
            .with_base_url("https://db.example.net")
            .with_api_key("secret")
            .with_table("public_benches")
            .with_page_size(25)
            .with_timeout_secs(5);

        assert_eq!(config.base_url, "https://db.example.net");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.table, "public_benches");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_rejects_empty_base_url() {
        let err = RestDirectory::new(RestDirectoryConfig::default().with_base_url("  "))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let err = RestDirectory::new(RestDirectoryConfig::default().with_page_size(0))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rows_url_strips_trailing_slash() {
        let directory =
            RestDirectory::new(RestDirectoryConfig::default().with_base_url("http://db:8000/"))
                .unwrap();
        assert_eq!(directory.rows_url(), "http://db:8000/benches");
    }

    #[test]
    fn test_content_range_total_parses() {
        assert_eq!(content_range_total("0-99/3573").unwrap(), 3573);
        assert_eq!(content_range_total("0-0/1").unwrap(), 1);
        assert_eq!(content_range_total("*/0").unwrap(), 0);
    }

    #[test]
    fn test_content_range_total_rejects_malformed() {
        assert!(matches!(
            content_range_total("3573").unwrap_err(),
            Error::Directory(_)
        ));
        assert!(matches!(
            content_range_total("0-99/many").unwrap_err(),
            Error::Directory(_)
        ));
    }

    #[test]
    fn test_row_maps_to_record() {
        let record = BenchRecord::try_from(sample_row()).unwrap();

        assert_eq!(record.id, "b-001");
        assert_eq!(record.title, "Harbour View");
        assert_eq!(record.description.as_deref(), Some("Faces the old pier"));
        assert_eq!(record.location, Coordinates::new(53.5511, 9.9937));
        assert_eq!(record.category, ViewCategory::Ocean);
        assert_eq!(record.ratings, vec![BenchRating::new(5, 4)]);
    }

    #[test]
    fn test_row_without_ratings_maps_to_empty() {
        let row = BenchRow {
            bench_rating: Vec::new(),
            ..sample_row()
        };
        let record = BenchRecord::try_from(row).unwrap();
        assert!(record.ratings.is_empty());
    }

    #[test]
    fn test_row_with_unknown_view_type_rejected() {
        let row = BenchRow {
            view_type: "seaside".to_string(),
            ..sample_row()
        };
        let err = BenchRecord::try_from(row).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_row_with_out_of_range_latitude_rejected() {
        let row = BenchRow {
            latitude: 95.0,
            ..sample_row()
        };
        let err = BenchRecord::try_from(row).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_row_with_out_of_scale_rating_rejected() {
        let row = BenchRow {
            bench_rating: vec![RatingRow {
                view_rating: 6,
                comfort_rating: 3,
            }],
            ..sample_row()
        };
        let err = BenchRecord::try_from(row).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_row_decodes_from_backend_json() {
        let json = r#"{
            "bench_id": "b-002",
            "bench_title": "Quiet Corner",
            "latitude": 48.1351,
            "longitude": 11.5820,
            "view_type": "urban",
            "inserted_at": "2026-01-05T08:30:00Z",
            "bench_rating": [
                {"view_rating": 3, "comfort_rating": 4},
                {"view_rating": 4, "comfort_rating": 4}
            ]
        }"#;

        let row: BenchRow = serde_json::from_str(json).unwrap();
        assert!(row.bench_description.is_none());
        assert_eq!(row.bench_rating.len(), 2);

        let record = BenchRecord::try_from(row).unwrap();
        assert_eq!(record.category, ViewCategory::Urban);
    }
}
