//! # perch-search
//!
//! Geographic bench search for the perch platform.
//!
//! This crate provides:
//! - Haversine great-circle distance
//! - Pooled average rating over view and comfort scores
//! - Conjunctive text/category/distance/rating filtering
//! - Stable multi-key sorting (distance, rating, recency)
//! - An async engine wiring a bench directory to the ranking pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use perch_core::{Coordinates, ViewCategory};
//! use perch_directory::RestDirectory;
//! use perch_search::{BenchSearchEngine, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let directory = Arc::new(RestDirectory::from_env()?);
//!     let engine = BenchSearchEngine::new(directory);
//!
//!     // Nearest ocean benches within 5 km of the harbour
//!     let results = SearchRequest::new()
//!         .with_category(ViewCategory::Ocean)
//!         .with_max_distance_km(5.0)
//!         .with_origin(Coordinates::new(53.5511, 9.9937))
//!         .with_limit(20)
//!         .execute(&engine)
//!         .await?;
//!
//!     println!("{} benches nearby", results.len());
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod geo;
pub mod query;
pub mod rank;
pub mod rating;

// Re-export core types
pub use perch_core::*;

// Re-export search types
pub use engine::{BenchSearch, BenchSearchEngine, SearchRequest};
pub use geo::haversine_km;
pub use query::{SearchQuery, SortKey};
pub use rank::{rank, RankedBench};
pub use rating::average_rating;
