//! # perch-directory
//!
//! Bench directory adapters for perch-search.
//!
//! This crate provides:
//! - REST adapter for the hosted bench backend (paged fetch, embedded ratings)
//! - Row-to-record mapping with ingestion-boundary validation
//! - Mock directory for deterministic tests (feature `mock`)
//!
//! # Feature Flags
//!
//! - `mock`: Enable the in-memory mock directory
//!
//! # Example
//!
//! ```rust,no_run
//! use perch_core::BenchDirectory;
//! use perch_directory::RestDirectory;
//!
//! #[tokio::main]
//! async fn main() -> perch_core::Result<()> {
//!     let directory = RestDirectory::from_env()?;
//!     let benches = directory.fetch_all().await?;
//!     println!("{} benches in the directory", benches.len());
//!     Ok(())
//! }
//! ```

pub mod rest;

// Mock directory for testing
#[cfg(feature = "mock")]
pub mod mock;

// Re-export core types
pub use perch_core::*;

pub use rest::{RestDirectory, RestDirectoryConfig};

#[cfg(feature = "mock")]
pub use mock::{MockCall, MockDirectory};
