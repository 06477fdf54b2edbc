//! Core traits for perch abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BenchRecord, Coordinates};

// =============================================================================
// BENCH DIRECTORY TRAITS
// =============================================================================

/// Source of bench records.
///
/// Implementations own the transport (REST backend, in-memory fixture,
/// cache); callers only see the decoupled [`BenchRecord`] model. Records
/// returned from `fetch_all` must already have passed ingestion validation
/// (see [`crate::validate`]) — the search pipeline assumes valid inputs.
#[async_trait]
pub trait BenchDirectory: Send + Sync {
    /// Fetch the full bench collection.
    ///
    /// How the collection is obtained (single request, concurrent pages,
    /// cache) is the implementation's concern.
    async fn fetch_all(&self) -> Result<Vec<BenchRecord>>;

    /// Implementation identifier for logs ("rest", "mock").
    fn name(&self) -> &str;
}

// =============================================================================
// LOCATION TRAITS
// =============================================================================

/// Provider of the caller's current position.
///
/// Absence of a fix is `Ok(None)`, never an error: downstream search simply
/// disables distance filtering and sorting. Device integration lives outside
/// this workspace; callers on a device wrap their platform API in this trait.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current location, or `None` when no fix is available.
    async fn current_location(&self) -> Result<Option<Coordinates>>;
}

/// Location provider that always resolves to the same fix.
///
/// For tests and non-device callers (a city picker, a server-side search
/// with a known viewport center).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    fix: Option<Coordinates>,
}

impl FixedLocation {
    /// Provider that always resolves to `coords`.
    pub fn at(coords: Coordinates) -> Self {
        Self { fix: Some(coords) }
    }

    /// Provider that never has a fix.
    pub fn unavailable() -> Self {
        Self { fix: None }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Option<Coordinates>> {
        Ok(self.fix)
    }
}
