//! Centralized default constants for the perch workspace.
//!
//! **This module is the single source of truth** for all shared default
//! values. The search and directory crates reference these constants instead
//! of defining their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// GEODESY
// =============================================================================

/// Mean Earth radius in kilometers, used by the haversine distance.
///
/// The IUGG mean radius. The spherical model is off by at most ~0.5% against
/// the ellipsoid, far below what matters for ordering nearby benches.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// =============================================================================
// COORDINATE BOUNDS (WGS84 decimal degrees)
// =============================================================================

/// Minimum valid latitude.
pub const LATITUDE_MIN: f64 = -90.0;

/// Maximum valid latitude.
pub const LATITUDE_MAX: f64 = 90.0;

/// Minimum valid longitude.
pub const LONGITUDE_MIN: f64 = -180.0;

/// Maximum valid longitude.
pub const LONGITUDE_MAX: f64 = 180.0;

// =============================================================================
// RECORD FIELD LIMITS
// =============================================================================

/// Maximum bench title length in characters.
pub const TITLE_MAX_LENGTH: usize = 100;

/// Maximum bench description length in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

// =============================================================================
// RATING SCALE
// =============================================================================

/// Minimum valid rating score (view or comfort).
pub const RATING_MIN: u8 = 1;

/// Maximum valid rating score (view or comfort).
pub const RATING_MAX: u8 = 5;

// =============================================================================
// DIRECTORY (REST adapter)
// =============================================================================

/// Environment variable for the directory backend base URL.
pub const ENV_DIRECTORY_URL: &str = "PERCH_DIRECTORY_URL";

/// Environment variable for the directory backend API key.
pub const ENV_DIRECTORY_KEY: &str = "PERCH_DIRECTORY_KEY";

/// Environment variable for the directory page size.
pub const ENV_DIRECTORY_PAGE_SIZE: &str = "PERCH_DIRECTORY_PAGE_SIZE";

/// Default directory backend base URL (local development stack).
pub const DEFAULT_DIRECTORY_URL: &str = "http://127.0.0.1:8000";

/// Default table path for the bench row endpoint, relative to the base URL.
pub const DEFAULT_DIRECTORY_TABLE: &str = "benches";

/// Default rows per page for directory pagination.
///
/// Large enough that a typical city's bench collection arrives in one or two
/// requests, small enough to keep individual response bodies cheap.
pub const DIRECTORY_PAGE_SIZE: usize = 100;

/// Default directory HTTP request timeout in seconds.
pub const DIRECTORY_TIMEOUT_SECS: u64 = 30;
