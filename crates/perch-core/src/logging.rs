//! Structured logging schema and field name constants for perch.
//!
//! All crates use these constants for consistent structured logging fields.
//! This ensures log aggregation tools can query by standardized field names
//! across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Fetch failed or result unusable, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied (invalid row skipped) |
//! | INFO  | Lifecycle events (adapter init), operation completions |
//! | DEBUG | Stage timings, intermediate counts, config choices |
//! | TRACE | Per-record detail (distances, filter decisions) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "directory"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "engine", "rank", "rest", "mock"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "fetch_all", "fetch_page"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Bench record id being operated on.
pub const BENCH_ID: &str = "bench_id";

/// Directory implementation name ("rest", "mock").
pub const DIRECTORY_NAME: &str = "directory";

/// Sort key applied to a search ("distance", "rating", "recent").
pub const SORT_KEY: &str = "sort_key";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Directory fetch stage duration in milliseconds.
pub const FETCH_MS: &str = "fetch_ms";

/// Ranking stage duration in milliseconds.
pub const RANK_MS: &str = "rank_ms";

/// Number of records fetched from a directory.
pub const RECORD_COUNT: &str = "record_count";

/// Number of results after filtering and ranking.
pub const RESULT_COUNT: &str = "result_count";

/// Number of invalid rows skipped during a fetch.
pub const SKIPPED_COUNT: &str = "skipped_count";

/// Number of pages fetched from a paginated backend.
pub const PAGE_COUNT: &str = "page_count";

/// Total row count reported by the backend.
pub const TOTAL_COUNT: &str = "total_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
