//! Test fixtures for search integration tests.
//!
//! Provides reusable bench records spanning the filter axes: title text,
//! category, distance from a harbor origin, rating level, and age.

use chrono::{Duration, TimeZone, Utc};
use perch_core::{BenchRating, BenchRecord, Coordinates, ViewCategory};

/// Build a minimal valid record. All fixtures share one creation instant so
/// ordering tests control recency explicitly via [`created_days_later`].
pub fn bench(
    id: &str,
    title: &str,
    category: ViewCategory,
    latitude: f64,
    longitude: f64,
) -> BenchRecord {
    BenchRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        location: Coordinates::new(latitude, longitude),
        category,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
        ratings: Vec::new(),
    }
}

/// Attach ratings as `(view, comfort)` pairs.
pub fn rated(mut record: BenchRecord, scores: &[(u8, u8)]) -> BenchRecord {
    record.ratings = scores
        .iter()
        .map(|&(view, comfort)| BenchRating::new(view, comfort))
        .collect();
    record
}

/// Shift a record's creation time forward by whole days.
pub fn created_days_later(mut record: BenchRecord, days: i64) -> BenchRecord {
    record.created_at += Duration::days(days);
    record
}

/// Reference point on the Hamburg harbor promenade.
pub fn harbor_origin() -> Coordinates {
    Coordinates::new(53.5436, 9.9717)
}

/// Five benches around the Hamburg harbor, spanning every filter axis:
///
/// | id        | title            | category | from origin | rating | age    |
/// |-----------|------------------|----------|-------------|--------|--------|
/// | pier      | Old Pier Bench   | ocean    | ~0 km       | 4.5    | newest |
/// | promenade | Promenade View   | ocean    | ~1.5 km     | 3.0    | +3d    |
/// | park      | Stadtpark Bench  | forest   | ~6 km       | 5.0    | +1d    |
/// | hill      | Harburg Hills    | forest   | ~15 km      | none   | oldest |
/// | plaza     | Rathaus Plaza    | urban    | ~2 km       | 2.0    | +2d    |
pub fn harbor_collection() -> Vec<BenchRecord> {
    vec![
        created_days_later(
            rated(
                bench("pier", "Old Pier Bench", ViewCategory::Ocean, 53.5436, 9.9717),
                &[(5, 4), (4, 5)],
            ),
            4,
        ),
        created_days_later(
            rated(
                bench(
                    "promenade",
                    "Promenade View",
                    ViewCategory::Ocean,
                    53.5446,
                    9.9940,
                ),
                &[(3, 3)],
            ),
            3,
        ),
        created_days_later(
            rated(
                bench("park", "Stadtpark Bench", ViewCategory::Forest, 53.5960, 10.0180),
                &[(5, 5)],
            ),
            1,
        ),
        bench("hill", "Harburg Hills", ViewCategory::Forest, 53.4600, 9.8100),
        created_days_later(
            rated(
                bench("plaza", "Rathaus Plaza", ViewCategory::Urban, 53.5503, 10.0000),
                &[(2, 2)],
            ),
            2,
        ),
    ]
}
