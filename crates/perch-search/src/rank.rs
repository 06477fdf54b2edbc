//! Filtering and ordering of bench records against a search query.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use perch_core::BenchRecord;

use crate::geo::haversine_km;
use crate::query::{SearchQuery, SortKey};
use crate::rating::average_rating;

/// A bench that survived filtering, augmented with its derived attributes.
///
/// Serializes flat: the record's own fields plus `average_rating` and
/// (when an origin was known) `distance_km` in one JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBench {
    #[serde(flatten)]
    pub record: BenchRecord,
    /// Pooled average over the record's ratings; 0.0 for an unrated bench.
    pub average_rating: f64,
    /// Great-circle distance from the query origin; `None` without an origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Filter and order `records` per `query`.
///
/// Each record is first augmented with its derived attributes: distance from
/// the query origin (when one is set) and pooled average rating. Filters are
/// conjunctive, applied in the order text, category, distance, rating; every
/// filter must pass, so the survivor set does not depend on that order. The
/// final sort is stable: records that compare equal under the sort key keep
/// their input order.
///
/// Input records are never mutated and duplicates by id pass through
/// unchanged. An empty input yields an empty output.
pub fn rank(records: &[BenchRecord], query: &SearchQuery) -> Vec<RankedBench> {
    let mut results: Vec<RankedBench> = records
        .iter()
        .map(|record| RankedBench {
            average_rating: average_rating(&record.ratings),
            distance_km: query
                .origin
                .map(|origin| haversine_km(origin, record.location)),
            record: record.clone(),
        })
        .collect();

    if let Some(needle) = query.text_filter() {
        let needle = needle.to_lowercase();
        results.retain(|b| b.record.title.to_lowercase().contains(&needle));
    }

    if let Some(category) = query.category {
        results.retain(|b| b.record.category == category);
    }

    if let Some(max_km) = query.max_distance_km {
        // Unknown distance (no origin) is never grounds for exclusion.
        results.retain(|b| b.distance_km.map_or(true, |d| d <= max_km));
    }

    if let Some(min) = query.min_average_rating {
        results.retain(|b| b.average_rating >= min);
    }

    match query.sort_key {
        SortKey::Distance => results.sort_by(|a, b| cmp_distance(a.distance_km, b.distance_km)),
        SortKey::Rating => results.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Recent => results.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at)),
    }

    debug!(
        record_count = records.len(),
        result_count = results.len(),
        sort_key = ?query.sort_key,
        "Ranking complete"
    );

    results
}

/// Ascending by distance; unknown distances order after all known ones.
fn cmp_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
