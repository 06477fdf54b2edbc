//! Core data models for perch.
//!
//! These types are shared across all perch crates and represent the
//! bench domain entities. The shapes are deliberately independent of any
//! backend's column naming; directory adapters map their wire rows into
//! these structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// GEOGRAPHY
// =============================================================================

/// A point on the Earth's surface in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// BENCH TYPES
// =============================================================================

/// Scenic context of a bench. Closed enumeration; unknown values from a
/// backend are an ingestion error, not a new variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewCategory {
    Ocean,
    Mountain,
    Urban,
    Forest,
    Lake,
    River,
    Desert,
    Valley,
    #[default]
    Other,
}

impl ViewCategory {
    /// Parse a category from a backend string (case-insensitive).
    /// Returns None for values outside the closed enumeration.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ocean" => Some(Self::Ocean),
            "mountain" => Some(Self::Mountain),
            "urban" => Some(Self::Urban),
            "forest" => Some(Self::Forest),
            "lake" => Some(Self::Lake),
            "river" => Some(Self::River),
            "desert" => Some(Self::Desert),
            "valley" => Some(Self::Valley),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// All variants, in declaration order.
    pub fn all() -> &'static [ViewCategory] {
        &[
            Self::Ocean,
            Self::Mountain,
            Self::Urban,
            Self::Forest,
            Self::Lake,
            Self::River,
            Self::Desert,
            Self::Valley,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for ViewCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ocean => write!(f, "ocean"),
            Self::Mountain => write!(f, "mountain"),
            Self::Urban => write!(f, "urban"),
            Self::Forest => write!(f, "forest"),
            Self::Lake => write!(f, "lake"),
            Self::River => write!(f, "river"),
            Self::Desert => write!(f, "desert"),
            Self::Valley => write!(f, "valley"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A single user rating for a bench. Both scores are integers in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchRating {
    /// Score for how good the view is.
    pub view: u8,
    /// Score for how comfortable the bench is.
    pub comfort: u8,
}

impl BenchRating {
    pub fn new(view: u8, comfort: u8) -> Self {
        Self { view, comfort }
    }
}

/// A public bench as supplied by the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchRecord {
    /// Opaque unique id assigned by the directory service.
    pub id: String,
    /// Non-empty display title, at most 100 characters.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: Coordinates,
    pub category: ViewCategory,
    pub created_at: DateTime<Utc>,
    /// Order-irrelevant set of user ratings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<BenchRating>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> BenchRecord {
        BenchRecord {
            id: "bench-001".to_string(),
            title: "Harbour View".to_string(),
            description: Some("Faces the old pier".to_string()),
            location: Coordinates::new(53.5511, 9.9937),
            category: ViewCategory::Ocean,
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
            ratings: vec![BenchRating::new(5, 4)],
        }
    }

    #[test]
    fn test_view_category_serializes_lowercase() {
        let json = serde_json::to_string(&ViewCategory::Mountain).unwrap();
        assert_eq!(json, "\"mountain\"");

        let parsed: ViewCategory = serde_json::from_str("\"forest\"").unwrap();
        assert_eq!(parsed, ViewCategory::Forest);
    }

    #[test]
    fn test_view_category_default_is_other() {
        assert_eq!(ViewCategory::default(), ViewCategory::Other);
    }

    #[test]
    fn test_view_category_display_matches_serde() {
        for category in ViewCategory::all() {
            let display = category.to_string();
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", display));
        }
    }

    #[test]
    fn test_view_category_from_str_loose() {
        assert_eq!(
            ViewCategory::from_str_loose("ocean"),
            Some(ViewCategory::Ocean)
        );
        assert_eq!(
            ViewCategory::from_str_loose("OCEAN"),
            Some(ViewCategory::Ocean)
        );
        assert_eq!(
            ViewCategory::from_str_loose("  valley "),
            Some(ViewCategory::Valley)
        );
        assert_eq!(ViewCategory::from_str_loose("seaside"), None);
        assert_eq!(ViewCategory::from_str_loose(""), None);
    }

    #[test]
    fn test_view_category_all_covers_every_variant() {
        assert_eq!(ViewCategory::all().len(), 9);
        for category in ViewCategory::all() {
            assert_eq!(
                ViewCategory::from_str_loose(&category.to_string()),
                Some(*category)
            );
        }
    }

    #[test]
    fn test_coordinates_new() {
        let p = Coordinates::new(40.7128, -74.0060);
        assert_eq!(p.latitude, 40.7128);
        assert_eq!(p.longitude, -74.0060);
    }

    #[test]
    fn test_bench_record_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: BenchRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, record.id);
        assert_eq!(parsed.title, record.title);
        assert_eq!(parsed.category, record.category);
        assert_eq!(parsed.created_at, record.created_at);
        assert_eq!(parsed.ratings, record.ratings);
    }

    #[test]
    fn test_bench_record_skips_empty_optionals() {
        let record = BenchRecord {
            description: None,
            ratings: Vec::new(),
            ..sample_record()
        };
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("ratings"));
    }

    #[test]
    fn test_bench_record_ratings_default_when_absent() {
        let json = r#"{
            "id": "bench-002",
            "title": "Quiet Corner",
            "location": {"latitude": 0.0, "longitude": 0.0},
            "category": "urban",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;

        let record: BenchRecord = serde_json::from_str(json).unwrap();
        assert!(record.ratings.is_empty());
        assert!(record.description.is_none());
    }
}
