//! Search query model: filters plus sort order.

use serde::{Deserialize, Serialize};

use perch_core::{Coordinates, ViewCategory};

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Nearest first; benches without a distance sort last.
    #[default]
    Distance,
    /// Highest average rating first.
    Rating,
    /// Most recently created first.
    Recent,
}

/// A bench search: every populated filter must match (conjunctive), then the
/// survivors are ordered by [`SortKey`].
///
/// An empty query matches everything. With no `origin`, distances are unknown
/// and the distance filter is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for in the bench title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text: Option<String>,
    /// Restrict to a single view category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ViewCategory>,
    /// Keep only benches whose average rating is at least this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_average_rating: Option<f64>,
    /// Keep only benches within this many kilometers of the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_km: Option<f64>,
    /// Sort order for the final result list.
    #[serde(default)]
    pub sort_key: SortKey,
    /// Reference point for distance derivation and the `Distance` sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Coordinates>,
}

impl SearchQuery {
    /// Create an empty query: no filters, distance sort, no origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text filter.
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: ViewCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the minimum average rating filter.
    pub fn with_min_average_rating(mut self, min: f64) -> Self {
        self.min_average_rating = Some(min);
        self
    }

    /// Set the maximum distance filter in kilometers.
    pub fn with_max_distance_km(mut self, max: f64) -> Self {
        self.max_distance_km = Some(max);
        self
    }

    /// Set the sort order.
    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Set the origin for distance derivation.
    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The effective text filter: trimmed, `None` when empty or whitespace.
    pub fn text_filter(&self) -> Option<&str> {
        self.free_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// True when no filter would remove anything.
    pub fn is_unfiltered(&self) -> bool {
        self.text_filter().is_none()
            && self.category.is_none()
            && self.min_average_rating.is_none()
            && self.max_distance_km.is_none()
    }
}
