//! Rating aggregation.

use perch_core::BenchRating;

/// Pooled mean over every score attached to a bench.
///
/// View and comfort scores from all ratings are summed into one pool and
/// divided by the total number of scores (two per rating). The pooled form is
/// the normative one: it keeps its meaning should a rating ever carry only
/// one of the two scores, where a mean-of-means would start weighting
/// ratings unevenly.
///
/// A bench with no ratings averages `0.0`, which places it below every rated
/// bench: the minimum recordable score is 1.
pub fn average_rating(ratings: &[BenchRating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let pooled: u32 = ratings
        .iter()
        .map(|r| u32::from(r.view) + u32::from(r.comfort))
        .sum();
    f64::from(pooled) / (2.0 * ratings.len() as f64)
}
