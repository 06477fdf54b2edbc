//! Great-circle distance on the spherical Earth model.

use perch_core::defaults::EARTH_RADIUS_KM;
use perch_core::Coordinates;

/// Great-circle distance between two points in kilometers, via the haversine
/// formula.
///
/// The haversine form stays numerically stable for both nearby and
/// near-antipodal points, and its trigonometric identities handle longitude
/// wraparound across the date line without any unwrapping step. Identical
/// inputs yield exactly `0.0`; the result is symmetric in its arguments,
/// non-negative, and bounded by half the great-circle circumference
/// (≈ 20015 km).
///
/// Inputs are assumed to be valid WGS84 decimal degrees; out-of-range
/// coordinates are rejected at the ingestion boundary
/// (`perch_core::validate`), not here.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1.0, which would NaN the sqrt below.
    let h = h.min(1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
