//! Ingestion-boundary validation for bench records.
//!
//! Directory adapters run these checks on every row before it enters the
//! search pipeline; the ranker assumes its inputs already passed. Each check
//! returns [`Error::InvalidRecord`] naming the offending field and value.

use crate::defaults::{
    DESCRIPTION_MAX_LENGTH, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, RATING_MAX,
    RATING_MIN, TITLE_MAX_LENGTH,
};
use crate::error::{Error, Result};
use crate::models::{BenchRating, BenchRecord, Coordinates};

/// Validate that coordinates lie within WGS84 decimal-degree bounds.
///
/// Non-finite values (NaN, ±inf) fail the range checks.
pub fn validate_coordinates(location: Coordinates) -> Result<()> {
    if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&location.latitude) {
        return Err(Error::InvalidRecord(format!(
            "latitude {} out of range [{}, {}]",
            location.latitude, LATITUDE_MIN, LATITUDE_MAX
        )));
    }
    if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&location.longitude) {
        return Err(Error::InvalidRecord(format!(
            "longitude {} out of range [{}, {}]",
            location.longitude, LONGITUDE_MIN, LONGITUDE_MAX
        )));
    }
    Ok(())
}

/// Validate a bench title: non-empty after trimming, at most
/// [`TITLE_MAX_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::InvalidRecord("title must not be empty".to_string()));
    }
    let len = title.chars().count();
    if len > TITLE_MAX_LENGTH {
        return Err(Error::InvalidRecord(format!(
            "title length {} exceeds maximum of {} characters",
            len, TITLE_MAX_LENGTH
        )));
    }
    Ok(())
}

/// Validate a bench description: at most [`DESCRIPTION_MAX_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<()> {
    let len = description.chars().count();
    if len > DESCRIPTION_MAX_LENGTH {
        return Err(Error::InvalidRecord(format!(
            "description length {} exceeds maximum of {} characters",
            len, DESCRIPTION_MAX_LENGTH
        )));
    }
    Ok(())
}

/// Validate a rating entry: both scores within the 1-5 scale.
pub fn validate_rating(rating: BenchRating) -> Result<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating.view) {
        return Err(Error::InvalidRecord(format!(
            "view rating {} out of range [{}, {}]",
            rating.view, RATING_MIN, RATING_MAX
        )));
    }
    if !(RATING_MIN..=RATING_MAX).contains(&rating.comfort) {
        return Err(Error::InvalidRecord(format!(
            "comfort rating {} out of range [{}, {}]",
            rating.comfort, RATING_MIN, RATING_MAX
        )));
    }
    Ok(())
}

/// Validate a full bench record against every ingestion rule.
pub fn validate_record(record: &BenchRecord) -> Result<()> {
    validate_title(&record.title)?;
    if let Some(description) = &record.description {
        validate_description(description)?;
    }
    validate_coordinates(record.location)?;
    for rating in &record.ratings {
        validate_rating(*rating)?;
    }
    Ok(())
}
