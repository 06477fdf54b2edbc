//! # perch-core
//!
//! Core types, traits, and abstractions for the perch bench-discovery
//! platform.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other perch crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use validate::{
    validate_coordinates, validate_description, validate_rating, validate_record, validate_title,
};
