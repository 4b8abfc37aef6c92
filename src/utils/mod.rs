//! Utility modules for the query engine
//!
//! Shared helpers used by filtering, sorting and the session:
//! - Geo: haversine distance and coordinate centroid
//! - Collation: Thai-aware and locale-neutral name comparison

pub mod geo;
pub mod collation;

// Re-export commonly used items
pub use geo::{centroid, haversine_km, EARTH_RADIUS_KM};
pub use collation::{compare_neutral, compare_thai, Collation};
