//! Great-circle distance between listing coordinates
//!
//! Haversine on a spherical Earth. Inputs are not range-checked.

use crate::model::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two coordinates in kilometers
///
/// Identical points return 0.0.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of a set of coordinates (None when empty)
pub fn centroid<I>(points: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let (mut lng, mut lat, mut n) = (0.0, 0.0, 0usize);
    for p in points {
        lng += p.longitude;
        lat += p.latitude;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(Coordinate::new(lng / n as f64, lat / n as f64))
}
