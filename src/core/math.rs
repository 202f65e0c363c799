//! Great-circle math for geographic coordinates.
//!
//! All distances are in meters, all angles in degrees at the API surface
//! (converted to radians internally).

use crate::core::GeoPoint;

/// Mean Earth radius in meters (IUGG value).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two points, in meters.
///
/// # Example
/// ```
/// use sthala_map::core::{GeoPoint, haversine_m};
///
/// let a = GeoPoint::new(49.0134, 12.1016);
/// let b = GeoPoint::new(49.0134, 12.1030);
/// let d = haversine_m(a, b);
/// // ~0.0014 degrees of longitude at 49°N is roughly 100m
/// assert!(d > 90.0 && d < 115.0);
/// ```
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
