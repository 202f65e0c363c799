//! Core types for the sthala-map surroundings library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GeoPoint`]: geographic coordinate (WGS84 degrees)
//! - [`GridCoord`]: integer grid cell coordinate
//! - [`PlanarOffset`]: planar meters relative to the reference point
//! - [`haversine_m`]: great-circle distance

mod math;
mod point;

pub use math::{haversine_m, EARTH_RADIUS_M};
pub use point::{GeoPoint, GridCoord, PlanarOffset};
