//! Coordinate types for the surroundings grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Geographic coordinate (WGS84 degrees).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True if both components are finite numbers.
    ///
    /// Non-finite coordinates are rejected at the ingestion boundary;
    /// everything past that boundary may assume finite values.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Grid coordinates (integer cell indices).
///
/// Values may lie outside the grid; all grid writes bounds-check and
/// treat out-of-range coordinates as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1), // North (screen convention, -y up)
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y + 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Planar offset from the reference point, in meters.
///
/// Screen convention: positive x is east, positive y is *south* (north
/// projects to negative y so that grid row 0 is the northern edge).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarOffset {
    /// East-west offset in meters (positive east)
    pub x_m: f64,
    /// North-south offset in meters (positive south)
    pub y_m: f64,
}

impl PlanarOffset {
    /// Create a new planar offset
    #[inline]
    pub fn new(x_m: f64, y_m: f64) -> Self {
        Self { x_m, y_m }
    }

    /// Euclidean distance from the reference point
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x_m * self.x_m + self.y_m * self.y_m).sqrt()
    }
}
