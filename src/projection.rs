//! Geographic-to-grid projection.
//!
//! Converts a geographic coordinate into planar meters relative to a
//! reference point, then into an integer grid cell. The grid is laid out
//! with odd rows offset by half a cell (brick pattern), which brings the
//! cell-center spacing between adjacent rows closer to isotropic.
//!
//! Both conversions are pure and total: they never fail and always produce
//! a value. The resulting [`GridCoord`] may lie outside the grid; writes
//! bounds-check downstream.

use crate::config::GridConfig;
use crate::core::{haversine_m, GeoPoint, GridCoord, PlanarOffset};

/// Projects geographic coordinates onto the surroundings grid.
///
/// One projector is built per processing cycle and shared by all layer
/// fills; it holds only the reference point and grid geometry.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    reference: GeoPoint,
    cell_size_m: f64,
    array_size: usize,
}

impl Projector {
    /// Create a projector for the given reference point and grid geometry.
    pub fn new(reference: GeoPoint, config: &GridConfig) -> Self {
        Self {
            reference,
            cell_size_m: config.cell_size_m,
            array_size: config.array_size,
        }
    }

    /// The reference point all offsets are relative to.
    #[inline]
    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// Planar offset of `point` from the reference, in meters.
    ///
    /// The haversine distance is decomposed into an east-west component
    /// (measured along the reference latitude, signed by the longitude
    /// difference) and a north-south component (signed by the latitude
    /// difference). The north-south component is negated so that north
    /// maps to negative y (screen convention: row 0 is the northern edge).
    pub fn planar_offset(&self, point: GeoPoint) -> PlanarOffset {
        let east_probe = GeoPoint::new(self.reference.lat, point.lon);
        let mut x_m = haversine_m(self.reference, east_probe);
        if point.lon < self.reference.lon {
            x_m = -x_m;
        }

        let north_probe = GeoPoint::new(point.lat, self.reference.lon);
        let mut north_m = haversine_m(self.reference, north_probe);
        if point.lat < self.reference.lat {
            north_m = -north_m;
        }

        PlanarOffset::new(x_m, -north_m)
    }

    /// Grid cell containing `point`.
    ///
    /// Divides the planar offset by the cell size, centers on the grid
    /// midpoint, applies the half-cell brick stagger on odd rows, and
    /// floors both components.
    pub fn grid_cell(&self, point: GeoPoint) -> GridCoord {
        let offset = self.planar_offset(point);
        let half = self.array_size as f64 / 2.0;

        let fy = offset.y_m / self.cell_size_m + half;
        let row = fy.floor() as i32;

        let mut fx = offset.x_m / self.cell_size_m + half;
        if row.rem_euclid(2) == 1 {
            fx -= 0.5;
        }

        GridCoord::new(fx.floor() as i32, row)
    }
}
