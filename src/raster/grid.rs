//! Intensity grid storage.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// A square grid of intensity values in `[0.0, 1.0]`.
///
/// Accumulation is additive and clamped: `deposit` adds a contribution
/// and clamps the cell back into range, so any sequence of deposits keeps
/// every cell valid and the result is independent of deposit order (up to
/// floating-point rounding). Out-of-bounds writes are no-ops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntensityGrid {
    values: Vec<f32>,
    size: usize,
}

impl IntensityGrid {
    /// Create an all-zero grid of `size x size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![0.0; size * size],
            size,
        }
    }

    /// Grid side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if grid coordinates are within bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.size
            && (coord.y as usize) < self.size
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }

    /// Cell value, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.index(coord).map(|i| self.values[i])
    }

    /// Cell value, treating out-of-bounds as zero.
    #[inline]
    pub fn value_at(&self, x: i32, y: i32) -> f32 {
        self.get(GridCoord::new(x, y)).unwrap_or(0.0)
    }

    /// Add a contribution to a cell, clamped to `[0.0, 1.0]`.
    ///
    /// Returns `false` (and writes nothing) when the coordinate is out of
    /// bounds.
    #[inline]
    pub fn deposit(&mut self, coord: GridCoord, value: f32) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.values[i] = (self.values[i] + value).clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    /// Raw access to the cell values, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Largest cell value in the grid.
    pub fn max_value(&self) -> f32 {
        self.values.iter().fold(0.0, |acc, &v| acc.max(v))
    }

    /// True if every cell is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zero() {
        let grid = IntensityGrid::new(40);
        assert_eq!(grid.size(), 40);
        assert!(grid.is_zero());
        assert_eq!(grid.max_value(), 0.0);
    }

    #[test]
    fn test_deposit_accumulates_and_clamps() {
        let mut grid = IntensityGrid::new(10);
        let c = GridCoord::new(3, 4);
        assert!(grid.deposit(c, 0.6));
        assert_eq!(grid.get(c), Some(0.6));
        assert!(grid.deposit(c, 0.6));
        assert_eq!(grid.get(c), Some(1.0)); // clamped
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut grid = IntensityGrid::new(10);
        assert!(!grid.deposit(GridCoord::new(-1, 0), 0.5));
        assert!(!grid.deposit(GridCoord::new(0, 10), 0.5));
        assert!(grid.is_zero());
        assert_eq!(grid.get(GridCoord::new(10, 0)), None);
        assert_eq!(grid.value_at(10, 0), 0.0);
    }
}
