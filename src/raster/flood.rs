//! Decayed flood fill.
//!
//! Propagates an intensity value to the four axis-neighbors with geometric
//! decay per hop, bounded by a minimum-value floor. Implemented as an
//! explicit worklist so stack depth is independent of the input; without a
//! visited set every queued deposit is independent, so the result does not
//! depend on traversal order.

use crate::core::GridCoord;
use crate::raster::config::FillParams;
use crate::raster::grid::IntensityGrid;

/// Flood-fill `value` into the grid starting at `start`.
///
/// Each visited cell receives a clamped additive deposit; neighbors are
/// queued with `value / decay_divisor` until the propagated value falls
/// below the floor or the cell leaves the grid. With a spread threshold
/// set, a cell only queues its neighbors when its own value exceeds the
/// threshold.
pub fn decayed_fill(grid: &mut IntensityGrid, start: GridCoord, value: f32, params: &FillParams) {
    let mut worklist: Vec<(GridCoord, f32)> = vec![(start, value)];

    while let Some((coord, v)) = worklist.pop() {
        if v < params.floor || !grid.is_valid_coord(coord) {
            continue;
        }
        grid.deposit(coord, v);

        let child = v / params.decay_divisor;
        if child < params.floor {
            continue;
        }
        if let Some(threshold) = params.spread_threshold {
            if v <= threshold {
                continue;
            }
        }
        for neighbor in coord.neighbors_4() {
            worklist.push((neighbor, child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::config::Layer;

    fn water_params() -> FillParams {
        FillParams::for_layer(Layer::Water)
    }

    fn activity_params() -> FillParams {
        FillParams::for_layer(Layer::Activity)
    }

    #[test]
    fn test_center_gets_full_value() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 0.8, &water_params());
        assert!(grid.value_at(10, 10) >= 0.8);
    }

    #[test]
    fn test_water_spreads_one_ring_at_full_intensity() {
        // 1.0 -> neighbors 0.25 -> second ring 0.0625 < 0.1 floor
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 1.0, &water_params());
        assert!(grid.value_at(11, 10) >= 0.25);
        assert!(grid.value_at(9, 10) >= 0.25);
        // Second ring gets nothing: 0.25/4 is below the floor
        assert_eq!(grid.value_at(12, 10), 0.0);
    }

    #[test]
    fn test_below_floor_deposits_nothing() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 0.05, &water_params());
        assert!(grid.is_zero());
    }

    #[test]
    fn test_weak_activity_source_stays_local() {
        // 0.3 is not above the spread threshold, so only the seed cell fills
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 0.3, &activity_params());
        assert_eq!(grid.value_at(10, 10), 0.3);
        assert_eq!(grid.value_at(11, 10), 0.0);
    }

    #[test]
    fn test_strong_activity_source_spreads() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 0.8, &activity_params());
        assert!(grid.value_at(10, 10) >= 0.8);
        // one hop: 0.16, above floor but not above threshold, so it stops there
        assert!(grid.value_at(11, 10) > 0.15 && grid.value_at(11, 10) < 0.2);
        assert_eq!(grid.value_at(12, 10), 0.0);
    }

    #[test]
    fn test_out_of_bounds_start_is_noop() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(-5, 3), 1.0, &water_params());
        assert!(grid.is_zero());
    }

    #[test]
    fn test_edge_fill_clips_silently() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(0, 0), 1.0, &water_params());
        assert!(grid.value_at(0, 0) >= 1.0 - 1e-6);
        assert!(grid.value_at(1, 0) >= 0.25);
    }

    #[test]
    fn test_monotonic() {
        let mut grid = IntensityGrid::new(20);
        decayed_fill(&mut grid, GridCoord::new(10, 10), 0.6, &water_params());
        let before: Vec<f32> = grid.as_slice().to_vec();
        decayed_fill(&mut grid, GridCoord::new(12, 10), 0.6, &water_params());
        for (a, b) in before.iter().zip(grid.as_slice()) {
            assert!(b >= a);
        }
    }
}
