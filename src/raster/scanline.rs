//! Scanline polygon fill.

use crate::core::GridCoord;
use crate::raster::grid::IntensityGrid;

/// Fill a polygon's interior at a fixed intensity.
///
/// For each scanline row inside the polygon's vertical range, the edge
/// crossings are collected, sorted, and alternating crossing-pair spans
/// are deposited. Horizontal edges produce no crossings; the half-open
/// crossing rule keeps shared vertices from double-counting. No
/// propagation happens beyond the explicit fill.
///
/// Polygons with fewer than 3 in-bounds nodes are ignored. Returns the
/// number of cells deposited.
pub fn fill_polygon(grid: &mut IntensityGrid, nodes: &[GridCoord], value: f32) -> usize {
    let in_bounds = nodes.iter().filter(|c| grid.is_valid_coord(**c)).count();
    if in_bounds < 3 {
        return 0;
    }

    let size = grid.size() as i32;
    let y_min = nodes.iter().map(|c| c.y).min().unwrap_or(0).max(0);
    let y_max = nodes
        .iter()
        .map(|c| c.y)
        .max()
        .unwrap_or(-1)
        .min(size - 1);

    let mut filled = 0;
    let mut crossings: Vec<f64> = Vec::new();

    for y in y_min..=y_max {
        crossings.clear();
        let yf = y as f64;

        for i in 0..nodes.len() {
            let a = nodes[i];
            let b = nodes[(i + 1) % nodes.len()];
            if a == b {
                continue; // degenerate edge (closed ring duplicate)
            }
            let (y1, y2) = (a.y as f64, b.y as f64);
            if (y1 <= yf && yf < y2) || (y2 <= yf && yf < y1) {
                let t = (yf - y1) / (y2 - y1);
                crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil() as i32;
            let end = pair[1].floor() as i32;
            for x in start..=end {
                if grid.deposit(GridCoord::new(x, y), value) {
                    filled += 1;
                }
            }
        }
    }

    filled
}
