//! Per-layer feature rasterization.
//!
//! A [`LayerRasterizer`] owns its grid for the duration of one layer's
//! fill pass; the three layers have no data dependency and are filled in
//! parallel by [`rasterize_layers`].

use log::debug;

use crate::config::GridConfig;
use crate::core::{GeoPoint, GridCoord};
use crate::ingest::{Feature, FeatureKind};
use crate::projection::Projector;
use crate::raster::config::{FillParams, Layer};
use crate::raster::flood::decayed_fill;
use crate::raster::grid::IntensityGrid;
use crate::raster::line::BresenhamLine;
use crate::raster::scanline::fill_polygon;

/// The three per-cycle backdrop grids.
#[derive(Clone, Debug)]
pub struct LayerGrids {
    /// Water layer
    pub water: IntensityGrid,
    /// Vegetation layer
    pub green: IntensityGrid,
    /// Commercial-activity layer
    pub activity: IntensityGrid,
}

impl LayerGrids {
    /// All-zero grids (the degraded result of absent upstream data).
    pub fn empty(config: &GridConfig) -> Self {
        Self {
            water: IntensityGrid::new(config.array_size),
            green: IntensityGrid::new(config.array_size),
            activity: IntensityGrid::new(config.array_size),
        }
    }

    /// Grid for a layer.
    pub fn get(&self, layer: Layer) -> &IntensityGrid {
        match layer {
            Layer::Water => &self.water,
            Layer::Green => &self.green,
            Layer::Activity => &self.activity,
        }
    }
}

/// Rasterizes features of one layer into an owned grid.
pub struct LayerRasterizer {
    layer: Layer,
    params: FillParams,
    grid: IntensityGrid,
}

impl LayerRasterizer {
    /// Create a rasterizer with a fresh all-zero grid.
    pub fn new(layer: Layer, config: &GridConfig) -> Self {
        Self {
            layer,
            params: FillParams::for_layer(layer),
            grid: IntensityGrid::new(config.array_size),
        }
    }

    /// The layer this rasterizer fills.
    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Read access to the grid mid-pass.
    #[inline]
    pub fn grid(&self) -> &IntensityGrid {
        &self.grid
    }

    /// Finish the pass and take the grid.
    pub fn into_grid(self) -> IntensityGrid {
        self.grid
    }

    /// Rasterize one feature. Features of other layers are ignored;
    /// malformed geometry is skipped.
    pub fn fill(&mut self, feature: &Feature, projector: &Projector) {
        if feature.category.layer() != self.layer {
            return;
        }
        // The base is fed in unclamped: each cell write saturates at 1
        // inside `deposit`, but the flood fill decays the raw value, so a
        // wide river (base > 1) reaches further than a ditch.
        match &feature.kind {
            FeatureKind::Point(point) => {
                decayed_fill(
                    &mut self.grid,
                    projector.grid_cell(*point),
                    feature.base,
                    &self.params,
                );
            }
            FeatureKind::Polyline(nodes) => {
                self.fill_chain(nodes, feature.base, projector);
            }
            FeatureKind::Polygon(nodes) => {
                if feature.fills_interior() {
                    let cells: Vec<GridCoord> =
                        nodes.iter().map(|p| projector.grid_cell(*p)).collect();
                    if fill_polygon(&mut self.grid, &cells, feature.base) == 0 {
                        debug!("polygon with <3 grid-valid nodes skipped");
                    }
                } else {
                    // Perimeter-only area: trace the closed ring as a chain
                    let mut ring = nodes.clone();
                    if ring.first() != ring.last() {
                        if let Some(first) = ring.first().copied() {
                            ring.push(first);
                        }
                    }
                    self.fill_chain(&ring, feature.base, projector);
                }
            }
        }
    }

    /// Rasterize a coordinate chain: Bresenham center cells, then a disc
    /// of linearly fading intensity around each center, every disc cell
    /// fed into the decayed flood fill.
    fn fill_chain(&mut self, nodes: &[GeoPoint], base: f32, projector: &Projector) {
        if nodes.len() < 2 {
            debug!("skipping chain with {} nodes", nodes.len());
            return;
        }

        let radius = (base.round() as i32).max(1);
        let cells: Vec<GridCoord> = nodes.iter().map(|p| projector.grid_cell(*p)).collect();

        let mut centers: Vec<GridCoord> = Vec::new();
        for pair in cells.windows(2) {
            for cell in BresenhamLine::new(pair[0], pair[1]) {
                // Consecutive segments share a vertex cell; stamp it once
                if centers.last() != Some(&cell) {
                    centers.push(cell);
                }
            }
        }

        for center in centers {
            self.stamp_disc(center, radius, base);
        }
    }

    /// Stamp a disc of given cell radius, fading linearly from full value
    /// at the center to zero at the radius edge.
    fn stamp_disc(&mut self, center: GridCoord, radius: i32, value: f32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let distance = ((dx * dx + dy * dy) as f32).sqrt();
                if distance > radius as f32 {
                    continue;
                }
                let faded = value * (1.0 - distance / radius as f32);
                decayed_fill(
                    &mut self.grid,
                    GridCoord::new(center.x + dx, center.y + dy),
                    faded,
                    &self.params,
                );
            }
        }
    }
}

/// Rasterize one layer's features into a grid.
pub fn rasterize_layer(
    layer: Layer,
    features: &[Feature],
    projector: &Projector,
    config: &GridConfig,
) -> IntensityGrid {
    let mut rasterizer = LayerRasterizer::new(layer, config);
    for feature in features {
        rasterizer.fill(feature, projector);
    }
    rasterizer.into_grid()
}

/// Rasterize all three layers in parallel.
///
/// Each layer owns its grid and reads the shared feature slice, so the
/// passes are independent; results are identical to filling the layers
/// serially.
pub fn rasterize_layers(
    features: &[Feature],
    projector: &Projector,
    config: &GridConfig,
) -> LayerGrids {
    std::thread::scope(|scope| {
        let handles = Layer::ALL
            .map(|layer| scope.spawn(move || rasterize_layer(layer, features, projector, config)));
        let [water, green, activity] =
            handles.map(|handle| handle.join().expect("layer rasterizer thread panicked"));
        LayerGrids {
            water,
            green,
            activity,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{FeatureCategory, WaterKind};

    fn create_test_projector(config: &GridConfig) -> Projector {
        Projector::new(GeoPoint::new(49.0195, 12.0974), config)
    }

    fn stream_feature(nodes: Vec<GeoPoint>) -> Feature {
        Feature {
            name: None,
            category: FeatureCategory::Water(WaterKind::Stream),
            kind: FeatureKind::Polyline(nodes),
            base: 0.8,
        }
    }

    #[test]
    fn test_polyline_marks_center_cells() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        // ~200m of stream running east from the reference
        let feature = stream_feature(vec![
            GeoPoint::new(49.0195, 12.0974),
            GeoPoint::new(49.0195, 12.1001),
        ]);

        let grid = rasterize_layer(Layer::Water, &[feature], &projector, &config);
        assert!(!grid.is_zero());
        // the reference cell is on the line
        assert!(grid.value_at(20, 20) > 0.0);
    }

    #[test]
    fn test_single_node_chain_skipped() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        let feature = stream_feature(vec![GeoPoint::new(49.0195, 12.0974)]);

        let grid = rasterize_layer(Layer::Water, &[feature], &projector, &config);
        assert!(grid.is_zero());
    }

    #[test]
    fn test_wrong_layer_ignored() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        let feature = stream_feature(vec![
            GeoPoint::new(49.0195, 12.0974),
            GeoPoint::new(49.0195, 12.1001),
        ]);

        let grid = rasterize_layer(Layer::Green, &[feature], &projector, &config);
        assert!(grid.is_zero());
    }

    #[test]
    fn test_wide_water_spreads_two_rings() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        let feature = Feature {
            name: None,
            category: FeatureCategory::Water(WaterKind::NavigableRiver),
            kind: FeatureKind::Point(GeoPoint::new(49.0195, 12.0974)),
            base: 2.4,
        };

        let grid = rasterize_layer(Layer::Water, &[feature], &projector, &config);
        // Cell writes saturate at 1, but decay runs on the raw base:
        // 2.4 -> 0.6 -> 0.15 before falling under the 0.1 floor.
        assert_eq!(grid.value_at(20, 20), 1.0);
        assert!((grid.value_at(21, 20) - 0.6).abs() < 1e-6);
        assert!((grid.value_at(22, 20) - 0.15).abs() < 1e-6);
        assert_eq!(grid.value_at(23, 20), 0.0);
    }

    #[test]
    fn test_parallel_equals_serial() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        let features = vec![
            stream_feature(vec![
                GeoPoint::new(49.0195, 12.0974),
                GeoPoint::new(49.0195, 12.1001),
            ]),
            Feature {
                name: Some("market".into()),
                category: FeatureCategory::Activity(crate::ingest::ActivityKind::Restaurant),
                kind: FeatureKind::Point(GeoPoint::new(49.0199, 12.0980)),
                base: 0.7,
            },
        ];

        let parallel = rasterize_layers(&features, &projector, &config);
        for layer in Layer::ALL {
            let serial = rasterize_layer(layer, &features, &projector, &config);
            assert_eq!(parallel.get(layer), &serial);
        }
    }

    #[test]
    fn test_all_cells_clamped() {
        let config = GridConfig::default();
        let projector = create_test_projector(&config);
        // Many overlapping wide rivers saturate the center
        let features: Vec<Feature> = (0..10)
            .map(|_| Feature {
                name: None,
                category: FeatureCategory::Water(WaterKind::NavigableRiver),
                kind: FeatureKind::Polyline(vec![
                    GeoPoint::new(49.0195, 12.0960),
                    GeoPoint::new(49.0195, 12.0990),
                ]),
                base: 2.4,
            })
            .collect();

        let grid = rasterize_layer(Layer::Water, &features, &projector, &config);
        assert!(grid.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(grid.max_value(), 1.0);
    }
}
