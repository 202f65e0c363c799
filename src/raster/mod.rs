//! Environmental intensity grid rasterization.
//!
//! This module turns classified features into the three backdrop grids:
//!
//! - [`IntensityGrid`]: clamped additive grid storage
//! - [`flood`]: decayed worklist flood fill
//! - [`BresenhamLine`]: grid-cell line traversal
//! - [`scanline`]: polygon interior fill
//! - [`LayerRasterizer`] / [`rasterize_layers`]: per-layer fill passes

mod config;
pub mod flood;
mod grid;
mod line;
pub mod scanline;

mod rasterizer;

pub use config::{FillParams, Layer};
pub use grid::IntensityGrid;
pub use line::BresenhamLine;
pub use rasterizer::{rasterize_layer, rasterize_layers, LayerGrids, LayerRasterizer};
