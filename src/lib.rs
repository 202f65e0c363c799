//! # Sthala-Map: Geospatial Surroundings Engine
//!
//! Ingests raw point-of-interest records and raw geographic feature
//! geometries around a reference coordinate and produces two outputs for
//! a presentation layer:
//!
//! - three discretized environmental intensity grids (water, vegetation,
//!   commercial activity) used as an ambient map backdrop, and
//! - one deduplicated, merged and ranked list of named places.
//!
//! All I/O framing — HTTP retrieval, labeling-service prompts, rendering,
//! audio, persistence — belongs to external collaborators. The core is
//! pure and total: for any validated input it always returns a result;
//! malformed geometry, out-of-range grid writes and unresolvable relation
//! members are recovered locally, never surfaced.
//!
//! ## Quick Start
//!
//! ```rust
//! use sthala_map::{ElementBatch, EngineConfig, GeoPoint, SurroundingsEngine};
//!
//! let reference = GeoPoint::new(49.0195, 12.0974);
//! let engine = SurroundingsEngine::new(reference, EngineConfig::default()).unwrap();
//!
//! // Absent upstream data degrades to all-zero grids
//! let grids = engine.build_grids(&ElementBatch::empty());
//! assert!(grids.water.is_zero());
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   raw elements (tags + geometry)        raw places (two sources)
//!              │                                   │
//!              ▼                                   ▼
//!     ┌────────────────┐                  ┌────────────────┐
//!     │ Classification │                  │  Source union  │
//!     │ (closed enums, │                  │  (exact title) │
//!     │  base values)  │                  └───────┬────────┘
//!     └───────┬────────┘                          │ translations
//!             │ features                          ▼
//!             ▼                          ┌────────────────┐
//!     ┌────────────────┐                 │  Dedup fold    │
//!     │  Rasterizer    │                 │ (adaptive name │
//!     │ (3 layers, in  │                 │   identity)    │
//!     │   parallel)    │                 └───────┬────────┘
//!     └───────┬────────┘                         │
//!             ▼                                  ▼
//!     ┌────────────────┐                 ┌────────────────┐
//!     │  water/green/  │                 │    Ranking     │
//!     │ activity grids │                 │ (stars + why)  │
//!     └────────────────┘                 └────────────────┘
//! ```
//!
//! ## Coordinate Frame
//!
//! Geographic input is WGS84 degrees. The grid uses screen convention:
//! x grows east, y grows south (north projects to negative planar y), and
//! odd rows are offset half a cell west (brick pattern).
//!
//! ## Modules
//!
//! - [`core`]: fundamental types (GeoPoint, GridCoord, haversine)
//! - [`config`]: grid/engine configuration, YAML helpers
//! - [`projection`]: geographic → planar meters → grid cell
//! - [`ingest`]: raw elements, closed categories, classification
//! - [`raster`]: intensity grids, flood fill, scanline, layer passes
//! - [`places`]: place model, name identity, merging, ranking
//! - [`engine`]: the per-cycle facade

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod places;
pub mod projection;
pub mod raster;

// Re-export main types at crate root
pub use config::{ConfigError, EngineConfig, GridConfig};
pub use core::{GeoPoint, GridCoord, PlanarOffset};
pub use engine::SurroundingsEngine;
pub use error::InputError;
pub use ingest::{
    classify_batch, ElementBatch, Feature, FeatureCategory, FeatureKind, RawElement, RawGeometry,
};
pub use places::{
    dedup_places, NameMatcher, Place, PlacePosition, PlaceSource, Ranker, ScoreExplanation,
    TitleTranslation,
};
pub use projection::Projector;
pub use raster::{rasterize_layers, IntensityGrid, Layer, LayerGrids, LayerRasterizer};
