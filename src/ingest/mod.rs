//! Raw geometry ingestion and feature classification.
//!
//! This module is the data-ingestion boundary of the core:
//!
//! - [`RawElement`] / [`ElementBatch`]: raw elements with free-form tag
//!   maps, validated once on construction
//! - [`FeatureCategory`]: closed category enums, built once from the tag map
//! - [`classify_batch`]: geometry-kind inference and base intensity derivation
//! - [`Feature`]: the classified output consumed by the rasterizer

mod category;
mod classify;
mod element;
mod feature;

pub use category::{ActivityKind, FeatureCategory, GreenKind, WaterKind};
pub use classify::classify_batch;
pub use element::{ElementBatch, RawElement, RawGeometry, RelationMember};
pub use feature::{Feature, FeatureKind};
