//! Classified features ready for rasterization.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;
use crate::ingest::FeatureCategory;

/// Geometry kind of a classified feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Single location
    Point(GeoPoint),
    /// Open coordinate chain
    Polyline(Vec<GeoPoint>),
    /// Closed ring (the first/last duplicate node may or may not be present)
    Polygon(Vec<GeoPoint>),
}

/// A named geometry with its classification and base width/intensity.
///
/// Ephemeral: constructed from one element batch, consumed once during
/// rasterization, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name, if tagged
    pub name: Option<String>,
    /// Layer classification
    pub category: FeatureCategory,
    /// Geometry kind
    pub kind: FeatureKind,
    /// Base width/intensity derived at classification time
    pub base: f32,
}

impl Feature {
    /// Whether this feature fills its polygon interior (vs perimeter only).
    #[inline]
    pub fn fills_interior(&self) -> bool {
        self.category.fills_interior()
    }
}
