//! Raw geometry elements as delivered by upstream geodata sources.
//!
//! Elements arrive with free-form tag maps; the tag map is consumed once
//! at classification time and never travels further into the core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::GeoPoint;
use crate::error::InputError;

/// Member of a relation element, referencing a way by id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelationMember {
    /// Member role ("outer" members form the relation's ring)
    pub role: String,
    /// Id of the referenced way
    pub way_id: u64,
}

/// The geometry carried by a raw element.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RawGeometry {
    /// A single coordinate
    Node(GeoPoint),
    /// An ordered coordinate chain
    Way(Vec<GeoPoint>),
    /// A collection of way references with roles
    Relation(Vec<RelationMember>),
}

/// A raw element: geometry plus the source tag map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawElement {
    /// Source-assigned element id (used to resolve relation members)
    pub id: u64,
    /// The element's geometry
    pub geometry: RawGeometry,
    /// Free-form source tags, used only for classification
    pub tags: BTreeMap<String, String>,
}

impl RawElement {
    /// Create an element with no tags.
    pub fn new(id: u64, geometry: RawGeometry) -> Self {
        Self {
            id,
            geometry,
            tags: BTreeMap::new(),
        }
    }

    /// Create an element with the given tags.
    pub fn with_tags<I, K, V>(id: u64, geometry: RawGeometry, tags: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id,
            geometry,
            tags: tags
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A validated batch of raw elements for one processing cycle.
///
/// Construction is the validation boundary: every coordinate in the batch
/// must be finite, otherwise the whole batch is rejected with
/// [`InputError::NonFiniteCoordinate`]. Past this point the core never
/// fails on geometry; malformed shapes are skipped locally.
#[derive(Clone, Debug, Default)]
pub struct ElementBatch {
    elements: Vec<RawElement>,
}

impl ElementBatch {
    /// Validate and wrap a list of raw elements.
    pub fn new(elements: Vec<RawElement>) -> Result<Self, InputError> {
        for element in &elements {
            match &element.geometry {
                RawGeometry::Node(point) => Self::check(*point)?,
                RawGeometry::Way(nodes) => {
                    for point in nodes {
                        Self::check(*point)?;
                    }
                }
                RawGeometry::Relation(_) => {}
            }
        }
        Ok(Self { elements })
    }

    /// An empty batch (the degraded result of a failed upstream fetch).
    pub fn empty() -> Self {
        Self::default()
    }

    fn check(point: GeoPoint) -> Result<(), InputError> {
        if point.is_finite() {
            Ok(())
        } else {
            Err(InputError::NonFiniteCoordinate {
                lat: point.lat,
                lon: point.lon,
            })
        }
    }

    /// All elements in the batch.
    #[inline]
    pub fn elements(&self) -> &[RawElement] {
        &self.elements
    }

    /// Number of elements in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the batch holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up the coordinate chain of a way by element id.
    ///
    /// Used to resolve relation members; returns `None` when the
    /// referenced element is absent from the batch or is not a way.
    pub fn way_coords(&self, way_id: u64) -> Option<&[GeoPoint]> {
        self.elements.iter().find_map(|e| match &e.geometry {
            RawGeometry::Way(nodes) if e.id == way_id => Some(nodes.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_accepts_finite() {
        let batch = ElementBatch::new(vec![RawElement::new(
            1,
            RawGeometry::Node(GeoPoint::new(49.0, 12.1)),
        )])
        .unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_batch_rejects_nan() {
        let result = ElementBatch::new(vec![RawElement::new(
            1,
            RawGeometry::Way(vec![GeoPoint::new(49.0, 12.1), GeoPoint::new(f64::NAN, 12.1)]),
        )]);
        assert!(matches!(
            result,
            Err(InputError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_way_lookup() {
        let batch = ElementBatch::new(vec![
            RawElement::new(7, RawGeometry::Way(vec![GeoPoint::new(49.0, 12.1)])),
            RawElement::new(8, RawGeometry::Node(GeoPoint::new(49.0, 12.1))),
        ])
        .unwrap();
        assert!(batch.way_coords(7).is_some());
        assert!(batch.way_coords(8).is_none()); // node, not a way
        assert!(batch.way_coords(99).is_none()); // absent
    }
}
