//! Feature classification.
//!
//! Turns a validated [`ElementBatch`] into a list of [`Feature`]s:
//! - selects the target layer from the tag map (closed categories),
//! - infers the geometry kind from the element shape,
//! - derives the base width/intensity (explicit `width` tag for water,
//!   otherwise the per-subtype constant).
//!
//! Everything here degrades softly: unclassifiable elements are simply
//! not backdrop features, malformed geometry and unresolvable relation
//! members are skipped with a debug log.

use log::debug;

use crate::core::GeoPoint;
use crate::ingest::element::{ElementBatch, RawElement, RawGeometry};
use crate::ingest::{Feature, FeatureCategory, FeatureKind};

/// Minimum and maximum base value derived from an explicit width tag.
const WIDTH_BASE_MIN: f32 = 0.3;
const WIDTH_BASE_MAX: f32 = 3.0;
/// Meters of tagged width per unit of base value.
const WIDTH_SCALE_M: f32 = 10.0;

/// Classify every element of a batch into rasterizable features.
///
/// Elements that match none of the three layers are ignored; an empty
/// batch yields an empty feature list.
pub fn classify_batch(batch: &ElementBatch) -> Vec<Feature> {
    batch
        .elements()
        .iter()
        .filter_map(|element| classify_element(element, batch))
        .collect()
}

fn classify_element(element: &RawElement, batch: &ElementBatch) -> Option<Feature> {
    let category = FeatureCategory::from_tags(&element.tags)?;
    let kind = geometry_kind(element, batch)?;
    let base = base_value(category, element);

    Some(Feature {
        name: element.tags.get("name").cloned(),
        category,
        kind,
        base,
    })
}

/// Infer the geometry kind from the element shape.
///
/// Single coordinate means point; an open chain means polyline; a closed
/// chain or an area-tagged way means polygon. Relations are flattened:
/// their "outer" way members are concatenated into one ring.
fn geometry_kind(element: &RawElement, batch: &ElementBatch) -> Option<FeatureKind> {
    match &element.geometry {
        RawGeometry::Node(point) => Some(FeatureKind::Point(*point)),
        RawGeometry::Way(nodes) => match nodes.len() {
            0 => {
                debug!("skipping way {} with no nodes", element.id);
                None
            }
            1 => Some(FeatureKind::Point(nodes[0])),
            _ => {
                let closed = nodes.first() == nodes.last();
                let area_tagged =
                    element.tags.get("area").map(String::as_str) == Some("yes");
                if closed || area_tagged {
                    Some(FeatureKind::Polygon(nodes.clone()))
                } else {
                    Some(FeatureKind::Polyline(nodes.clone()))
                }
            }
        },
        RawGeometry::Relation(members) => {
            let mut ring: Vec<GeoPoint> = Vec::new();
            for member in members {
                if member.role != "outer" {
                    continue;
                }
                match batch.way_coords(member.way_id) {
                    Some(nodes) => ring.extend_from_slice(nodes),
                    None => {
                        debug!(
                            "relation {}: member way {} not in batch, skipping",
                            element.id, member.way_id
                        );
                    }
                }
            }
            if ring.len() < 3 {
                debug!("skipping relation {} with {} usable nodes", element.id, ring.len());
                None
            } else {
                Some(FeatureKind::Polygon(ring))
            }
        }
    }
}

/// Base width/intensity for a classified element.
///
/// Water features honor an explicit `width` tag (meters), scaled and
/// clamped; everything else uses the per-subtype constant.
fn base_value(category: FeatureCategory, element: &RawElement) -> f32 {
    if let FeatureCategory::Water(_) = category {
        if let Some(width) = element.tags.get("width").and_then(|w| w.parse::<f32>().ok()) {
            return (width / WIDTH_SCALE_M).clamp(WIDTH_BASE_MIN, WIDTH_BASE_MAX);
        }
    }
    category.base_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::element::RelationMember;
    use crate::ingest::WaterKind;

    fn way(id: u64, nodes: Vec<GeoPoint>, tags: &[(&str, &str)]) -> RawElement {
        RawElement::with_tags(id, RawGeometry::Way(nodes), tags.iter().copied())
    }

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn test_open_way_is_polyline() {
        let batch = ElementBatch::new(vec![way(
            1,
            vec![p(49.0, 12.0), p(49.001, 12.0)],
            &[("waterway", "stream")],
        )])
        .unwrap();
        let features = classify_batch(&batch);
        assert_eq!(features.len(), 1);
        assert!(matches!(features[0].kind, FeatureKind::Polyline(_)));
        assert_eq!(features[0].base, 0.8);
    }

    #[test]
    fn test_closed_way_is_polygon() {
        let nodes = vec![p(49.0, 12.0), p(49.001, 12.0), p(49.001, 12.001), p(49.0, 12.0)];
        let batch =
            ElementBatch::new(vec![way(1, nodes, &[("natural", "water")])]).unwrap();
        let features = classify_batch(&batch);
        assert!(matches!(features[0].kind, FeatureKind::Polygon(_)));
        assert_eq!(
            features[0].category,
            FeatureCategory::Water(WaterKind::Basin)
        );
    }

    #[test]
    fn test_width_tag_overrides_subtype() {
        let batch = ElementBatch::new(vec![way(
            1,
            vec![p(49.0, 12.0), p(49.001, 12.0)],
            &[("waterway", "river"), ("width", "25")],
        )])
        .unwrap();
        let features = classify_batch(&batch);
        assert_eq!(features[0].base, 2.5);
    }

    #[test]
    fn test_width_tag_clamped() {
        let batch = ElementBatch::new(vec![
            way(
                1,
                vec![p(49.0, 12.0), p(49.001, 12.0)],
                &[("waterway", "river"), ("width", "500")],
            ),
            way(
                2,
                vec![p(49.0, 12.0), p(49.001, 12.0)],
                &[("waterway", "stream"), ("width", "1")],
            ),
        ])
        .unwrap();
        let features = classify_batch(&batch);
        assert_eq!(features[0].base, 3.0);
        assert_eq!(features[1].base, 0.3);
    }

    #[test]
    fn test_unparseable_width_falls_back() {
        let batch = ElementBatch::new(vec![way(
            1,
            vec![p(49.0, 12.0), p(49.001, 12.0)],
            &[("waterway", "river"), ("width", "wide")],
        )])
        .unwrap();
        let features = classify_batch(&batch);
        assert_eq!(features[0].base, 1.8);
    }

    #[test]
    fn test_relation_flattening_skips_missing_member() {
        let elements = vec![
            way(10, vec![p(49.0, 12.0), p(49.001, 12.0)], &[]),
            way(11, vec![p(49.001, 12.001), p(49.0, 12.001)], &[]),
            RawElement::with_tags(
                20,
                RawGeometry::Relation(vec![
                    RelationMember { role: "outer".into(), way_id: 10 },
                    RelationMember { role: "inner".into(), way_id: 11 },
                    RelationMember { role: "outer".into(), way_id: 11 },
                    RelationMember { role: "outer".into(), way_id: 999 }, // absent
                ]),
                [("leisure", "park")],
            ),
        ];
        let batch = ElementBatch::new(elements).unwrap();
        let features = classify_batch(&batch);
        assert_eq!(features.len(), 1);
        match &features[0].kind {
            FeatureKind::Polygon(ring) => assert_eq!(ring.len(), 4),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_untagged_and_empty_are_skipped() {
        let batch = ElementBatch::new(vec![
            way(1, vec![], &[("waterway", "river")]),
            way(2, vec![p(49.0, 12.0), p(49.001, 12.0)], &[]),
        ])
        .unwrap();
        assert!(classify_batch(&batch).is_empty());
    }
}
