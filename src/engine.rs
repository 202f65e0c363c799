//! The per-cycle surroundings engine.
//!
//! Ties the pipeline together for one processing cycle around a reference
//! point: element batch → classified features → three intensity grids,
//! and raw place lists → merged, deduplicated, ranked places.
//!
//! The constructor is the validation boundary for the reference point;
//! place lists are validated on entry to [`SurroundingsEngine::merge_places`].
//! Degraded upstream sources (empty batches, empty lists) flow through as
//! empty outputs, never as errors.

use crate::config::EngineConfig;
use crate::core::GeoPoint;
use crate::error::InputError;
use crate::ingest::{classify_batch, ElementBatch};
use crate::places::{
    apply_translations, dedup_places, normalize_distances, union_sources, NameMatcher, Place,
    Ranker, TitleTranslation,
};
use crate::projection::Projector;
use crate::raster::{rasterize_layers, LayerGrids};

/// One processing cycle's engine: reference point, config, projector.
#[derive(Clone, Debug)]
pub struct SurroundingsEngine {
    reference: GeoPoint,
    config: EngineConfig,
    projector: Projector,
}

impl SurroundingsEngine {
    /// Create an engine for a reference point.
    ///
    /// Rejects non-finite coordinates; this is the only failure the
    /// grid pipeline can produce.
    pub fn new(reference: GeoPoint, config: EngineConfig) -> Result<Self, InputError> {
        if !reference.is_finite() {
            return Err(InputError::NonFiniteCoordinate {
                lat: reference.lat,
                lon: reference.lon,
            });
        }
        let projector = Projector::new(reference, &config.grid);
        Ok(Self {
            reference,
            config,
            projector,
        })
    }

    /// The cycle's reference point.
    #[inline]
    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// The engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The projector shared by all grid fills.
    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Classify a batch and rasterize the three backdrop grids.
    pub fn build_grids(&self, batch: &ElementBatch) -> LayerGrids {
        let features = classify_batch(batch);
        rasterize_layers(&features, &self.projector, &self.config.grid)
    }

    /// Merge two source place lists into one deduplicated list.
    ///
    /// Stages: source union (exact title), title translation, dedup fold
    /// with source-language preference, near-distance normalization.
    /// `town`, when known, is stripped from long names before comparison.
    pub fn merge_places(
        &self,
        geodata: Vec<Place>,
        encyclopedia: Vec<Place>,
        translations: &[TitleTranslation],
        town: Option<&str>,
    ) -> Result<Vec<Place>, InputError> {
        for place in geodata.iter().chain(encyclopedia.iter()) {
            if !place.position_is_finite() {
                return Err(match place.position {
                    crate::places::PlacePosition::Coordinates(point) => {
                        InputError::NonFiniteCoordinate {
                            lat: point.lat,
                            lon: point.lon,
                        }
                    }
                    crate::places::PlacePosition::DistanceMeters(meters) => {
                        InputError::NonFiniteDistance { meters }
                    }
                });
            }
        }

        let matcher = match town {
            Some(name) => NameMatcher::with_town(name),
            None => NameMatcher::new(),
        };

        let mut places = union_sources(geodata, encyclopedia);
        apply_translations(&mut places, translations, &matcher);
        let mut merged = dedup_places(places, &self.config.presentation_language, &matcher);
        normalize_distances(&mut merged);
        Ok(merged)
    }

    /// Rate every place against the user's preferred labels and sort the
    /// list by stars, descending (stable for equal scores).
    pub fn rank_places(&self, places: &mut Vec<Place>, preferred_labels: &[String]) {
        let ranker = Ranker::new(preferred_labels);
        for place in places.iter_mut() {
            ranker.rate(place);
        }
        places.sort_by(|a, b| {
            b.stars
                .partial_cmp(&a.stars)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::{PlacePosition, PlaceSource};

    fn create_test_engine() -> SurroundingsEngine {
        SurroundingsEngine::new(GeoPoint::new(49.0195, 12.0974), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_non_finite_reference() {
        let result =
            SurroundingsEngine::new(GeoPoint::new(f64::NAN, 12.0), EngineConfig::default());
        assert!(matches!(
            result,
            Err(InputError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_empty_batch_yields_zero_grids() {
        let engine = create_test_engine();
        let grids = engine.build_grids(&ElementBatch::empty());
        assert!(grids.water.is_zero());
        assert!(grids.green.is_zero());
        assert!(grids.activity.is_zero());
    }

    #[test]
    fn test_merge_rejects_nan_place_position() {
        let engine = create_test_engine();
        let bad = Place::new(
            "Dom",
            PlaceSource::Osm,
            PlacePosition::Coordinates(GeoPoint::new(f64::NAN, 12.0)),
        );
        let result = engine.merge_places(vec![bad], vec![], &[], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_rank_sorts_descending() {
        let engine = create_test_engine();
        let mut places = vec![
            Place::new("plain", PlaceSource::Osm, PlacePosition::DistanceMeters(0.0)),
            {
                let mut p = Place::new(
                    "famous",
                    PlaceSource::Wikipedia,
                    PlacePosition::DistanceMeters(0.0),
                );
                p.page_ref = Some("famous".into());
                p.importance = Some(5.0);
                p
            },
        ];
        engine.rank_places(&mut places, &[]);
        assert_eq!(places[0].title, "famous");
        assert_eq!(places[0].stars, 3.0);
        assert_eq!(places[1].stars, 0.0);
    }
}
