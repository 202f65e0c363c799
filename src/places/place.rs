//! The place model.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

/// Source a place record originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceSource {
    /// Geodata source (OSM)
    Osm,
    /// Encyclopedia source (Wikipedia)
    Wikipedia,
}

/// A place's geographic position.
///
/// Either an explicit coordinate or, when the source only reports
/// proximity, a distance from the reference point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlacePosition {
    /// Explicit coordinate
    Coordinates(GeoPoint),
    /// Distance from the reference point, in meters
    DistanceMeters(f64),
}

/// One structured scoring explanation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    /// Star contribution of this rule
    pub points: f32,
    /// Human-readable reason
    pub reason: String,
}

/// A named place: the unit of deduplication, merging and ranking.
///
/// Created by source adapters, merged and ranked here, discarded at the
/// end of the processing cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display title
    pub title: String,
    /// Origin source
    pub source: PlaceSource,
    /// Geographic position
    pub position: PlacePosition,
    /// Article/page reference, when the source has one
    pub page_ref: Option<String>,
    /// Language tag of the record ("en", "de", ...)
    pub language: Option<String>,
    /// Topic labels assigned by the labeling service
    pub labels: Vec<String>,
    /// Classification tag (e.g. "church", "museum")
    pub place_type: Option<String>,
    /// Importance value in `[0, 5]`, when known
    pub importance: Option<f32>,
    /// Computed relevance score
    pub stars: f32,
    /// Structured scoring explanations
    pub explanations: Vec<ScoreExplanation>,
    /// Free-text snippet/description
    pub summary: Option<String>,
    /// Source URL
    pub url: Option<String>,
    /// Wikipedia reference ("de:Steinerne Brücke")
    pub wikipedia: Option<String>,
}

impl Place {
    /// Create a place with empty optional fields and a zero score.
    pub fn new(title: impl Into<String>, source: PlaceSource, position: PlacePosition) -> Self {
        Self {
            title: title.into(),
            source,
            position,
            page_ref: None,
            language: None,
            labels: Vec::new(),
            place_type: None,
            importance: None,
            stars: 0.0,
            explanations: Vec::new(),
            summary: None,
            url: None,
            wikipedia: None,
        }
    }

    /// True if the position (when explicit) is finite.
    pub fn position_is_finite(&self) -> bool {
        match self.position {
            PlacePosition::Coordinates(point) => point.is_finite(),
            PlacePosition::DistanceMeters(d) => d.is_finite(),
        }
    }
}
