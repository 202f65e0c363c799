//! Closed feature categories.
//!
//! The tag map is converted into these enums exactly once, at the
//! ingestion boundary. Everything past classification matches on a
//! finite, exhaustive set of categories instead of string tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::raster::Layer;

/// Waterway and water-body subtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterKind {
    /// Major river
    River,
    /// River with boat/motorboat traffic
    NavigableRiver,
    /// Small natural watercourse
    Stream,
    /// Artificial watercourse
    Canal,
    /// Canal with boat traffic
    NavigableCanal,
    /// Drainage ditch
    Ditch,
    /// Artificial drain
    Drain,
    /// Weir across a watercourse
    Weir,
    /// Dam structure
    Dam,
    /// Standing water area (lake, reservoir, basin)
    Basin,
    /// River surface polygon (riverbank)
    Riverbank,
    /// Any other tagged waterway
    Other,
}

impl WaterKind {
    /// Per-subtype base width/intensity when no explicit width is tagged.
    pub fn base_value(&self) -> f32 {
        match self {
            WaterKind::River => 1.8,
            WaterKind::NavigableRiver => 2.4,
            WaterKind::Stream => 0.8,
            WaterKind::Canal => 1.2,
            WaterKind::NavigableCanal => 2.0,
            WaterKind::Ditch | WaterKind::Drain => 0.6,
            WaterKind::Weir | WaterKind::Dam => 1.4,
            WaterKind::Basin | WaterKind::Riverbank => 1.0,
            WaterKind::Other => 1.0,
        }
    }
}

/// Vegetation and leisure-natural subtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreenKind {
    /// Forest or wood
    Forest,
    /// Public park
    Park,
    /// Protected natural area
    NatureReserve,
    /// Meadow or grassland
    Meadow,
    /// Scrubland
    Scrub,
    /// Lawn / grass patch
    Grass,
    /// Garden or allotments
    Garden,
    /// Individual tree
    Tree,
}

impl GreenKind {
    /// Base intensity.
    pub fn base_value(&self) -> f32 {
        match self {
            GreenKind::Forest | GreenKind::Park | GreenKind::NatureReserve => 0.8,
            GreenKind::Meadow | GreenKind::Scrub => 0.7,
            GreenKind::Grass | GreenKind::Garden => 0.6,
            GreenKind::Tree => 0.6,
        }
    }
}

/// Retail, food, entertainment and commercial subtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Retail or commercial land use area
    RetailArea,
    /// Shopping mall
    Mall,
    /// Open marketplace
    Marketplace,
    /// Cinema, theatre, nightclub
    Entertainment,
    /// Restaurant or fast food
    Restaurant,
    /// Cafe
    Cafe,
    /// Bar or pub
    Bar,
    /// Individual shop of any kind
    Shop,
}

impl ActivityKind {
    /// Base intensity.
    pub fn base_value(&self) -> f32 {
        match self {
            ActivityKind::RetailArea | ActivityKind::Mall | ActivityKind::Entertainment => 0.8,
            ActivityKind::Marketplace | ActivityKind::Restaurant | ActivityKind::Bar => 0.7,
            ActivityKind::Cafe | ActivityKind::Shop => 0.6,
        }
    }
}

/// Classification of a feature onto one of the three grid layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCategory {
    /// Contributes to the water grid
    Water(WaterKind),
    /// Contributes to the vegetation grid
    Green(GreenKind),
    /// Contributes to the commercial-activity grid
    Activity(ActivityKind),
}

impl FeatureCategory {
    /// Target grid layer.
    pub fn layer(&self) -> Layer {
        match self {
            FeatureCategory::Water(_) => Layer::Water,
            FeatureCategory::Green(_) => Layer::Green,
            FeatureCategory::Activity(_) => Layer::Activity,
        }
    }

    /// Default base width/intensity for the subtype.
    pub fn base_value(&self) -> f32 {
        match self {
            FeatureCategory::Water(kind) => kind.base_value(),
            FeatureCategory::Green(kind) => kind.base_value(),
            FeatureCategory::Activity(kind) => kind.base_value(),
        }
    }

    /// Whether an area feature of this category fills its whole interior.
    ///
    /// Large natural/leisure and commercial areas fill fully; smaller
    /// subtypes contribute their perimeter only.
    pub fn fills_interior(&self) -> bool {
        match self {
            FeatureCategory::Water(kind) => {
                matches!(kind, WaterKind::Basin | WaterKind::Riverbank)
            }
            FeatureCategory::Green(kind) => matches!(
                kind,
                GreenKind::Forest | GreenKind::Park | GreenKind::NatureReserve
            ),
            FeatureCategory::Activity(kind) => matches!(
                kind,
                ActivityKind::RetailArea | ActivityKind::Mall | ActivityKind::Entertainment
            ),
        }
    }

    /// Classify a raw tag map into a closed category.
    ///
    /// Returns `None` for elements that belong to none of the three
    /// layers; such elements are simply not part of the backdrop.
    pub fn from_tags(tags: &BTreeMap<String, String>) -> Option<FeatureCategory> {
        if let Some(kind) = water_kind(tags) {
            return Some(FeatureCategory::Water(kind));
        }
        if let Some(kind) = green_kind(tags) {
            return Some(FeatureCategory::Green(kind));
        }
        activity_kind(tags).map(FeatureCategory::Activity)
    }
}

fn navigable(tags: &BTreeMap<String, String>) -> bool {
    matches!(tags.get("boat").map(String::as_str), Some("yes"))
        || matches!(tags.get("motorboat").map(String::as_str), Some("yes"))
}

fn water_kind(tags: &BTreeMap<String, String>) -> Option<WaterKind> {
    if let Some(waterway) = tags.get("waterway") {
        let kind = match waterway.as_str() {
            "river" if navigable(tags) => WaterKind::NavigableRiver,
            "river" => WaterKind::River,
            "stream" => WaterKind::Stream,
            "canal" if navigable(tags) => WaterKind::NavigableCanal,
            "canal" => WaterKind::Canal,
            "ditch" => WaterKind::Ditch,
            "drain" => WaterKind::Drain,
            "weir" => WaterKind::Weir,
            "dam" => WaterKind::Dam,
            "riverbank" => WaterKind::Riverbank,
            _ => WaterKind::Other,
        };
        return Some(kind);
    }
    if tags.get("natural").map(String::as_str) == Some("water") {
        return Some(WaterKind::Basin);
    }
    match tags.get("landuse").map(String::as_str) {
        Some("reservoir") | Some("basin") => Some(WaterKind::Basin),
        _ => None,
    }
}

fn green_kind(tags: &BTreeMap<String, String>) -> Option<GreenKind> {
    match tags.get("landuse").map(String::as_str) {
        Some("forest") => return Some(GreenKind::Forest),
        Some("meadow") => return Some(GreenKind::Meadow),
        Some("grass") | Some("village_green") => return Some(GreenKind::Grass),
        Some("allotments") | Some("orchard") | Some("vineyard") => {
            return Some(GreenKind::Garden)
        }
        _ => {}
    }
    match tags.get("natural").map(String::as_str) {
        Some("wood") => return Some(GreenKind::Forest),
        Some("grassland") => return Some(GreenKind::Meadow),
        Some("scrub") | Some("heath") => return Some(GreenKind::Scrub),
        Some("tree") => return Some(GreenKind::Tree),
        _ => {}
    }
    match tags.get("leisure").map(String::as_str) {
        Some("park") => Some(GreenKind::Park),
        Some("nature_reserve") => Some(GreenKind::NatureReserve),
        Some("garden") => Some(GreenKind::Garden),
        _ => None,
    }
}

fn activity_kind(tags: &BTreeMap<String, String>) -> Option<ActivityKind> {
    match tags.get("landuse").map(String::as_str) {
        Some("retail") | Some("commercial") => return Some(ActivityKind::RetailArea),
        _ => {}
    }
    match tags.get("amenity").map(String::as_str) {
        Some("marketplace") => return Some(ActivityKind::Marketplace),
        Some("restaurant") | Some("fast_food") | Some("food_court") => {
            return Some(ActivityKind::Restaurant)
        }
        Some("cafe") => return Some(ActivityKind::Cafe),
        Some("bar") | Some("pub") | Some("biergarten") => return Some(ActivityKind::Bar),
        Some("cinema") | Some("theatre") | Some("nightclub") => {
            return Some(ActivityKind::Entertainment)
        }
        _ => {}
    }
    match tags.get("shop").map(String::as_str) {
        Some("mall") | Some("department_store") => Some(ActivityKind::Mall),
        Some(_) => Some(ActivityKind::Shop),
        None => None,
    }
}
