//! Layer identifiers and per-layer fill parameters.

use serde::{Deserialize, Serialize};

/// The three environmental backdrop layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Waterways and water bodies
    Water,
    /// Vegetation and leisure-natural areas
    Green,
    /// Retail, food, entertainment, commercial
    Activity,
}

impl Layer {
    /// All layers, in presentation order.
    pub const ALL: [Layer; 3] = [Layer::Water, Layer::Green, Layer::Activity];
}

/// Decayed flood-fill parameters for one layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillParams {
    /// Divisor applied to the value on every hop to a neighbor
    pub decay_divisor: f32,

    /// Minimum value that is still deposited/propagated
    pub floor: f32,

    /// When set, a cell spreads to its neighbors only if its own value
    /// exceeds this threshold. Produces the two-tier effect: strong
    /// sources spread, weak ones stay local.
    pub spread_threshold: Option<f32>,
}

impl FillParams {
    /// Fill parameters for a layer.
    ///
    /// Water decays by 4 per hop down to 0.1 and always spreads; green
    /// and activity decay by 5 down to 0.05 but only spread from cells
    /// above 0.3.
    pub fn for_layer(layer: Layer) -> Self {
        match layer {
            Layer::Water => Self {
                decay_divisor: 4.0,
                floor: 0.1,
                spread_threshold: None,
            },
            Layer::Green | Layer::Activity => Self {
                decay_divisor: 5.0,
                floor: 0.05,
                spread_threshold: Some(0.3),
            },
        }
    }
}
