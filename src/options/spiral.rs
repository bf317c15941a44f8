use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Population of the spiral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spiral", inline)]
#[serde(default)]
pub struct SpiralOptions {
    /// Largest population the pulse scales against. Must be positive.
    #[schemars(title = "Max Points", range(min = 1, max = 200_000))]
    pub max_points: u32,
}

impl Default for SpiralOptions {
    fn default() -> Self {
        Self { max_points: 5000 }
    }
}
