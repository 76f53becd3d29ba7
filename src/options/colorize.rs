use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colorize", inline)]
#[serde(default)]
/// Representation requested for per-atom scalar coloring.
pub struct ColorizeOptions {
    /// Representation style name.
    pub representation: String,
    /// Host material name.
    pub material: String,
    /// Opacity of the representation.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub opacity: f32,
}

impl Default for ColorizeOptions {
    fn default() -> Self {
        Self {
            representation: "VDW".to_owned(),
            material: "Transparent".to_owned(),
            opacity: 0.5,
        }
    }
}
