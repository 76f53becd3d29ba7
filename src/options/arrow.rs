use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arrow", inline)]
#[serde(default)]
/// Geometry of the arrow drawn for each vector.
pub struct ArrowOptions {
    /// Multiplier from vector components to arrow length.
    #[schemars(range(min = 0.0))]
    pub scale: f32,
    /// Requested body radius; short vectors get a thinner body.
    #[schemars(range(min = 0.0))]
    pub radius: f32,
    /// Spacing between series along the camera-perpendicular axis.
    pub separation: f32,
    /// Tessellation segments for body and head.
    #[schemars(range(min = 3))]
    pub resolution: u32,
    /// Share of the arrow length taken by the body; the head gets the rest.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub body_fraction: f32,
    /// Head radius as a multiple of the body radius.
    pub head_radius_factor: f32,
    /// Body radius cap as a fraction of the vector magnitude.
    pub radius_fraction: f32,
    /// Host material for both primitives.
    pub material: String,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            radius: 0.2,
            separation: 0.2,
            resolution: 12,
            body_fraction: 0.8,
            head_radius_factor: 1.7,
            radius_fraction: 0.1,
            material: "Opaque".to_owned(),
        }
    }
}
