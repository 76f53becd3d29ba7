use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Look-at camera of the headless host.
pub struct CameraOptions {
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// Look-at target.
    pub target: [f32; 3],
    /// Up direction.
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 50.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}
