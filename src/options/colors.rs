use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::palette::{Palette, DEFAULT_PALETTE};

/// Series color palette options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Palette", inline)]
#[serde(default)]
pub struct PaletteOptions {
    /// RGB colors assigned to series in order, wrapping around.
    pub colors: Vec<[f32; 3]>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl PaletteOptions {
    /// Build the palette. An empty color list falls back to the default.
    #[must_use]
    pub fn to_palette(&self) -> Palette {
        Palette::new(self.colors.clone())
    }
}
