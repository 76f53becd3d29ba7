//! Centralized overlay options with TOML preset support.
//!
//! Arrow geometry, series colors, the headless camera, and the charge
//! colorizer settings are consolidated here. Options serialize to/from TOML
//! so a preset can be passed to the command-line tool with `--options`.

mod arrow;
mod camera;
mod colorize;
mod colors;

use std::path::Path;

pub use arrow::ArrowOptions;
pub use camera::CameraOptions;
pub use colorize::ColorizeOptions;
pub use colors::PaletteOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ForcevisError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[arrow]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Arrow geometry parameters.
    pub arrow: ArrowOptions,
    /// Series color palette.
    pub palette: PaletteOptions,
    /// Camera used by the headless host.
    pub camera: CameraOptions,
    /// Per-atom scalar colorizer parameters.
    pub colorize: ColorizeOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ForcevisError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            ForcevisError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        toml::from_str(&content)
            .map_err(|e| ForcevisError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ForcevisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ForcevisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ForcevisError::Io)?;
        }
        std::fs::write(path, content).map_err(ForcevisError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[arrow]
separation = 0.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.arrow.separation, 0.5);
        // Everything else should be default
        assert_eq!(opts.arrow.radius, 0.2);
        assert_eq!(opts.palette, PaletteOptions::default());
    }

    #[test]
    fn palette_colors_from_toml() {
        let toml_str = r"
[palette]
colors = [[1.0, 1.0, 0.0], [0.0, 0.0, 0.0]]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let palette = opts.palette.to_palette();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_for(2), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_value_type_is_an_options_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[arrow]\nscale = \"big\"\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ForcevisError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("preset.toml");
        let mut opts = Options::default();
        opts.arrow.scale = 2.5;
        opts.palette.colors = vec![[0.1, 0.2, 0.3]];
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn missing_file_is_unreadable() {
        assert!(matches!(
            Options::load(Path::new("no/such/options.toml")),
            Err(ForcevisError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("arrow"));
        assert!(props.contains_key("palette"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("colorize"));

        let arrow = &props["arrow"]["properties"];
        assert!(arrow.get("separation").is_some());
        assert!(arrow.get("radius").is_some());
    }
}
