//! Centralized carousel/scene options with TOML preset support.
//!
//! All tweakable settings (wheel filtering, transition timing, planet
//! layout, asset locations, caption text) are consolidated here. Options
//! serialize to/from TOML for presets and from JSON for the web entry.

mod assets;
mod captions;
mod carousel;
mod scene;

use std::path::Path;

pub use assets::AssetOptions;
pub use captions::CaptionOptions;
pub use carousel::CarouselOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[carousel]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Wheel filtering and transition timing.
    pub carousel: CarouselOptions,
    /// Planet layout and per-frame spin.
    pub scene: SceneOptions,
    /// Texture and environment map locations.
    #[schemars(skip)]
    pub assets: AssetOptions,
    /// Heading captions.
    pub captions: CaptionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content =
            std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json(content: &str) -> Result<Self, OrreryError> {
        serde_json::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
