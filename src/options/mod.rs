//! Startup configuration surface with TOML support.
//!
//! Everything read once at initialization (anchor geography, target-engine
//! projection convention) is consolidated here. The bridge never re-reads
//! configuration after startup; per-engine convention offsets are crate
//! constants, not configuration.

mod anchor;
mod projection;

use std::path::Path;

pub use anchor::AnchorOptions;
pub use projection::{FovAxis, ProjectionOptions};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[anchor]`) work correctly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BridgeOptions {
    /// Geographic anchor for the tangent frame.
    pub anchor: AnchorOptions,
    /// Target Scene Engine projection convention.
    pub projection: ProjectionOptions,
}

impl BridgeOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BridgeError> {
        let content = std::fs::read_to_string(path).map_err(BridgeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BridgeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BridgeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BridgeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BridgeError::Io)?;
        }
        std::fs::write(path, content).map_err(BridgeError::Io)
    }
}
