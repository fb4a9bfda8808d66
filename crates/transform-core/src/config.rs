// File: crates/transform-core/src/config.rs
// Summary: Pipeline configuration loaded from TOML (transform options + collision policy).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::normalize::CollisionPolicy;
use crate::options::TransformOptions;

/// Example:
///
/// ```toml
/// collision = "shift_forward"
///
/// [options]
/// brick_size = 0.5
/// reversal = 3
/// box_size = 1.0
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub collision: CollisionPolicy,
    pub options: TransformOptions,
}

impl PipelineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TransformError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TransformError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TransformError::Config(e.to_string()))
    }
}
