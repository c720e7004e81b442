//! CLI configuration file handling

use anyhow::{Context, Result};
use hopfield_recall::RecallConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings read from `--config`, overridable by command-line flags.
///
/// ```json
/// { "recall": { "flip_probability": 0.1, "max_iterations": 20, "seed": 7 }, "json": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recall run parameters.
    pub recall: RecallConfig,
    /// Print reports as JSON instead of text grids.
    pub json: bool,
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}
