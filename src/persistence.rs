//! Configuration persistence: save and load `PlotConfig` as JSON files.

use std::path::Path;

use crate::config::PlotConfig;
use crate::error::PlotError;

/// Serialize a configuration to pretty JSON.
pub fn config_to_json(config: &PlotConfig) -> Result<String, PlotError> {
    serde_json::to_string_pretty(config).map_err(|e| PlotError::Config(e.to_string()))
}

/// Parse a configuration from JSON.
pub fn config_from_json(json: &str) -> Result<PlotConfig, PlotError> {
    serde_json::from_str(json).map_err(|e| PlotError::Config(e.to_string()))
}

/// Save a configuration to a JSON file.
pub fn save_config_to_path(config: &PlotConfig, path: &Path) -> Result<(), PlotError> {
    let json = config_to_json(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a configuration from a JSON file.
pub fn load_config_from_path(path: &Path) -> Result<PlotConfig, PlotError> {
    let json = std::fs::read_to_string(path)?;
    config_from_json(&json)
}
