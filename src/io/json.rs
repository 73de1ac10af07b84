//! JSON config and sample files
//!
//! Streaming `serde_json::to_writer`/`from_reader` over `BufWriter`/`BufReader`.

use crate::error::GridError;
use crate::pipeline::{GridConfig, GridSamples};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a grid config as pretty JSON
pub fn save_config(config: &GridConfig, path: impl AsRef<Path>) -> Result<(), GridError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, config)
        .map_err(|e| GridError::Serialization(e.to_string()))?;
    writer.flush()?;

    Ok(())
}

/// Load and validate a grid config
///
/// Missing fields take their defaults, so `{"resolution": 64}` is a valid
/// config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<GridConfig, GridError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: GridConfig =
        serde_json::from_reader(reader).map_err(|e| GridError::Serialization(e.to_string()))?;
    config.validate()?;

    Ok(config)
}

/// Serialize a config to a pretty JSON string
pub fn config_to_json_string(config: &GridConfig) -> Result<String, GridError> {
    serde_json::to_string_pretty(config).map_err(|e| GridError::Serialization(e.to_string()))
}

/// Parse and validate a config from a JSON string
pub fn config_from_json_str(json: &str) -> Result<GridConfig, GridError> {
    let config: GridConfig =
        serde_json::from_str(json).map_err(|e| GridError::Serialization(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Dump generated samples as JSON
pub fn save_samples_json(samples: &GridSamples, path: impl AsRef<Path>) -> Result<(), GridError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, samples)
        .map_err(|e| GridError::Serialization(e.to_string()))?;
    writer.flush()?;

    Ok(())
}

/// Load a sample dump written by [`save_samples_json`]
pub fn load_samples_json(path: impl AsRef<Path>) -> Result<GridSamples, GridError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| GridError::Serialization(e.to_string()))
}
