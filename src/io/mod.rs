//! File I/O for grid configs and generated samples
//!
//! Configs are stored as human-readable JSON (`.json`). Sample dumps use the
//! same format and are meant for inspection and golden files, not for
//! feeding a renderer (use the byte views on [`GridSamples`] for that).
//!
//! [`GridSamples`]: crate::pipeline::GridSamples

mod json;

pub use json::{
    config_from_json_str, config_to_json_string, load_config, load_samples_json, save_config,
    save_samples_json,
};
