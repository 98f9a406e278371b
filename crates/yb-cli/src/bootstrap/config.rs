//! # Configuration Loader
//!
//! Reads a TOML file into the [`AppConfig`] DTO.
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No business rules**
//!
//! Addresses and URLs stay strings here; wiring parses them.

use std::path::Path;

use anyhow::Context;
use yb_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
