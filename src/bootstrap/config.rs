//! # Configuration Loader
//!
//! Reads the TOML configuration file and maps it onto [`ReviewConfig`].
//! Missing keys keep their defaults; wrongly typed keys are errors.

use anyhow::Context;
use std::path::Path;
use cr_core::ReviewConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A value has the wrong type or names an invalid collection
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<ReviewConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ReviewConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config in {}", config_path.display()))
}
