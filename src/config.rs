use std::path::Path;

use meridian_core::DistanceModel;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for miles in text output
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 4,
        }
    }
}

/// Settings read from the optional `--config` TOML file.
///
/// ```toml
/// [distance]
/// earth_radius_km = 6371.0
/// km_per_mile = 1.609
///
/// [output]
/// format = "text"
/// precision = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub distance: DistanceModel,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(?config, "Loaded configuration from {}", path.display());
        Ok(config)
    }
}
