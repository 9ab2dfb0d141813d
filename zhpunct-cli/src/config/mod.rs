//! Configuration module
//!
//! A CLI configuration file carries output and performance defaults plus a
//! `[normalizer]` section in the core configuration schema.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use zhpunct_core::{ConfigFile, NormalizerConfig};

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Normalizer rules
    #[serde(default)]
    pub normalizer: ConfigFile,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel mode (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker thread count with `0` resolved to the number of CPUs
    pub fn resolved_threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}

impl CliConfig {
    /// Configuration with every normalizer default written out
    pub fn template() -> Self {
        Self {
            normalizer: ConfigFile::from(&NormalizerConfig::default()),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        let rendered =
            toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(rendered)
    }

    /// Validate the `[normalizer]` section and build the core configuration
    pub fn normalizer_config(&self) -> Result<NormalizerConfig> {
        let config = self
            .normalizer
            .clone()
            .into_config()
            .map_err(CliError::from)?;
        Ok(config)
    }
}
