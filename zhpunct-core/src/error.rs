//! Error types
//!
//! Normalization itself is total and never fails. Errors only arise while
//! building or loading a [`NormalizerConfig`](crate::NormalizerConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or schema error
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Rendering the configuration as TOML failed
    #[error("failed to serialize configuration: {0}")]
    Serialize(String),

    /// Configuration file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A punctuation mapping entry is unusable
    #[error("invalid punctuation mapping {from:?} -> {to:?}: {reason}")]
    InvalidMapping {
        /// Source text of the entry
        from: String,
        /// Replacement text of the entry
        to: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A symmetric marker delimiter is unusable
    #[error("invalid marker delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter {
        /// The offending delimiter
        delimiter: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Run-collapse settings are unusable
    #[error("invalid collapse settings: {0}")]
    InvalidCollapse(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
