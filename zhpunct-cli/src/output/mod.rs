//! Output formatting module

use crate::input::Document;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one normalized document
    fn format_document(&mut self, document: &Document, result: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Normalized text only
    #[default]
    Text,
    /// JSON array of input/result records
    Json,
}

pub mod json;
pub mod text;

pub use json::{JsonFormatter, NormalizationRecord};
pub use text::TextFormatter;
