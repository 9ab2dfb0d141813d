//! Normalizer configuration
//!
//! A [`NormalizerConfig`] is built once, validated, and then shared
//! read-only by every normalization call. It can be assembled in code with
//! [`ConfigBuilder`] or loaded from TOML:
//!
//! ```toml
//! [punctuation]
//! replace_defaults = false
//!
//! [punctuation.map]
//! "《" = "<"
//! "》" = ">"
//!
//! [markers]
//! symmetric = ["**", "~~"]
//!
//! [collapse]
//! chars = ".?!"
//! length = 3
//!
//! [spacing]
//! trim_trailing_whitespace = true
//! ```

use crate::classifier::{classify, is_closing_punctuation};
use crate::error::{ConfigError, Result};
use crate::tables::PunctuationMap;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Symmetric marker delimiters
    pub const DELIMITERS: &[&str] = &["**"];

    /// Characters whose repeated runs are canonicalized
    pub const COLLAPSE_CHARS: [char; 3] = ['.', '?', '!'];

    /// Canonical run length
    pub const COLLAPSE_LENGTH: usize = 3;

    /// Strip whitespace at line ends
    pub const TRIM_TRAILING_WHITESPACE: bool = true;
}

/// Immutable normalizer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub(crate) punctuation: PunctuationMap,
    pub(crate) delimiters: Vec<String>,
    pub(crate) collapse_chars: Vec<char>,
    pub(crate) collapse_length: usize,
    pub(crate) trim_trailing_whitespace: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            punctuation: PunctuationMap::standard(),
            delimiters: defaults::DELIMITERS.iter().map(|d| d.to_string()).collect(),
            collapse_chars: defaults::COLLAPSE_CHARS.to_vec(),
            collapse_length: defaults::COLLAPSE_LENGTH,
            trim_trailing_whitespace: defaults::TRIM_TRAILING_WHITESPACE,
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.into_config()
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&ConfigFile::from(self))
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Punctuation replacement table
    pub fn punctuation(&self) -> &PunctuationMap {
        &self.punctuation
    }

    /// Symmetric marker delimiters
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Characters whose runs are collapsed
    pub fn collapse_chars(&self) -> &[char] {
        &self.collapse_chars
    }

    /// Canonical run length
    pub fn collapse_length(&self) -> usize {
        self.collapse_length
    }

    /// Whether trailing whitespace is stripped at line ends
    pub fn trim_trailing_whitespace(&self) -> bool {
        self.trim_trailing_whitespace
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        for (from, to) in self.punctuation.sorted_entries() {
            validate_mapping(from, to)?;
        }

        let mut seen = HashSet::new();
        for delimiter in &self.delimiters {
            validate_delimiter(delimiter)?;
            if !seen.insert(delimiter.as_str()) {
                return Err(ConfigError::InvalidDelimiter {
                    delimiter: delimiter.clone(),
                    reason: "delimiter is listed twice",
                });
            }
        }

        if self.collapse_length == 0 {
            return Err(ConfigError::InvalidCollapse(
                "length must be at least 1".into(),
            ));
        }
        if let Some(ch) = self
            .collapse_chars
            .iter()
            .find(|c| !c.is_ascii_punctuation())
        {
            return Err(ConfigError::InvalidCollapse(format!(
                "{ch:?} is not ASCII punctuation"
            )));
        }

        Ok(())
    }
}

fn validate_mapping(from: char, to: &str) -> Result<()> {
    let invalid = |reason| ConfigError::InvalidMapping {
        from: from.to_string(),
        to: to.to_string(),
        reason,
    };

    if from.is_ascii() {
        return Err(invalid("source must not be ASCII"));
    }
    if !matches!(
        classify(from),
        Category::ChinesePunctuation | Category::Whitespace
    ) {
        return Err(invalid("source must be a punctuation or space character"));
    }
    if to.is_empty() {
        return Err(invalid("replacement is empty"));
    }
    if !to.is_ascii() {
        return Err(invalid("replacement must be ASCII"));
    }
    Ok(())
}

fn validate_delimiter(delimiter: &str) -> Result<()> {
    let invalid = |reason| ConfigError::InvalidDelimiter {
        delimiter: delimiter.to_string(),
        reason,
    };

    if delimiter.is_empty() {
        return Err(invalid("delimiter is empty"));
    }
    if !delimiter.chars().all(|c| c.is_ascii_punctuation()) {
        return Err(invalid("delimiter must be ASCII punctuation"));
    }
    let reserved = |c: char| {
        matches!(c, '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}') || is_closing_punctuation(c)
    };
    if delimiter.chars().any(reserved) {
        return Err(invalid("delimiter uses a reserved punctuation character"));
    }
    Ok(())
}

/// Fluent builder for [`NormalizerConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    punctuation: Option<PunctuationMap>,
    mappings: Vec<(char, String)>,
    removals: Vec<char>,
    delimiters: Option<Vec<String>>,
    collapse_chars: Option<Vec<char>>,
    collapse_length: Option<usize>,
    trim_trailing_whitespace: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from this table instead of the standard one
    pub fn punctuation(mut self, table: PunctuationMap) -> Self {
        self.punctuation = Some(table);
        self
    }

    /// Add or override one mapping
    pub fn map(mut self, from: char, to: impl Into<String>) -> Self {
        self.mappings.push((from, to.into()));
        self
    }

    /// Leave a character untouched
    pub fn unmap(mut self, from: char) -> Self {
        self.removals.push(from);
        self
    }

    /// Set the symmetric marker delimiters
    pub fn delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = Some(delimiters.into_iter().map(Into::into).collect());
        self
    }

    /// Set the characters whose runs are collapsed
    pub fn collapse_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.collapse_chars = Some(chars.into_iter().collect());
        self
    }

    /// Set the canonical run length
    pub fn collapse_length(mut self, length: usize) -> Self {
        self.collapse_length = Some(length);
        self
    }

    /// Enable or disable trailing whitespace removal
    pub fn trim_trailing_whitespace(mut self, enabled: bool) -> Self {
        self.trim_trailing_whitespace = Some(enabled);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<NormalizerConfig> {
        let mut config = NormalizerConfig::default();

        if let Some(table) = self.punctuation {
            config.punctuation = table;
        }
        for (from, to) in self.mappings {
            config.punctuation.insert(from, to);
        }
        for from in self.removals {
            config.punctuation.remove(from);
        }

        if let Some(delimiters) = self.delimiters {
            config.delimiters = delimiters;
        }
        if let Some(chars) = self.collapse_chars {
            config.collapse_chars = chars;
        }
        if let Some(length) = self.collapse_length {
            config.collapse_length = length;
        }
        if let Some(enabled) = self.trim_trailing_whitespace {
            config.trim_trailing_whitespace = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}

/// TOML schema for a normalizer configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub punctuation: PunctuationSection,
    pub markers: MarkersSection,
    pub collapse: CollapseSection,
    pub spacing: SpacingSection,
}

/// `[punctuation]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PunctuationSection {
    /// Start from an empty table instead of the built-in one
    pub replace_defaults: bool,
    /// Extra or overriding entries, one character per key
    pub map: BTreeMap<String, String>,
}

/// `[markers]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkersSection {
    pub symmetric: Vec<String>,
}

impl Default for MarkersSection {
    fn default() -> Self {
        Self {
            symmetric: defaults::DELIMITERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// `[collapse]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollapseSection {
    pub chars: String,
    pub length: usize,
}

impl Default for CollapseSection {
    fn default() -> Self {
        Self {
            chars: defaults::COLLAPSE_CHARS.iter().collect(),
            length: defaults::COLLAPSE_LENGTH,
        }
    }
}

/// `[spacing]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingSection {
    pub trim_trailing_whitespace: bool,
}

impl Default for SpacingSection {
    fn default() -> Self {
        Self {
            trim_trailing_whitespace: defaults::TRIM_TRAILING_WHITESPACE,
        }
    }
}

impl ConfigFile {
    /// Validate and convert into a [`NormalizerConfig`]
    pub fn into_config(self) -> Result<NormalizerConfig> {
        let mut builder = NormalizerConfig::builder();

        if self.punctuation.replace_defaults {
            builder = builder.punctuation(PunctuationMap::empty());
        }
        for (from, to) in self.punctuation.map {
            let mut chars = from.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(ConfigError::InvalidMapping {
                        from,
                        to,
                        reason: "source must be a single character",
                    })
                }
            };
            builder = builder.map(ch, to);
        }

        builder
            .delimiters(self.markers.symmetric)
            .collapse_chars(self.collapse.chars.chars())
            .collapse_length(self.collapse.length)
            .trim_trailing_whitespace(self.spacing.trim_trailing_whitespace)
            .build()
    }
}

impl From<&NormalizerConfig> for ConfigFile {
    fn from(config: &NormalizerConfig) -> Self {
        Self {
            punctuation: PunctuationSection {
                replace_defaults: true,
                map: config
                    .punctuation
                    .sorted_entries()
                    .into_iter()
                    .map(|(from, to)| (from.to_string(), to.to_string()))
                    .collect(),
            },
            markers: MarkersSection {
                symmetric: config.delimiters.clone(),
            },
            collapse: CollapseSection {
                chars: config.collapse_chars.iter().collect(),
                length: config.collapse_length,
            },
            spacing: SpacingSection {
                trim_trailing_whitespace: config.trim_trailing_whitespace,
            },
        }
    }
}
