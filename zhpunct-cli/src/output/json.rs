//! JSON output formatter

use super::OutputFormatter;
use crate::input::Document;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs input/result records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<NormalizationRecord>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRecord {
    /// Where the input came from
    pub source: String,
    /// Original text
    pub input: String,
    /// Normalized text
    pub result: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document, result: &str) -> Result<()> {
        self.records.push(NormalizationRecord {
            source: document.source.to_string(),
            input: document.content.clone(),
            result: result.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
