//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{read_stdin, FileReader};
pub use glob_resolver::resolve_patterns;

use std::fmt;
use std::path::PathBuf;

/// Where a piece of input text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Given inline on the command line
    Text,
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Text => write!(f, "<text>"),
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One input text with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Origin of the text
    pub source: Source,
    /// Raw text
    pub content: String,
}

impl Document {
    /// Create a document
    pub fn new(source: Source, content: impl Into<String>) -> Self {
        Self {
            source,
            content: content.into(),
        }
    }
}
