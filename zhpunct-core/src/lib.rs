//! Punctuation and spacing normalization for mixed Chinese/English text
//!
//! The normalizer converts full-width Chinese punctuation to its ASCII
//! form, puts single spaces at Chinese/Latin/digit boundaries, collapses
//! repeated `.`/`?`/`!` runs, and keeps paired markers such as `**bold**`
//! and quotes free of interior whitespace.
//!
//! # Architecture
//!
//! Normalization is an ordered pipeline of pure passes:
//! - **Mapping**: full-width punctuation to ASCII ([`passes::mapper`])
//! - **Collapsing**: canonical punctuation runs ([`passes::collapse`])
//! - **Quote tracking**: direction of each ASCII quote ([`passes::quotes`])
//! - **Marker resolution**: symmetric and quote spans ([`passes::markers`])
//! - **Spacing**: boundary whitespace ([`passes::spacing`])
//! - **Stripping**: marker interiors ([`passes::strip`])
//!
//! # Example
//!
//! ```rust
//! use zhpunct_core::{normalize, NormalizerConfig, Normalizer};
//!
//! assert_eq!(
//!     normalize("这是Python代码，它使用Flask框架。"),
//!     "这是 Python 代码, 它使用 Flask 框架."
//! );
//!
//! // Custom configuration
//! let config = NormalizerConfig::builder()
//!     .map('《', "<")
//!     .map('》', ">")
//!     .build()
//!     .unwrap();
//! let normalizer = Normalizer::new(config);
//! assert_eq!(normalizer.normalize("推荐《三体》，很好看。"), "推荐<三体>, 很好看.");
//! ```

pub mod character_window;
pub mod classifier;
pub mod config;
pub mod error;
pub mod passes;
pub mod pipeline;
pub mod tables;
pub mod types;

pub use classifier::classify;
pub use config::{ConfigBuilder, ConfigFile, NormalizerConfig};
pub use error::{ConfigError, Result};
pub use pipeline::{normalize, Normalizer};
pub use types::{Category, ConsecutiveRun, MarkerFamily, MarkerSpan, QuoteKind, QuoteMark, QuoteRole};
