//! Lookup tables used by the passes
//!
//! Tables are built once from a [`NormalizerConfig`](crate::NormalizerConfig)
//! and are read-only afterwards.

pub mod delimiter;
pub mod punctuation;

pub use delimiter::DelimiterSet;
pub use punctuation::PunctuationMap;
