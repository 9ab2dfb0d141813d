//! Pipeline passes, in execution order
//!
//! Each pass is pure and can be run and tested on its own. The
//! [`Normalizer`](crate::Normalizer) composes them.

pub mod collapse;
pub mod mapper;
pub mod markers;
pub mod quotes;
pub mod spacing;
pub mod strip;

pub use collapse::{find_runs, RunCollapser};
pub use mapper::PunctuationMapper;
pub use markers::{MarkerResolver, MarkerSpans};
pub use quotes::{annotate, QuoteStateTracker};
pub use spacing::{Spaced, SpacingEngine};
pub use strip::strip;
