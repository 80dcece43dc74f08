//! Analysis modules.
//!
//! Aggregation of the raw animation inventory into per-file summaries,
//! plus the rubric goal evaluators that turn them into judgments.

pub mod aggregator;
pub mod evaluator;

pub use aggregator::*;
pub use evaluator::*;
