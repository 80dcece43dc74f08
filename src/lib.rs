//! AnimCheck - CSS animation rubric grader.
//!
//! Grades a web project's use of CSS animations against a configurable
//! rubric. The library consumes a pre-extracted inventory of `@keyframes`
//! records, aggregates keyframe counts and targeted CSS properties per
//! source file, and emits deterministic `pass: ...` / `fail: ...`
//! judgments against numeric and set-membership goals.
//!
//! Discovering files on disk, parsing CSS into animation records, and
//! standards validation all happen upstream; this crate only transforms
//! already-parsed records into graded messages.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod models;
pub mod report;
