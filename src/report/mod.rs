//! Report generation modules.
//!
//! This module renders the grading results as Markdown or JSON.

pub mod generator;

pub use generator::*;
