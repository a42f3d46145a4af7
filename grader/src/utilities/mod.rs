//! # Utilities
//!
//! Helpers shared across the grader.
//!
//! - [`type_names`]: generic erasure and parameter-list handling for signature comparison.

pub mod type_names;
