//!
//! Traits Module
//!
//! Core traits at the seams of the grader.
//!
//! - [`comparator`]: compares what the runner compiled against a question's contract.
//! - [`question_grader`]: grades a submission end to end for one question kind.
//!
//! Implement these to add a question kind or a different comparison strategy.

pub mod comparator;
pub mod question_grader;
