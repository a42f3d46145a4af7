//! # Types Module
//!
//! Core data structures shared by the graders: the submission going in and
//! the graded result coming out.

use crate::diagnostics::CodeQuestionError;
use serde::{Deserialize, Serialize};

/// Source text submitted by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSubmission {
    pub contents: String,
}

impl CodeSubmission {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

/// The outcome of grading one submission.
///
/// This is the only artifact callers are expected to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedResult {
    /// Fraction of tests passed, in `[0, 1]`. Forced to 0.0 by any error.
    pub score: f64,
    /// Diagnostics in the order they were found.
    pub errors: Vec<CodeQuestionError>,
    /// One entry per declared test. Empty when the tests never ran.
    pub test_results: Vec<TestOutcome>,
}

impl GradedResult {
    /// A zero-score result carrying only diagnostics.
    pub fn failed(errors: Vec<CodeQuestionError>) -> Self {
        Self {
            score: 0.0,
            errors,
            test_results: Vec::new(),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.errors.is_empty() && self.score >= 1.0
    }
}

/// Result of one declared test, paired with what the question expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub name: String,
    /// Taken from the question, shown regardless of pass or fail.
    pub description: String,
    pub passed: bool,
    /// False when the test threw, timed out or produced no result at all.
    pub completed: bool,
    pub expected_output: String,
    pub actual_output: Option<String>,
    pub expected_return_value: Option<String>,
    pub actual_return_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}
