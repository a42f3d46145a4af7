//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, the error type of every fallible
//! grading operation.
//!
//! A flawed submission is never an error: it produces a [`crate::types::GradedResult`]
//! with a score of 0.0 and diagnostics. `GraderError` is reserved for failures of
//! the grading attempt itself (the runner could not be reached, answered with
//! something unusable, or the question is misconfigured).
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//!
//! fn require_tests(count: usize) -> Result<(), GraderError> {
//!     if count == 0 {
//!         return Err(GraderError::InvalidQuestion("at least one test is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use code_runner::CodeRunnerError;
use code_runner::job_result::CodeJobStatus;

/// Represents all error types that can occur in the grader.
#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    /// The runner call itself failed. Propagated unmodified, never retried.
    #[error(transparent)]
    Runner(#[from] CodeRunnerError),

    /// The runner finished the job with a status other than `Completed`.
    #[error("code runner finished the job with status {status:?}")]
    JobNotCompleted {
        status: CodeJobStatus,
        diagnostic: Option<String>,
    },

    /// The job result does not fit the job that was sent (e.g. wrong payload kind).
    #[error("unexpected job result: {0}")]
    MalformedJobResult(String),

    /// The question cannot be graded as configured (missing marker, no tests, ...).
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// Reading a question or submission file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A question file is not valid JSON for any question kind.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
