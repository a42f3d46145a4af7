//!
//! # Question Grader Trait
//!
//! This module defines the [`QuestionGrader`] trait, implemented once per
//! question kind and selected by [`crate::graders::grader_for`].
//!

use crate::error::GraderError;
use crate::types::{CodeSubmission, GradedResult};
use async_trait::async_trait;

/// Grades a submission for one question.
///
/// # Arguments
/// - `submission`: The student's source text.
///
/// # Returns
/// - `Ok(GradedResult)`: Always, for any submission, however flawed.
/// - `Err(GraderError)`: Only when the grading attempt itself failed (runner
///   unreachable, job not completed, result of the wrong kind).
///
#[async_trait]
pub trait QuestionGrader: Send + Sync {
    async fn grade_submission(&self, submission: &CodeSubmission) -> Result<GradedResult, GraderError>;
}
