//! # Grade Report Module
//!
//! This module defines the response envelope returned for a graded submission.
//!
//! ## Overview
//!
//! - [`GradeResponse`]: wraps a [`GradedResult`] with `success`, `message`, a
//!   grading timestamp and the student-facing feedback messages.
//! - [`FeedbackEntry`]: one rendered diagnostic.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "gradedAt": "2025-06-01T10:00:00Z",
//!   "feedback": [
//!     { "category": "structural", "message": "The field 'count' in class 'Counter' must not be public." }
//!   ],
//!   "data": {
//!     "score": 0.0,
//!     "errors": [ { "category": "structural", "detail": { "type": "FieldVisibility", "...": "..." } } ],
//!     "testResults": []
//!   }
//! }
//! ```
//!
//! The [`From<GradedResult> for GradeResponse`] implementation stamps the current time.

use crate::diagnostics::{CodeQuestionError, Diagnostic};
use crate::types::GradedResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A diagnostic rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub category: &'static str,
    pub message: String,
}

impl From<&CodeQuestionError> for FeedbackEntry {
    fn from(error: &CodeQuestionError) -> Self {
        let category = match error {
            CodeQuestionError::Structural(_) => "structural",
            CodeQuestionError::MethodSignature(_) => "methodSignature",
            CodeQuestionError::Compilation(_) => "compilation",
        };
        FeedbackEntry {
            category,
            message: error.message(),
        }
    }
}

/// The response envelope for a graded submission.
///
/// - `success`: Always true; failed grading attempts never produce a response.
/// - `message`: A human-readable message ("Grading complete.").
/// - `data`: The [`GradedResult`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    success: bool,
    message: String,
    graded_at: DateTime<Utc>,
    feedback: Vec<FeedbackEntry>,
    data: GradedResult,
}

impl GradeResponse {
    pub fn data(&self) -> &GradedResult {
        &self.data
    }

    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }
}

impl From<GradedResult> for GradeResponse {
    fn from(result: GradedResult) -> Self {
        GradeResponse {
            success: true,
            message: "Grading complete.".to_string(),
            graded_at: Utc::now(),
            feedback: result.errors.iter().map(FeedbackEntry::from).collect(),
            data: result,
        }
    }
}
