//! # Questions
//!
//! Instructor-authored contracts, one type per question kind:
//!
//! - [`class_question`]: a whole class checked structurally, then tested.
//! - [`method_question`]: a single method checked by signature, then tested.
//! - [`program_question`]: a complete program checked by its console output.
//!
//! [`Question`] is the closed set of kinds the dispatcher in [`crate::graders`]
//! selects a grader from.

pub mod class_question;
pub mod method_question;
pub mod program_question;

pub use class_question::{ClassQuestion, ClassQuestionTest, RequiredMethod};
pub use method_question::{MethodQuestion, MethodQuestionTest};
pub use program_question::{ProgramQuestion, ProgramQuestionTest};

use crate::error::GraderError;
use serde::{Deserialize, Serialize};

/// A fully-qualified class name to import into the compiled unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedClass {
    pub class_name: String,
}

/// What the scorer needs from any kind of question test.
pub trait QuestionTest {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn expected_output(&self) -> &str;
    /// `None` means the return value is not checked.
    fn expected_return_value(&self) -> Option<&str>;
}

/// A question of any kind, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Class(ClassQuestion),
    Method(MethodQuestion),
    Program(ProgramQuestion),
}

impl Question {
    pub fn kind(&self) -> &'static str {
        match self {
            Question::Class(_) => "class",
            Question::Method(_) => "method",
            Question::Program(_) => "program",
        }
    }

    fn test_count(&self) -> usize {
        match self {
            Question::Class(q) => q.tests.len(),
            Question::Method(q) => q.tests.len(),
            Question::Program(q) => q.tests.len(),
        }
    }

    /// Rejects configurations the grading engine does not define behaviour for.
    ///
    /// Graders do not call this; callers loading questions from outside should.
    pub fn validate(&self) -> Result<(), GraderError> {
        if self.test_count() == 0 {
            return Err(GraderError::InvalidQuestion(format!(
                "{} question declares no tests",
                self.kind()
            )));
        }

        if let Question::Class(q) = self {
            if q.class_name.trim().is_empty() {
                return Err(GraderError::InvalidQuestion("class name is empty".into()));
            }
            if !q.has_submission_marker() {
                return Err(GraderError::InvalidQuestion(
                    "file template has no submission marker".into(),
                ));
            }
        }

        Ok(())
    }
}
