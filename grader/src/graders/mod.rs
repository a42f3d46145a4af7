//! # Graders
//!
//! One [`QuestionGrader`] per question kind, and the dispatcher that picks one.
//!
//! Every grader follows the same flow: build the job, send it to the code
//! runner, check the result is usable, compare structure, then score. Runner
//! failures and unusable results are the only errors; a flawed submission
//! always yields a [`GradedResult`].

pub mod class_question_grader;
pub mod method_question_grader;
pub mod program_question_grader;

pub use class_question_grader::ClassQuestionGrader;
pub use method_question_grader::MethodQuestionGrader;
pub use program_question_grader::ProgramQuestionGrader;

use crate::diagnostics::Diagnostic;
use crate::error::GraderError;
use crate::questions::Question;
use crate::traits::question_grader::QuestionGrader;
use crate::types::{CodeSubmission, GradedResult};
use code_runner::CodeRunnerService;
use code_runner::job_result::{CodeJobResult, CodeJobStatus};
use tracing::{debug, info, warn};

/// Selects the grader for a question's kind.
pub fn grader_for<'a>(
    question: &'a Question,
    runner: &'a dyn CodeRunnerService,
) -> Box<dyn QuestionGrader + 'a> {
    match question {
        Question::Class(q) => Box::new(ClassQuestionGrader::new(q, runner)),
        Question::Method(q) => Box::new(MethodQuestionGrader::new(q, runner)),
        Question::Program(q) => Box::new(ProgramQuestionGrader::new(q, runner)),
    }
}

/// Grades one submission against any kind of question.
///
/// # Arguments
///
/// * `question` - The question, owned by the caller and unchanged by grading.
/// * `submission` - The student's source text.
/// * `runner` - The code runner the job is sent to.
pub async fn grade(
    question: &Question,
    submission: &CodeSubmission,
    runner: &dyn CodeRunnerService,
) -> Result<GradedResult, GraderError> {
    grader_for(question, runner).grade_submission(submission).await
}

/// Rejects results that cannot be graded: any status other than `Completed`,
/// or a completed result that breaks the availability rules.
pub(crate) fn ensure_completed(result: &CodeJobResult) -> Result<(), GraderError> {
    if result.status != CodeJobStatus::Completed {
        warn!(status = ?result.status, "code runner did not complete the job");
        return Err(GraderError::JobNotCompleted {
            status: result.status,
            diagnostic: result.diagnostic_output.clone(),
        });
    }

    result
        .validate()
        .map_err(|e| GraderError::MalformedJobResult(e.to_string()))
}

pub(crate) fn wrong_payload(expected: &str, result: &CodeJobResult) -> GraderError {
    GraderError::MalformedJobResult(format!(
        "expected a {} job result, got a {} job result",
        expected,
        result.payload.kind()
    ))
}

pub(crate) fn log_graded(kind: &str, name: &str, graded: &GradedResult) {
    info!(
        kind,
        name,
        score = graded.score,
        errors = graded.errors.len(),
        "graded submission"
    );
    for error in &graded.errors {
        debug!(kind, name, "{}", error.message());
    }
}
