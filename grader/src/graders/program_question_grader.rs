use crate::diagnostics::{CompilationDiagnostic, CompilationPhase};
use crate::error::GraderError;
use crate::graders::{ensure_completed, log_graded, wrong_payload};
use crate::job_builder::build_program_job;
use crate::questions::ProgramQuestion;
use crate::scorer::score;
use crate::traits::question_grader::QuestionGrader;
use crate::types::{CodeSubmission, GradedResult};
use async_trait::async_trait;
use code_runner::CodeRunnerService;
use code_runner::job_result::JobPayload;
use tracing::{debug, error};

/// Grades program questions by console output alone.
pub struct ProgramQuestionGrader<'a> {
    question: &'a ProgramQuestion,
    runner: &'a dyn CodeRunnerService,
}

impl<'a> ProgramQuestionGrader<'a> {
    pub fn new(question: &'a ProgramQuestion, runner: &'a dyn CodeRunnerService) -> Self {
        Self { question, runner }
    }
}

#[async_trait]
impl<'a> QuestionGrader for ProgramQuestionGrader<'a> {
    async fn grade_submission(&self, submission: &CodeSubmission) -> Result<GradedResult, GraderError> {
        let job = build_program_job(self.question, submission);
        debug!(program = %job.program_class_name, tests = job.tests.len(), "sending program job");

        let result = self.runner.execute_program_job(&job).await.inspect_err(|e| {
            error!(program = %job.program_class_name, "program job failed: {}", e);
        })?;
        ensure_completed(&result)?;

        let JobPayload::Program(payload) = &result.payload else {
            return Err(wrong_payload("program", &result));
        };

        let graded = if !payload.program_compilation_result.success {
            GradedResult::failed(vec![
                CompilationDiagnostic::new(
                    CompilationPhase::Program,
                    payload.program_compilation_result.errors.clone(),
                )
                .into(),
            ])
        } else if result.test_results.is_none() {
            return Err(GraderError::MalformedJobResult(
                "program compiled but the runner reported no test results".into(),
            ));
        } else {
            score(&self.question.tests, &result, Vec::new())
        };

        log_graded("program", &self.question.program_class_name, &graded);
        Ok(graded)
    }
}
