use crate::comparators::MethodSignatureComparator;
use crate::error::GraderError;
use crate::graders::{ensure_completed, log_graded, wrong_payload};
use crate::job_builder::build_method_job;
use crate::questions::MethodQuestion;
use crate::scorer::score;
use crate::traits::comparator::StructureComparator;
use crate::traits::question_grader::QuestionGrader;
use crate::types::{CodeSubmission, GradedResult};
use async_trait::async_trait;
use code_runner::CodeRunnerService;
use code_runner::job_result::JobPayload;
use tracing::{debug, error};

/// Grades method questions: signature first, then tests.
pub struct MethodQuestionGrader<'a> {
    question: &'a MethodQuestion,
    runner: &'a dyn CodeRunnerService,
}

impl<'a> MethodQuestionGrader<'a> {
    pub fn new(question: &'a MethodQuestion, runner: &'a dyn CodeRunnerService) -> Self {
        Self { question, runner }
    }
}

#[async_trait]
impl<'a> QuestionGrader for MethodQuestionGrader<'a> {
    async fn grade_submission(&self, submission: &CodeSubmission) -> Result<GradedResult, GraderError> {
        let job = build_method_job(self.question, submission);
        debug!(method_name = %self.question.method_name, tests = job.tests.len(), "sending method job");

        let result = self.runner.execute_method_job(&job).await.inspect_err(|e| {
            error!(method_name = %self.question.method_name, "method job failed: {}", e);
        })?;
        ensure_completed(&result)?;

        let JobPayload::Method(payload) = &result.payload else {
            return Err(wrong_payload("method", &result));
        };

        let errors = MethodSignatureComparator.compare(self.question, payload);
        let graded = score(&self.question.tests, &result, errors);
        log_graded("method", &self.question.method_name, &graded);
        Ok(graded)
    }
}
