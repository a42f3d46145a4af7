use crate::comparators::ClassStructureComparator;
use crate::error::GraderError;
use crate::graders::{ensure_completed, log_graded, wrong_payload};
use crate::job_builder::build_class_job;
use crate::questions::ClassQuestion;
use crate::scorer::score;
use crate::traits::comparator::StructureComparator;
use crate::traits::question_grader::QuestionGrader;
use crate::types::{CodeSubmission, GradedResult};
use async_trait::async_trait;
use code_runner::CodeRunnerService;
use code_runner::job_result::JobPayload;
use tracing::{debug, error};

/// Grades class questions: structure first, then tests.
pub struct ClassQuestionGrader<'a> {
    question: &'a ClassQuestion,
    runner: &'a dyn CodeRunnerService,
}

impl<'a> ClassQuestionGrader<'a> {
    pub fn new(question: &'a ClassQuestion, runner: &'a dyn CodeRunnerService) -> Self {
        Self { question, runner }
    }
}

#[async_trait]
impl<'a> QuestionGrader for ClassQuestionGrader<'a> {
    async fn grade_submission(&self, submission: &CodeSubmission) -> Result<GradedResult, GraderError> {
        let job = build_class_job(self.question, submission);
        debug!(
            class_name = %job.class_name,
            tests = job.tests.len(),
            line_number_offset = job.line_number_offset,
            "sending class job"
        );

        let result = self.runner.execute_class_job(&job).await.inspect_err(|e| {
            error!(class_name = %job.class_name, "class job failed: {}", e);
        })?;
        ensure_completed(&result)?;

        let JobPayload::Class(payload) = &result.payload else {
            return Err(wrong_payload("class", &result));
        };

        let errors = ClassStructureComparator
            .compare(self.question, payload)
            .into_iter()
            .map(Into::into)
            .collect();

        let graded = score(&self.question.tests, &result, errors);
        log_graded("class", &self.question.class_name, &graded);
        Ok(graded)
    }
}
