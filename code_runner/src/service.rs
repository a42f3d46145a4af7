//! The seam between the grading engine and the external runner.

use crate::error::CodeRunnerError;
use crate::job::{ClassJob, MethodJob, ProgramJob};
use crate::job_result::CodeJobResult;
use async_trait::async_trait;

/// Compiles and executes jobs on behalf of the grader.
///
/// Each call is one request/response round trip and the only suspension point
/// of a grading attempt. Implementations own any timeout or retry policy; a
/// returned error is fatal to the attempt.
///
/// A completed result must follow the availability rules documented in
/// [`crate::job_result`].
#[async_trait]
pub trait CodeRunnerService: Send + Sync {
    async fn execute_class_job(&self, job: &ClassJob) -> Result<CodeJobResult, CodeRunnerError>;

    async fn execute_method_job(&self, job: &MethodJob) -> Result<CodeJobResult, CodeRunnerError>;

    async fn execute_program_job(&self, job: &ProgramJob)
    -> Result<CodeJobResult, CodeRunnerError>;
}
