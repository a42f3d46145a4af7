#![allow(dead_code)]

use async_trait::async_trait;
use code_runner::CodeRunnerError;
use code_runner::CodeRunnerService;
use code_runner::job::{ClassJob, MethodJob, ProgramJob};
use code_runner::job_result::CodeJobResult;
use std::sync::Mutex;

/// What the mock runner answers with.
pub enum Reply {
    Result(CodeJobResult),
    Status(u16),
}

/// Code runner double that records every job and answers with a canned reply.
pub struct MockRunner {
    reply: Reply,
    pub class_jobs: Mutex<Vec<ClassJob>>,
    pub method_jobs: Mutex<Vec<MethodJob>>,
    pub program_jobs: Mutex<Vec<ProgramJob>>,
}

impl MockRunner {
    pub fn replying(result: CodeJobResult) -> Self {
        Self::new(Reply::Result(result))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::new(Reply::Status(status))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            class_jobs: Mutex::new(Vec::new()),
            method_jobs: Mutex::new(Vec::new()),
            program_jobs: Mutex::new(Vec::new()),
        }
    }

    fn answer(&self) -> Result<CodeJobResult, CodeRunnerError> {
        match &self.reply {
            Reply::Result(result) => Ok(result.clone()),
            Reply::Status(status) => Err(CodeRunnerError::Status {
                status: *status,
                body: "runner unavailable".into(),
            }),
        }
    }

    /// The only class job sent so far.
    pub fn class_job(&self) -> ClassJob {
        let jobs = self.class_jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1, "expected exactly one class job");
        jobs[0].clone()
    }

    pub fn method_job(&self) -> MethodJob {
        let jobs = self.method_jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1, "expected exactly one method job");
        jobs[0].clone()
    }

    pub fn program_job(&self) -> ProgramJob {
        let jobs = self.program_jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1, "expected exactly one program job");
        jobs[0].clone()
    }
}

#[async_trait]
impl CodeRunnerService for MockRunner {
    async fn execute_class_job(&self, job: &ClassJob) -> Result<CodeJobResult, CodeRunnerError> {
        self.class_jobs.lock().unwrap().push(job.clone());
        self.answer()
    }

    async fn execute_method_job(&self, job: &MethodJob) -> Result<CodeJobResult, CodeRunnerError> {
        self.method_jobs.lock().unwrap().push(job.clone());
        self.answer()
    }

    async fn execute_program_job(&self, job: &ProgramJob) -> Result<CodeJobResult, CodeRunnerError> {
        self.program_jobs.lock().unwrap().push(job.clone());
        self.answer()
    }
}
