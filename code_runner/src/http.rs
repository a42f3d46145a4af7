//! HTTP client for the code runner service.
//!
//! Jobs are POSTed as JSON to `{base_url}/classjob`, `/methodjob` and
//! `/programjob`. The response body is a [`CodeJobResult`].

use crate::error::CodeRunnerError;
use crate::job::{ClassJob, MethodJob, ProgramJob};
use crate::job_result::CodeJobResult;
use crate::service::CodeRunnerService;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};
use util::config::AppConfig;

/// [`CodeRunnerService`] backed by a remote runner reachable over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCodeRunner {
    client: Client,
    base_url: String,
}

impl HttpCodeRunner {
    /// Creates a client for the runner at `base_url`.
    ///
    /// `timeout` caps each whole request, including reading the body.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CodeRunnerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CodeRunnerError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the runner host, port and timeout in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, CodeRunnerError> {
        Self::new(
            config.code_runner_url(),
            Duration::from_secs(config.code_runner_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_job<J: Serialize + Sync>(
        &self,
        endpoint: &str,
        job: &J,
    ) -> Result<CodeJobResult, CodeRunnerError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "Sending job to code runner");

        let response = self
            .client
            .post(&url)
            .json(job)
            .send()
            .await
            .map_err(|e| {
                error!(%url, error = %e, "Failed to contact code runner");
                CodeRunnerError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(CodeRunnerError::Transport)?;

        if !status.is_success() {
            error!(%url, status = status.as_u16(), "Code runner rejected job");
            return Err(CodeRunnerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: CodeJobResult = serde_json::from_str(&body)
            .map_err(|e| CodeRunnerError::MalformedResponse(e.to_string()))?;

        debug!(%url, status = ?result.status, kind = result.payload.kind(), "Code runner responded");
        Ok(result)
    }
}

#[async_trait]
impl CodeRunnerService for HttpCodeRunner {
    async fn execute_class_job(&self, job: &ClassJob) -> Result<CodeJobResult, CodeRunnerError> {
        self.post_job("classjob", job).await
    }

    async fn execute_method_job(&self, job: &MethodJob) -> Result<CodeJobResult, CodeRunnerError> {
        self.post_job("methodjob", job).await
    }

    async fn execute_program_job(
        &self,
        job: &ProgramJob,
    ) -> Result<CodeJobResult, CodeRunnerError> {
        self.post_job("programjob", job).await
    }
}
