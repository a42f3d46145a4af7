//! Errors raised while talking to the external code runner.

/// Infrastructure failures of a single runner call.
///
/// None of these describe the submission; they mean the grading attempt could
/// not be carried out at all.
#[derive(Debug, thiserror::Error)]
pub enum CodeRunnerError {
    /// The request could not be sent or did not finish (connection refused, timeout, ...).
    #[error("failed to contact code runner: {0}")]
    Transport(#[source] reqwest::Error),

    /// The runner answered with a non-success HTTP status.
    #[error("code runner returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not decode, or broke the result availability rules.
    #[error("malformed code runner response: {0}")]
    MalformedResponse(String),
}

impl CodeRunnerError {
    /// True when the failure was the request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CodeRunnerError::Transport(e) if e.is_timeout())
    }
}
