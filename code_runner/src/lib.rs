//! # Code Runner Client
//!
//! Request/response model and client for the external compile-and-run service.
//!
//! The runner itself (sandboxing, compilation, test execution) lives outside this
//! workspace. This crate owns only the wire contract:
//!
//! - [`job`]: the jobs sent to the runner (class, method and program jobs).
//! - [`job_result`]: the results it returns, including the compiled structure.
//! - [`service`]: the [`CodeRunnerService`] seam the grader depends on.
//! - [`http`]: a `reqwest` implementation of that seam.
//!
//! Transport failures are surfaced as [`CodeRunnerError`] and never retried here.

pub mod error;
pub mod http;
pub mod job;
pub mod job_result;
pub mod service;

pub use error::CodeRunnerError;
pub use http::HttpCodeRunner;
pub use service::CodeRunnerService;
