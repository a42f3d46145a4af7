//! # Grader Library
//!
//! Grades code submissions against instructor-authored questions by sending
//! them to an external code runner and checking what comes back.
//!
//! ## Key Concepts
//! - **Questions**: Contracts per kind (class, method, program), see [`questions`].
//! - **Job Builder**: Turns a question and a submission into a runner job, see [`job_builder`].
//! - **Comparators**: Check the compiled structure against the contract, see [`comparators`].
//! - **Scorer**: Turns diagnostics and test outcomes into a score, see [`scorer`].
//! - **Graders**: Tie the steps together per question kind, see [`graders`].
//!
//! ## Example
//!
//! ```no_run
//! use code_runner::HttpCodeRunner;
//! use grader::questions::Question;
//! use grader::report::GradeResponse;
//! use grader::types::CodeSubmission;
//! use std::time::Duration;
//!
//! # async fn run(question: Question) -> Result<(), grader::error::GraderError> {
//! let runner = HttpCodeRunner::new("http://127.0.0.1:5000", Duration::from_secs(60))?;
//! let submission = CodeSubmission::new("public class Counter { private int count; }");
//! let result = grader::grade(&question, &submission, &runner).await?;
//! let response = GradeResponse::from(result);
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

pub mod comparators;
pub mod diagnostics;
pub mod error;
pub mod graders;
pub mod job_builder;
pub mod questions;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

pub use graders::{grade, grader_for};
