//! # Scorer Module
//!
//! Combines the comparator's findings with the runner's test outcomes into a
//! [`GradedResult`].
//!
//! Any diagnostic forces the score to 0.0 and suppresses per-test results. A
//! tests-compilation failure is passed through as a diagnostic of its own.
//! Otherwise the score is the fraction of declared tests that passed.

use crate::diagnostics::{CodeQuestionError, CompilationDiagnostic, CompilationPhase};
use crate::questions::QuestionTest;
use crate::types::{GradedResult, TestOutcome};
use code_runner::job_result::{CodeJobResult, CodeTestResult};
use tracing::warn;

/// True when a test ran to completion and produced what was expected.
///
/// Output is compared exactly. The return value is only checked when the
/// question expects one.
pub fn test_passed<T: QuestionTest>(test: &T, result: &CodeTestResult) -> bool {
    result.completed
        && result.output == test.expected_output()
        && test
            .expected_return_value()
            .is_none_or(|expected| result.return_value.as_deref() == Some(expected))
}

/// Scores a completed job.
///
/// # Arguments
///
/// * `tests` - The question's declared tests, in declaration order.
/// * `job_result` - The runner's result for the job built from the same question.
/// * `errors` - Diagnostics already produced by the comparator.
///
/// # Returns
///
/// A [`GradedResult`] whose score is in `[0, 1]`.
///
/// # Behavior
///
/// - Results are matched to tests by name. A test with no result counts as failed.
/// - A question without tests scores 0.0 and logs a warning.
pub fn score<T: QuestionTest>(
    tests: &[T],
    job_result: &CodeJobResult,
    errors: Vec<CodeQuestionError>,
) -> GradedResult {
    if !errors.is_empty() {
        return GradedResult::failed(errors);
    }

    if let Some(compilation) = &job_result.tests_compilation_result {
        if !compilation.success {
            return GradedResult::failed(vec![
                CompilationDiagnostic::new(CompilationPhase::Tests, compilation.errors.clone()).into(),
            ]);
        }
    }

    let results = job_result.test_results.as_deref().unwrap_or_default();

    let test_results: Vec<TestOutcome> = tests
        .iter()
        .map(|test| {
            let result = results.iter().find(|r| r.name == test.name());
            TestOutcome {
                name: test.name().to_string(),
                description: test.description().to_string(),
                passed: result.is_some_and(|r| test_passed(test, r)),
                completed: result.is_some_and(|r| r.completed),
                expected_output: test.expected_output().to_string(),
                actual_output: result.map(|r| r.output.clone()),
                expected_return_value: test.expected_return_value().map(str::to_string),
                actual_return_value: result.and_then(|r| r.return_value.clone()),
                exception: result.and_then(|r| r.exception.clone()),
            }
        })
        .collect();

    if test_results.is_empty() {
        warn!("question declares no tests; scoring 0.0");
        return GradedResult {
            score: 0.0,
            errors: Vec::new(),
            test_results,
        };
    }

    let passed = test_results.iter().filter(|t| t.passed).count();
    GradedResult {
        score: passed as f64 / test_results.len() as f64,
        errors: Vec::new(),
        test_results,
    }
}
