//! Jobs submitted to the code runner.
//!
//! A job is built fresh for every submission and discarded once sent.

use serde::{Deserialize, Serialize};

/// Compiles a class built from a file template plus the student's source, then
/// runs the embedded tests against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassJob {
    /// The class the tests are run against.
    pub class_name: String,
    /// Full file contents: the template with the (escaped) submission substituted.
    pub file_contents: String,
    /// Negative count of template lines before the submission. Added to a
    /// compiler line number to get the line in the student's own source.
    pub line_number_offset: i32,
    /// Fully-qualified names to import.
    pub classes_to_import: Vec<String>,
    pub tests: Vec<ClassTest>,
}

/// A test method compiled alongside the submitted class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTest {
    pub test_name: String,
    pub method_body: String,
    pub return_type: String,
}

/// Compiles a single submitted method and invokes it once per test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodJob {
    pub method_code: String,
    pub classes_to_import: Vec<String>,
    pub tests: Vec<MethodTest>,
}

/// One invocation of the submitted method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodTest {
    pub test_name: String,
    /// Argument expressions, comma-joined by the runner into the call.
    pub param_values: String,
}

/// Compiles a complete program and runs its entry point once per test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramJob {
    pub file_contents: String,
    pub program_class_name: String,
    pub tests: Vec<ProgramTest>,
}

/// One run of the submitted program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramTest {
    pub test_name: String,
    pub command_line_args: String,
}
