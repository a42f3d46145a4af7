//! Results returned by the code runner.
//!
//! Every job kind shares a common core (status, test compilation, test results)
//! and attaches its own payload: a class job reports the compiled class
//! definition, a method job the compiled methods, and a program job only its
//! compilation outcome. The payload is a tagged variant ([`JobPayload`]) flattened
//! into the result object on the wire.
//!
//! ## Availability rules
//!
//! Data is only present when the step producing it could run:
//!
//! - no class definition and no test compilation when the class failed to compile;
//! - no test results unless the tests compiled.
//!
//! [`CodeJobResult::validate`] enforces these rules on a completed result.

use crate::error::CodeRunnerError;
use serde::{Deserialize, Serialize};

/// Terminal status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeJobStatus {
    Completed,
    Timeout,
    Error,
}

/// Outcome of one compilation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<CompileError>,
}

impl CompilationResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<CompileError>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// A single compiler diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub full_error: String,
}

/// Shape of the compiled class as reported by the runner.
///
/// Generic parameterizations are usually erased in these type names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub is_public: bool,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A compiled method or constructor. Constructors have no return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub name: String,
    pub is_public: bool,
    pub is_static: bool,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub return_type: Option<String>,
}

/// Execution outcome of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTestResult {
    pub name: String,
    pub completed: bool,
    #[serde(default)]
    pub output: String,
    /// Rendered return value, absent for tests that return nothing.
    #[serde(default)]
    pub return_value: Option<String>,
    /// Exception text when the test did not complete.
    #[serde(default)]
    pub exception: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassJobPayload {
    pub class_compilation_result: CompilationResult,
    #[serde(default)]
    pub class_definition: Option<ClassDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodJobPayload {
    pub method_compilation_result: CompilationResult,
    /// Every method found in the submission, present once it compiled.
    #[serde(default)]
    pub method_definitions: Option<Vec<MethodDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramJobPayload {
    pub program_compilation_result: CompilationResult,
}

/// Kind-specific part of a job result, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JobPayload {
    Class(ClassJobPayload),
    Method(MethodJobPayload),
    Program(ProgramJobPayload),
}

impl JobPayload {
    /// Short name of the payload kind, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JobPayload::Class(_) => "class",
            JobPayload::Method(_) => "method",
            JobPayload::Program(_) => "program",
        }
    }

    /// Compilation result of the submission itself (not of the tests).
    pub fn compilation_result(&self) -> &CompilationResult {
        match self {
            JobPayload::Class(p) => &p.class_compilation_result,
            JobPayload::Method(p) => &p.method_compilation_result,
            JobPayload::Program(p) => &p.program_compilation_result,
        }
    }
}

/// The runner's answer to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeJobResult {
    pub status: CodeJobStatus,
    /// Free-form runner output explaining a non-completed status.
    #[serde(default)]
    pub diagnostic_output: Option<String>,
    /// Present only if the submission itself compiled.
    #[serde(default)]
    pub tests_compilation_result: Option<CompilationResult>,
    /// Present only if everything compiled.
    #[serde(default)]
    pub test_results: Option<Vec<CodeTestResult>>,
    #[serde(flatten)]
    pub payload: JobPayload,
}

impl CodeJobResult {
    /// Checks the availability rules for a completed result.
    ///
    /// Results with any other status carry no guarantees and always pass.
    pub fn validate(&self) -> Result<(), CodeRunnerError> {
        if self.status != CodeJobStatus::Completed {
            return Ok(());
        }

        let malformed = |msg: &str| {
            Err(CodeRunnerError::MalformedResponse(format!(
                "{} job result: {}",
                self.payload.kind(),
                msg
            )))
        };

        let compiled = self.payload.compilation_result().success;
        let tests_compiled = self
            .tests_compilation_result
            .as_ref()
            .map(|r| r.success)
            .unwrap_or(false);

        if !compiled && self.tests_compilation_result.is_some() {
            return malformed("tests compilation reported for a submission that did not compile");
        }

        match &self.payload {
            JobPayload::Class(p) => {
                if compiled != p.class_definition.is_some() {
                    return malformed("class definition must be present exactly when the class compiled");
                }
                if self.test_results.is_some() && !tests_compiled {
                    return malformed("test results reported without a successful tests compilation");
                }
            }
            JobPayload::Method(p) => {
                if compiled != p.method_definitions.is_some() {
                    return malformed("method definitions must be present exactly when the method compiled");
                }
                if self.test_results.is_some() && !compiled {
                    return malformed("test results reported for a method that did not compile");
                }
            }
            JobPayload::Program(_) => {
                if self.test_results.is_some() && !compiled {
                    return malformed("test results reported for a program that did not compile");
                }
            }
        }

        Ok(())
    }
}
