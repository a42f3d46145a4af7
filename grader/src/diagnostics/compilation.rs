use crate::diagnostics::Diagnostic;
use code_runner::job_result::CompileError;
use serde::{Deserialize, Serialize};

/// Which compilation step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilationPhase {
    Class,
    Tests,
    Method,
    Program,
}

/// Compiler output passed through to the student unchanged.
///
/// Not a structural error: it only reports what the compiler said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationDiagnostic {
    pub phase: CompilationPhase,
    pub errors: Vec<CompileError>,
}

impl CompilationDiagnostic {
    pub fn new(phase: CompilationPhase, errors: Vec<CompileError>) -> Self {
        Self { phase, errors }
    }
}

impl Diagnostic for CompilationDiagnostic {
    fn message(&self) -> String {
        let what = match self.phase {
            CompilationPhase::Class => "Your class",
            CompilationPhase::Tests => "The tests for your submission",
            CompilationPhase::Method => "Your method",
            CompilationPhase::Program => "Your program",
        };

        let details: Vec<&str> = self
            .errors
            .iter()
            .map(|e| {
                if e.full_error.is_empty() {
                    e.message.as_str()
                } else {
                    e.full_error.as_str()
                }
            })
            .filter(|text| !text.is_empty())
            .collect();

        if details.is_empty() {
            format!("{what} failed to compile.")
        } else {
            format!("{what} failed to compile:\n{}", details.join("\n"))
        }
    }
}
