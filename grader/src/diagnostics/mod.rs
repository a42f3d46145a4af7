//! # Diagnostics
//!
//! Student-facing findings produced while grading. Every kind implements
//! [`Diagnostic`], which renders the human-readable message.
//!
//! - [`structural`]: the closed set of class-structure mismatches.
//! - [`method_signature`]: a method question's submitted signature is wrong.
//! - [`compilation`]: compiler output passed through unchanged.
//!
//! [`CodeQuestionError`] is the sum of all three and is what a
//! [`crate::types::GradedResult`] carries.

pub mod compilation;
pub mod method_signature;
pub mod structural;

pub use compilation::{CompilationDiagnostic, CompilationPhase};
pub use method_signature::MethodSignatureError;
pub use structural::{
    FieldVisibilityError, MethodCountError, MethodDefinitionError, MethodProperty,
    MissingRequiredClassError, StructuralError,
};

use serde::{Deserialize, Serialize};

/// A finding that can be shown to the student.
pub trait Diagnostic {
    fn message(&self) -> String;
}

/// Any error reported in a graded result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "detail", rename_all = "camelCase")]
pub enum CodeQuestionError {
    Structural(StructuralError),
    MethodSignature(MethodSignatureError),
    Compilation(CompilationDiagnostic),
}

impl CodeQuestionError {
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            CodeQuestionError::Structural(e) => Some(e),
            _ => None,
        }
    }
}

impl Diagnostic for CodeQuestionError {
    fn message(&self) -> String {
        match self {
            CodeQuestionError::Structural(e) => e.message(),
            CodeQuestionError::MethodSignature(e) => e.message(),
            CodeQuestionError::Compilation(e) => e.message(),
        }
    }
}

impl From<StructuralError> for CodeQuestionError {
    fn from(error: StructuralError) -> Self {
        CodeQuestionError::Structural(error)
    }
}

impl From<MethodSignatureError> for CodeQuestionError {
    fn from(error: MethodSignatureError) -> Self {
        CodeQuestionError::MethodSignature(error)
    }
}

impl From<CompilationDiagnostic> for CodeQuestionError {
    fn from(error: CompilationDiagnostic) -> Self {
        CodeQuestionError::Compilation(error)
    }
}
