//! A comparator that checks the method compiled for a method question.
//!
//! The submission must compile and must contain exactly one method with the
//! required name, whose modifiers and erased signature match the question.
//! Any other outcome produces a single diagnostic.

use crate::diagnostics::{
    CodeQuestionError, CompilationDiagnostic, CompilationPhase, MethodSignatureError,
};
use crate::questions::MethodQuestion;
use crate::traits::comparator::StructureComparator;
use crate::utilities::type_names::{same_parameter_types, same_type};
use code_runner::job_result::{MethodDefinition, MethodJobPayload};

pub struct MethodSignatureComparator;

impl MethodSignatureComparator {
    fn signature_matches(question: &MethodQuestion, method: &MethodDefinition) -> bool {
        method.is_public == question.is_public
            && method.is_static == question.is_static
            && same_parameter_types(&question.parameter_types, &method.parameter_types)
            && method
                .return_type
                .as_deref()
                .is_some_and(|ret| same_type(&question.return_type, ret))
    }
}

impl StructureComparator for MethodSignatureComparator {
    type Question = MethodQuestion;
    type Payload = MethodJobPayload;
    type Error = CodeQuestionError;

    fn compare(&self, question: &MethodQuestion, payload: &MethodJobPayload) -> Vec<CodeQuestionError> {
        if !payload.method_compilation_result.success {
            return vec![
                CompilationDiagnostic::new(
                    CompilationPhase::Method,
                    payload.method_compilation_result.errors.clone(),
                )
                .into(),
            ];
        }

        let named: Vec<&MethodDefinition> = payload
            .method_definitions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|m| m.name == question.method_name)
            .collect();

        match named.as_slice() {
            [method] if Self::signature_matches(question, method) => Vec::new(),
            _ => vec![
                MethodSignatureError {
                    expected_method_name: question.method_name.clone(),
                    expected_public: question.is_public,
                    expected_static: question.is_static,
                    expected_param_types: question.parameter_types_display(),
                    expected_return_type: question.return_type.clone(),
                }
                .into(),
            ],
        }
    }
}
