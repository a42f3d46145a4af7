use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// The submitted method does not have the signature a method question requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignatureError {
    pub expected_method_name: String,
    pub expected_public: bool,
    pub expected_static: bool,
    pub expected_param_types: String,
    pub expected_return_type: String,
}

impl Diagnostic for MethodSignatureError {
    fn message(&self) -> String {
        let visibility = if self.expected_public { "public" } else { "private" };
        let modifier = if self.expected_static { " static" } else { "" };
        format!(
            "Your submission must contain exactly one method with the signature '{}{} {} {}({})'.",
            visibility,
            modifier,
            self.expected_return_type,
            self.expected_method_name,
            self.expected_param_types
        )
    }
}
