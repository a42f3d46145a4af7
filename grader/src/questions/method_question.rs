//! Method questions: the student submits a single method.

use crate::questions::{ImportedClass, QuestionTest};
use crate::utilities::type_names::{deserialize_type_list, join_type_list};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodQuestion {
    pub method_name: String,
    #[serde(default, deserialize_with = "deserialize_type_list")]
    pub parameter_types: Vec<String>,
    pub return_type: String,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default = "default_true")]
    pub is_static: bool,
    #[serde(default)]
    pub imported_classes: Vec<ImportedClass>,
    #[serde(default)]
    pub tests: Vec<MethodQuestionTest>,
}

impl MethodQuestion {
    pub fn parameter_types_display(&self) -> String {
        join_type_list(&self.parameter_types)
    }
}

/// One call of the submitted method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodQuestionTest {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub description: String,
    /// Argument expressions, e.g. `3, "abc"`.
    #[serde(default)]
    pub parameter_values: String,
    #[serde(default)]
    pub expected_return_value: Option<String>,
    #[serde(default)]
    pub expected_output: String,
}

impl QuestionTest for MethodQuestionTest {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn expected_output(&self) -> &str {
        &self.expected_output
    }

    fn expected_return_value(&self) -> Option<&str> {
        self.expected_return_value.as_deref()
    }
}
