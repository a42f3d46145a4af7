//! Class questions: the student submits a whole class that must match an
//! instructor-authored structural contract.

use crate::job_builder::SUBMISSION_MARKER;
use crate::questions::{ImportedClass, QuestionTest};
use crate::utilities::type_names::{deserialize_type_list, join_type_list};
use serde::{Deserialize, Serialize};

/// Expected shape of the submitted class, plus the tests run against it.
///
/// Loaded once per grading attempt and never mutated while grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassQuestion {
    /// Name of the class the submission must declare.
    pub class_name: String,
    /// Source file with a single [`SUBMISSION_MARKER`] where the submission goes.
    pub file_template: String,
    #[serde(default)]
    pub allow_public_fields: bool,
    #[serde(default)]
    pub imported_classes: Vec<ImportedClass>,
    /// Entries sharing a name form an overload set. Constructors have no return type.
    #[serde(default)]
    pub required_methods: Vec<RequiredMethod>,
    #[serde(default)]
    pub tests: Vec<ClassQuestionTest>,
}

impl ClassQuestion {
    /// True when the template contains the substitution marker.
    pub fn has_submission_marker(&self) -> bool {
        self.file_template.contains(SUBMISSION_MARKER)
    }
}

/// One declaration the compiled class must expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredMethod {
    pub name: String,
    pub is_public: bool,
    pub is_static: bool,
    /// Parameter types in declaration order. Accepts `"int, int"` or `["int", "int"]`.
    #[serde(default, deserialize_with = "deserialize_type_list")]
    pub param_types: Vec<String>,
    /// `None` marks a constructor.
    #[serde(default)]
    pub return_type: Option<String>,
}

impl RequiredMethod {
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    /// Name this entry must be matched under: constructors are named after the class.
    pub fn match_name<'a>(&'a self, class_name: &'a str) -> &'a str {
        if self.is_constructor() {
            class_name
        } else {
            &self.name
        }
    }

    /// Parameter types joined for display, e.g. `int, int`.
    pub fn param_types_display(&self) -> String {
        join_type_list(&self.param_types)
    }
}

/// A test method body run against the compiled class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassQuestionTest {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub description: String,
    pub method_body: String,
    pub return_type: String,
    #[serde(default)]
    pub expected_return_value: Option<String>,
    #[serde(default)]
    pub expected_output: String,
}

impl QuestionTest for ClassQuestionTest {
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
