//! Structural errors: mismatches between the compiled class and its contract.
//!
//! These are the expected output of grading a flawed submission, not failures
//! of the grader. Every mismatch found is reported, except that a missing class
//! short-circuits everything else.

use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// One structural mismatch, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StructuralError {
    MissingRequiredClass(MissingRequiredClassError),
    FieldVisibility(FieldVisibilityError),
    MethodCount(MethodCountError),
    MethodDefinition(MethodDefinitionError),
}

impl Diagnostic for StructuralError {
    fn message(&self) -> String {
        match self {
            StructuralError::MissingRequiredClass(e) => e.message(),
            StructuralError::FieldVisibility(e) => e.message(),
            StructuralError::MethodCount(e) => e.message(),
            StructuralError::MethodDefinition(e) => e.message(),
        }
    }
}

/// The class did not compile, so the required class does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRequiredClassError {
    pub required_class_name: String,
}

impl Diagnostic for MissingRequiredClassError {
    fn message(&self) -> String {
        format!(
            "Your submission must contain a class named '{}' that compiles.",
            self.required_class_name
        )
    }
}

/// A public field in a class that forbids them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldVisibilityError {
    pub class_name: String,
    pub field_name: String,
}

impl Diagnostic for FieldVisibilityError {
    fn message(&self) -> String {
        format!(
            "The field '{}' in class '{}' must not be public.",
            self.field_name, self.class_name
        )
    }
}

/// The class declares the wrong number of overloads for a required name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCountError {
    pub class_name: String,
    pub expected_method_name: String,
    pub expected_count: usize,
    /// Staticness of the first expected overload.
    pub expected_static: bool,
}

impl Diagnostic for MethodCountError {
    fn message(&self) -> String {
        let kind = if self.expected_static {
            "static method"
        } else if self.expected_method_name == self.class_name {
            "constructor"
        } else {
            "method"
        };
        let noun = if self.expected_count == 1 {
            "version"
        } else {
            "versions"
        };
        format!(
            "The class '{}' must have exactly {} {} of the {} '{}'.",
            self.class_name, self.expected_count, noun, kind, self.expected_method_name
        )
    }
}

/// A property of a compiled method that disagreed with its contract entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodProperty {
    Visibility,
    Staticness,
    ParameterTypes,
    ReturnType,
}

/// An overload whose signature or modifiers do not match any contract entry.
///
/// The `expected_*` fields always describe the whole expected declaration;
/// `mismatches` lists which of them the paired compiled method got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinitionError {
    pub class_name: String,
    pub expected_method_name: String,
    pub expected_public: bool,
    pub expected_static: bool,
    /// Parameter types joined by `", "`.
    pub expected_param_types: String,
    /// `None` for a constructor.
    pub expected_return_type: Option<String>,
    #[serde(default)]
    pub mismatches: Vec<MethodProperty>,
}

impl MethodDefinitionError {
    /// The expected declaration as a student would write it,
    /// e.g. `public static int add(int, int)`.
    pub fn expected_declaration(&self) -> String {
        let mut parts = vec![if self.expected_public { "public" } else { "private" }];
        if self.expected_static {
            parts.push("static");
        }
        if let Some(ret) = &self.expected_return_type {
            parts.push(ret.as_str());
        }
        format!(
            "{} {}({})",
            parts.join(" "),
            self.expected_method_name,
            self.expected_param_types
        )
    }
}

impl Diagnostic for MethodDefinitionError {
    fn message(&self) -> String {
        format!(
            "The class '{}' must declare '{}'.",
            self.class_name,
            self.expected_declaration()
        )
    }
}
