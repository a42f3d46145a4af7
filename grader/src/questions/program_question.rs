//! Program questions: the student submits a complete program whose console
//! output is checked for each set of command-line arguments.

use crate::questions::QuestionTest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramQuestion {
    /// Class whose entry point is run.
    pub program_class_name: String,
    #[serde(default)]
    pub tests: Vec<ProgramQuestionTest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramQuestionTest {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub command_line_arguments: String,
    #[serde(default)]
    pub expected_output: String,
}

impl QuestionTest for ProgramQuestionTest {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// Programs only produce output.
    fn expected_return_value(&self) -> Option<&str> {
        None
    }
}
