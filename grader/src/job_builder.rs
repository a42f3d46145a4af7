//! # Job Builder
//!
//! Turns a question and a raw submission into the job sent to the code runner.
//! Pure transformation: no I/O, no failure modes.
//!
//! For class questions the submission is spliced into the question's file
//! template at [`SUBMISSION_MARKER`]. Every `%` in the submission is doubled
//! first, since the runner formats the file contents before compiling them.
//! The job also carries a negative line offset so that a compiler error on
//! line `N` of the generated file maps to line `N + offset` of the submission.

use crate::questions::{ClassQuestion, ImportedClass, MethodQuestion, ProgramQuestion};
use crate::types::CodeSubmission;
use code_runner::job::{ClassJob, ClassTest, MethodJob, MethodTest, ProgramJob, ProgramTest};

/// Placeholder in a class question's file template.
pub const SUBMISSION_MARKER: &str = "%SUBMISSION%";

/// Doubles every `%` so the text survives the runner's formatting step.
pub fn escape_submission(contents: &str) -> String {
    contents.replace('%', "%%")
}

/// Negative count of template lines that precede the marker.
///
/// A template without a marker has offset 0.
pub fn line_number_offset(template: &str) -> i32 {
    template
        .find(SUBMISSION_MARKER)
        .map(|pos| -(template[..pos].matches('\n').count() as i32))
        .unwrap_or(0)
}

fn import_names(imports: &[ImportedClass]) -> Vec<String> {
    imports.iter().map(|c| c.class_name.clone()).collect()
}

/// Builds the class job for a class question.
///
/// # Arguments
///
/// * `question` - The structural contract, including the file template.
/// * `submission` - The student's source text, inserted at the first marker.
pub fn build_class_job(question: &ClassQuestion, submission: &CodeSubmission) -> ClassJob {
    let escaped = escape_submission(&submission.contents);

    ClassJob {
        class_name: question.class_name.clone(),
        file_contents: question.file_template.replacen(SUBMISSION_MARKER, &escaped, 1),
        line_number_offset: line_number_offset(&question.file_template),
        classes_to_import: import_names(&question.imported_classes),
        tests: question
            .tests
            .iter()
            .map(|t| ClassTest {
                test_name: t.name.clone(),
                method_body: t.method_body.clone(),
                return_type: t.return_type.clone(),
            })
            .collect(),
    }
}

/// Builds the method job for a method question. The submission is sent as is.
pub fn build_method_job(question: &MethodQuestion, submission: &CodeSubmission) -> MethodJob {
    MethodJob {
        method_code: submission.contents.clone(),
        classes_to_import: import_names(&question.imported_classes),
        tests: question
            .tests
            .iter()
            .map(|t| MethodTest {
                test_name: t.name.clone(),
                param_values: t.parameter_values.clone(),
            })
            .collect(),
    }
}

/// Builds the program job for a program question. The submission is sent as is.
pub fn build_program_job(question: &ProgramQuestion, submission: &CodeSubmission) -> ProgramJob {
    ProgramJob {
        file_contents: submission.contents.clone(),
        program_class_name: question.program_class_name.clone(),
        tests: question
            .tests
            .iter()
            .map(|t| ProgramTest {
                test_name: t.name.clone(),
                command_line_args: t.command_line_arguments.clone(),
            })
            .collect(),
    }
}
