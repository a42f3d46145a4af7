mod common;

use code_runner::job_result::{
    ClassDefinition, ClassJobPayload, CodeJobResult, CodeJobStatus, CodeTestResult,
    CompilationResult, CompileError, FieldDefinition, JobPayload, MethodDefinition,
};
use common::MockRunner;
use grader::diagnostics::{CodeQuestionError, CompilationPhase, StructuralError};
use grader::error::GraderError;
use grader::graders::ClassQuestionGrader;
use grader::questions::{ClassQuestion, ClassQuestionTest, ImportedClass, RequiredMethod};
use grader::traits::question_grader::QuestionGrader;
use grader::types::{CodeSubmission, GradedResult};

#[derive(Debug, Default, Clone, Copy)]
struct Options {
    allow_public_fields: bool,
    overloaded_methods: bool,
    use_generics: bool,
    constructor: bool,
}

fn types(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn required_method(o: Options, name: &str, params: &[&str], ret: &str) -> RequiredMethod {
    RequiredMethod {
        name: if o.constructor { "ExpectedClass".into() } else { name.into() },
        is_public: true,
        is_static: false,
        param_types: types(params),
        return_type: (!o.constructor).then(|| ret.to_string()),
    }
}

fn class_question(o: Options) -> ClassQuestion {
    let required_methods = if o.overloaded_methods {
        vec![
            required_method(
                o,
                "requiredOverloadedMethod",
                &[if o.use_generics { "ArrayList<Integer>" } else { "int" }],
                if o.use_generics { "ArrayList<Boolean>" } else { "boolean" },
            ),
            required_method(
                o,
                "requiredOverloadedMethod",
                &["double"],
                if o.use_generics { "ArrayList<String>" } else { "String" },
            ),
        ]
    } else {
        let param = if o.use_generics { "ArrayList<Integer>" } else { "int" };
        vec![required_method(
            o,
            "requiredMethod",
            &[param, param],
            if o.use_generics { "ArrayList<String>" } else { "String" },
        )]
    };

    ClassQuestion {
        class_name: "ExpectedClass".into(),
        file_template: "class InternalClass\n{\n}\n\n%SUBMISSION%".into(),
        allow_public_fields: o.allow_public_fields,
        imported_classes: vec![ImportedClass {
            class_name: "package.classToImport".into(),
        }],
        required_methods,
        tests: vec![ClassQuestionTest {
            name: "test1".into(),
            order: 1,
            description: "Description".into(),
            method_body: "Method Body".into(),
            return_type: "String".into(),
            expected_return_value: (!o.constructor).then(|| "expectedReturnValue".to_string()),
            expected_output: "expectedOutput".into(),
        }],
    }
}

fn compiled_method(o: Options, name: &str, params: &[&str], ret: &str) -> MethodDefinition {
    MethodDefinition {
        name: if o.constructor { "ExpectedClass".into() } else { name.into() },
        is_public: true,
        is_static: false,
        parameter_types: types(params),
        return_type: (!o.constructor).then(|| ret.to_string()),
    }
}

/// A completed class job result. With `success` false the class compiles but
/// the tests do not.
fn class_job_result(success: bool, o: Options) -> CodeJobResult {
    let methods = if o.overloaded_methods {
        vec![
            compiled_method(
                o,
                "requiredOverloadedMethod",
                &[if o.use_generics { "ArrayList" } else { "int" }],
                if o.use_generics { "ArrayList" } else { "boolean" },
            ),
            compiled_method(
                o,
                "requiredOverloadedMethod",
                &["double"],
                if o.use_generics { "ArrayList" } else { "String" },
            ),
        ]
    } else {
        let param = if o.use_generics { "ArrayList" } else { "int" };
        vec![compiled_method(
            o,
            "requiredMethod",
            &[param, param],
            if o.use_generics { "ArrayList" } else { "String" },
        )]
    };

    CodeJobResult {
        status: CodeJobStatus::Completed,
        diagnostic_output: None,
        tests_compilation_result: Some(if success {
            CompilationResult::succeeded()
        } else {
            CompilationResult::failed(vec![CompileError {
                message: String::new(),
                full_error: "Test compilation failure".into(),
            }])
        }),
        test_results: success.then(|| {
            vec![CodeTestResult {
                name: "test1".into(),
                completed: true,
                output: "expectedOutput".into(),
                return_value: (!o.constructor).then(|| "expectedReturnValue".to_string()),
                exception: None,
            }]
        }),
        payload: JobPayload::Class(ClassJobPayload {
            class_compilation_result: CompilationResult::succeeded(),
            class_definition: Some(ClassDefinition {
                name: "ExpectedClass".into(),
                fields: vec![],
                methods,
            }),
        }),
    }
}

fn definition_mut(result: &mut CodeJobResult) -> &mut ClassDefinition {
    let JobPayload::Class(payload) = &mut result.payload else {
        panic!("expected a class payload");
    };
    payload.class_definition.as_mut().unwrap()
}

async fn grade(question: &ClassQuestion, result: CodeJobResult, contents: &str) -> (GradedResult, MockRunner) {
    let runner = MockRunner::replying(result);
    let graded = ClassQuestionGrader::new(question, &runner)
        .grade_submission(&CodeSubmission::new(contents))
        .await
        .unwrap();
    (graded, runner)
}

fn single_structural(result: &GradedResult) -> &StructuralError {
    match result.errors.as_slice() {
        [CodeQuestionError::Structural(error)] => error,
        other => panic!("expected a single structural error, got {other:?}"),
    }
}

#[tokio::test]
async fn class_job_has_imported_classes() {
    let question = class_question(Options::default());
    let (result, runner) = grade(&question, class_job_result(true, Options::default()), "Submission").await;

    assert_eq!(runner.class_job().classes_to_import, vec!["package.classToImport"]);
    assert_eq!(result.score, 1.0);
}

#[tokio::test]
async fn class_job_has_correct_class_name() {
    let question = class_question(Options::default());
    let (result, runner) = grade(&question, class_job_result(true, Options::default()), "Submission").await;

    assert_eq!(runner.class_job().class_name, "ExpectedClass");
    assert_eq!(result.score, 1.0);
}

#[tokio::test]
async fn class_job_has_escaped_file_contents() {
    let question = class_question(Options::default());
    let (result, runner) = grade(&question, class_job_result(true, Options::default()), "Submission %").await;

    assert_eq!(
        runner.class_job().file_contents,
        "class InternalClass\n{\n}\n\nSubmission %%"
    );
    assert_eq!(result.score, 1.0);
}

#[tokio::test]
async fn class_job_has_correct_line_offset() {
    let question = class_question(Options::default());
    let (_, runner) = grade(&question, class_job_result(true, Options::default()), "Submission").await;

    assert_eq!(runner.class_job().line_number_offset, -4);
}

#[tokio::test]
async fn class_job_has_tests() {
    let question = class_question(Options::default());
    let (result, runner) = grade(&question, class_job_result(true, Options::default()), "Submission %").await;

    let job = runner.class_job();
    assert_eq!(job.tests.len(), 1);
    assert_eq!(job.tests[0].test_name, "test1");
    assert_eq!(job.tests[0].method_body, "Method Body");
    assert_eq!(job.tests[0].return_type, "String");
    assert_eq!(result.score, 1.0);
}

#[tokio::test]
async fn missing_expected_class_error() {
    let question = class_question(Options::default());
    let mut job_result = class_job_result(false, Options::default());
    job_result.tests_compilation_result = None;
    job_result.payload = JobPayload::Class(ClassJobPayload {
        class_compilation_result: CompilationResult::failed(vec![CompileError {
            message: "class ExpectedClass should be declared in ExpectedClass.java".into(),
            full_error: String::new(),
        }]),
        class_definition: None,
    });

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    assert!(result.test_results.is_empty());
    let StructuralError::MissingRequiredClass(error) = single_structural(&result) else {
        panic!("expected a missing class error");
    };
    assert_eq!(error.required_class_name, "ExpectedClass");
}

fn with_fields(mut result: CodeJobResult) -> CodeJobResult {
    definition_mut(&mut result).fields = vec![
        FieldDefinition {
            name: "field1".into(),
            is_public: true,
            field_type: "String".into(),
        },
        FieldDefinition {
            name: "field2".into(),
            is_public: false,
            field_type: "String".into(),
        },
    ];
    result
}

#[tokio::test]
async fn forbidden_public_fields_error() {
    let question = class_question(Options::default());
    let job_result = with_fields(class_job_result(false, Options::default()));

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    let StructuralError::FieldVisibility(error) = single_structural(&result) else {
        panic!("expected a field visibility error");
    };
    assert_eq!(error.class_name, "ExpectedClass");
    assert_eq!(error.field_name, "field1");
}

#[tokio::test]
async fn permitted_public_fields_success() {
    let options = Options {
        allow_public_fields: true,
        ..Options::default()
    };
    let question = class_question(options);
    let job_result = with_fields(class_job_result(true, options));

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 1.0);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn missing_required_method_error() {
    let question = class_question(Options::default());
    let mut job_result = class_job_result(false, Options::default());
    definition_mut(&mut job_result).methods.clear();

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    let StructuralError::MethodCount(error) = single_structural(&result) else {
        panic!("expected a method count error");
    };
    assert_eq!(error.class_name, "ExpectedClass");
    assert_eq!(error.expected_method_name, "requiredMethod");
    assert_eq!(error.expected_count, 1);
}

async fn single_definition_error(
    options: Options,
    question: ClassQuestion,
    change: impl FnOnce(&mut ClassDefinition),
) -> grader::diagnostics::MethodDefinitionError {
    let mut job_result = class_job_result(false, options);
    change(definition_mut(&mut job_result));

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    match single_structural(&result) {
        StructuralError::MethodDefinition(error) => error.clone(),
        other => panic!("expected a method definition error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_method_visibility_error() {
    let o = Options::default();
    let error = single_definition_error(o, class_question(o), |d| d.methods[0].is_public = false).await;

    assert_eq!(error.expected_method_name, "requiredMethod");
    assert!(error.expected_public);
}

#[tokio::test]
async fn unexpected_static_method_error() {
    let o = Options::default();
    let error = single_definition_error(o, class_question(o), |d| d.methods[0].is_static = true).await;

    assert_eq!(error.expected_method_name, "requiredMethod");
    assert!(!error.expected_static);
}

#[tokio::test]
async fn wrong_return_type_error() {
    let o = Options::default();
    let error = single_definition_error(o, class_question(o), |d| {
        d.methods[0].return_type = Some("boolean".into())
    })
    .await;

    assert_eq!(error.expected_method_name, "requiredMethod");
    assert_eq!(error.expected_return_type.as_deref(), Some("String"));
}

#[tokio::test]
async fn wrong_parameter_types_error() {
    let o = Options::default();
    let error = single_definition_error(o, class_question(o), |d| {
        d.methods[0].parameter_types[1] = "double".into()
    })
    .await;

    assert_eq!(error.expected_method_name, "requiredMethod");
    assert_eq!(error.expected_param_types, "int, int");
}

#[tokio::test]
async fn too_few_overloads_error() {
    let o = Options {
        overloaded_methods: true,
        ..Options::default()
    };
    let question = class_question(o);
    let mut job_result = class_job_result(false, o);
    definition_mut(&mut job_result).methods.remove(0);

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    let StructuralError::MethodCount(error) = single_structural(&result) else {
        panic!("expected a method count error");
    };
    assert_eq!(error.class_name, "ExpectedClass");
    assert_eq!(error.expected_method_name, "requiredOverloadedMethod");
    assert_eq!(error.expected_count, 2);
    assert!(!error.expected_static);
}

#[tokio::test]
async fn too_many_overloads_error() {
    let o = Options {
        overloaded_methods: true,
        ..Options::default()
    };
    let mut question = class_question(o);
    question.required_methods.remove(0);

    let (result, _) = grade(&question, class_job_result(false, o), "Submission").await;

    assert_eq!(result.score, 0.0);
    let StructuralError::MethodCount(error) = single_structural(&result) else {
        panic!("expected a method count error");
    };
    assert_eq!(error.class_name, "ExpectedClass");
    assert_eq!(error.expected_method_name, "requiredOverloadedMethod");
    assert_eq!(error.expected_count, 1);
    assert!(!error.expected_static);
}

#[tokio::test]
async fn wrong_overload_signature_error() {
    let o = Options {
        overloaded_methods: true,
        ..Options::default()
    };
    let error = single_definition_error(o, class_question(o), |d| {
        d.methods[0].parameter_types[0] = "String".into()
    })
    .await;

    assert_eq!(error.class_name, "ExpectedClass");
    assert_eq!(error.expected_method_name, "requiredOverloadedMethod");
    assert!(error.expected_public);
    assert!(!error.expected_static);
    assert_eq!(error.expected_param_types, "int");
    assert_eq!(error.expected_return_type.as_deref(), Some("boolean"));
}

#[tokio::test]
async fn correct_submission_has_test_description() {
    let question = class_question(Options::default());
    let (result, _) = grade(&question, class_job_result(true, Options::default()), "Submission").await;

    let [outcome] = result.test_results.as_slice() else {
        panic!("expected a single test outcome");
    };
    assert_eq!(outcome.description, "Description");
    assert!(outcome.passed);
}

#[tokio::test]
async fn correct_submission_scores_one_for_every_shape() {
    for constructor in [false, true] {
        for use_generics in [false, true] {
            for overloaded_methods in [false, true] {
                let o = Options {
                    allow_public_fields: false,
                    overloaded_methods,
                    use_generics,
                    constructor,
                };
                let (result, _) = grade(&class_question(o), class_job_result(true, o), "Submission").await;

                assert_eq!(result.score, 1.0, "{o:?}");
                assert!(result.errors.is_empty(), "{o:?}: {:?}", result.errors);
            }
        }
    }
}

#[tokio::test]
async fn tests_compilation_failure_is_reported() {
    let question = class_question(Options::default());
    let (result, _) = grade(&question, class_job_result(false, Options::default()), "Submission").await;

    assert_eq!(result.score, 0.0);
    assert!(result.test_results.is_empty());
    let [CodeQuestionError::Compilation(diagnostic)] = result.errors.as_slice() else {
        panic!("expected a compilation diagnostic, got {:?}", result.errors);
    };
    assert_eq!(diagnostic.phase, CompilationPhase::Tests);
    assert_eq!(diagnostic.errors[0].full_error, "Test compilation failure");
}

#[tokio::test]
async fn wrong_output_scores_zero_without_errors() {
    let question = class_question(Options::default());
    let mut job_result = class_job_result(true, Options::default());
    job_result.test_results.as_mut().unwrap()[0].output = "something else".into();

    let (result, _) = grade(&question, job_result, "Submission").await;

    assert_eq!(result.score, 0.0);
    assert!(result.errors.is_empty());
    assert!(!result.test_results[0].passed);
    assert_eq!(result.test_results[0].actual_output.as_deref(), Some("something else"));
}

#[tokio::test]
async fn partial_credit_across_tests() {
    let mut question = class_question(Options::default());
    let mut second = question.tests[0].clone();
    second.name = "test2".into();
    question.tests.push(second);

    // Only test1 is reported; test2 counts as failed.
    let (result, _) = grade(&question, class_job_result(true, Options::default()), "Submission").await;

    assert_eq!(result.score, 0.5);
    assert_eq!(result.test_results.len(), 2);
    assert!(!result.test_results[1].completed);
}

#[tokio::test]
async fn timed_out_job_is_an_error() {
    let question = class_question(Options::default());
    let mut job_result = class_job_result(true, Options::default());
    job_result.status = CodeJobStatus::Timeout;
    job_result.diagnostic_output = Some("killed after 10s".into());

    let runner = MockRunner::replying(job_result);
    let err = ClassQuestionGrader::new(&question, &runner)
        .grade_submission(&CodeSubmission::new("Submission"))
        .await
        .unwrap_err();

    match err {
        GraderError::JobNotCompleted { status, diagnostic } => {
            assert_eq!(status, CodeJobStatus::Timeout);
            assert_eq!(diagnostic.as_deref(), Some("killed after 10s"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn runner_failure_is_propagated() {
    let question = class_question(Options::default());
    let runner = MockRunner::failing_with_status(503);

    let err = ClassQuestionGrader::new(&question, &runner)
        .grade_submission(&CodeSubmission::new("Submission"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GraderError::Runner(code_runner::CodeRunnerError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn result_breaking_availability_rules_is_rejected() {
    let question = class_question(Options::default());
    let mut job_result = class_job_result(true, Options::default());
    job_result.payload = JobPayload::Class(ClassJobPayload {
        class_compilation_result: CompilationResult::succeeded(),
        class_definition: None,
    });

    let runner = MockRunner::replying(job_result);
    let err = ClassQuestionGrader::new(&question, &runner)
        .grade_submission(&CodeSubmission::new("Submission"))
        .await
        .unwrap_err();

    assert!(matches!(err, GraderError::MalformedJobResult(_)));
}
