//! A comparator that checks a compiled class against a class question's
//! structural contract.
//!
//! Checks run in a fixed order and errors come out in the same order:
//!
//! 1. A class that did not compile yields a single [`MissingRequiredClassError`]
//!    and nothing else.
//! 2. When public fields are forbidden, every public field yields a
//!    [`FieldVisibilityError`].
//! 3. Required methods are grouped into overload sets by name, in order of first
//!    declaration. A set whose size differs from the compiled set of that name
//!    yields one [`MethodCountError`] and no signature checks. Otherwise each
//!    expected overload is paired with a compiled one and any disagreement yields
//!    one [`MethodDefinitionError`].
//!
//! All type names are compared after generic erasure.

use crate::diagnostics::{
    FieldVisibilityError, MethodCountError, MethodDefinitionError, MethodProperty,
    MissingRequiredClassError, StructuralError,
};
use crate::questions::{ClassQuestion, RequiredMethod};
use crate::traits::comparator::StructureComparator;
use crate::utilities::type_names::{same_parameter_types, same_return_type};
use code_runner::job_result::{ClassDefinition, ClassJobPayload, MethodDefinition};

/// Compares the runner's [`ClassDefinition`] with a [`ClassQuestion`].
pub struct ClassStructureComparator;

impl StructureComparator for ClassStructureComparator {
    type Question = ClassQuestion;
    type Payload = ClassJobPayload;
    type Error = StructuralError;

    fn compare(&self, question: &ClassQuestion, payload: &ClassJobPayload) -> Vec<StructuralError> {
        let definition = match &payload.class_definition {
            Some(definition) if payload.class_compilation_result.success => definition,
            _ => {
                return vec![StructuralError::MissingRequiredClass(MissingRequiredClassError {
                    required_class_name: question.class_name.clone(),
                })];
            }
        };

        let mut errors = Vec::new();

        if !question.allow_public_fields {
            errors.extend(
                definition
                    .fields
                    .iter()
                    .filter(|f| f.is_public)
                    .map(|f| {
                        StructuralError::FieldVisibility(FieldVisibilityError {
                            class_name: question.class_name.clone(),
                            field_name: f.name.clone(),
                        })
                    }),
            );
        }

        for (name, expected) in expected_overload_sets(question) {
            let actual = actual_overload_set(definition, name);

            if actual.len() != expected.len() {
                errors.push(StructuralError::MethodCount(MethodCountError {
                    class_name: question.class_name.clone(),
                    expected_method_name: name.to_string(),
                    expected_count: expected.len(),
                    expected_static: expected[0].is_static,
                }));
                continue;
            }

            for (required, compiled) in pair_overloads(&expected, &actual) {
                let mismatches = mismatched_properties(required, compiled);
                if !mismatches.is_empty() {
                    errors.push(StructuralError::MethodDefinition(MethodDefinitionError {
                        class_name: question.class_name.clone(),
                        expected_method_name: name.to_string(),
                        expected_public: required.is_public,
                        expected_static: required.is_static,
                        expected_param_types: required.param_types_display(),
                        expected_return_type: required.return_type.clone(),
                        mismatches,
                    }));
                }
            }
        }

        errors
    }
}

/// Required methods grouped by match name, in order of first declaration.
/// Declaration order is kept within each set.
fn expected_overload_sets(question: &ClassQuestion) -> Vec<(&str, Vec<&RequiredMethod>)> {
    let mut sets: Vec<(&str, Vec<&RequiredMethod>)> = Vec::new();

    for method in &question.required_methods {
        let name = method.match_name(&question.class_name);
        match sets.iter_mut().find(|(n, _)| *n == name) {
            Some((_, set)) => set.push(method),
            None => sets.push((name, vec![method])),
        }
    }

    sets
}

fn actual_overload_set<'a>(definition: &'a ClassDefinition, name: &str) -> Vec<&'a MethodDefinition> {
    definition.methods.iter().filter(|m| m.name == name).collect()
}

/// Pairs each expected overload with a distinct compiled one.
///
/// Overloads whose erased parameter lists match are paired first. Each expected
/// overload left over is paired with the first remaining compiled overload of the
/// same arity, or failing that the first remaining one. Pairs come back in the
/// expected set's declaration order.
fn pair_overloads<'e, 'a>(
    expected: &[&'e RequiredMethod],
    actual: &[&'a MethodDefinition],
) -> Vec<(&'e RequiredMethod, &'a MethodDefinition)> {
    let mut used = vec![false; actual.len()];
    let mut pairing: Vec<Option<usize>> = vec![None; expected.len()];

    for (slot, required) in expected.iter().enumerate() {
        let found = actual.iter().enumerate().position(|(i, compiled)| {
            !used[i] && same_parameter_types(&required.param_types, &compiled.parameter_types)
        });
        if let Some(i) = found {
            used[i] = true;
            pairing[slot] = Some(i);
        }
    }

    for (slot, required) in expected.iter().enumerate() {
        if pairing[slot].is_some() {
            continue;
        }
        let arity = required.param_types.len();
        let found = (0..actual.len())
            .find(|&i| !used[i] && actual[i].parameter_types.len() == arity)
            .or_else(|| (0..actual.len()).find(|&i| !used[i]));
        if let Some(i) = found {
            used[i] = true;
            pairing[slot] = Some(i);
        }
    }

    expected
        .iter()
        .zip(pairing)
        .filter_map(|(required, index)| index.map(|i| (*required, actual[i])))
        .collect()
}

/// Every property on which `compiled` disagrees with `required`, after erasure.
fn mismatched_properties(required: &RequiredMethod, compiled: &MethodDefinition) -> Vec<MethodProperty> {
    let mut mismatches = Vec::new();

    if required.is_public != compiled.is_public {
        mismatches.push(MethodProperty::Visibility);
    }
    if required.is_static != compiled.is_static {
        mismatches.push(MethodProperty::Staticness);
    }
    if !same_parameter_types(&required.param_types, &compiled.parameter_types) {
        mismatches.push(MethodProperty::ParameterTypes);
    }
    if !same_return_type(required.return_type.as_deref(), compiled.return_type.as_deref()) {
        mismatches.push(MethodProperty::ReturnType);
    }

    mismatches
}
