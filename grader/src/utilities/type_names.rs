//! Type-name normalisation used by the structural comparators.
//!
//! Compiled signatures reported by the runner are usually erased
//! (`ArrayList<Integer>` comes back as `ArrayList`), while instructors write the
//! parameterized names. Every type comparison therefore goes through
//! [`erase_generics`] on both sides.

use serde::{Deserialize, Deserializer};

/// Removes every generic parameterization from a type name.
///
/// Balanced `<...>` segments are dropped wherever they occur, so array and
/// nested forms keep their remaining text: `Map<String, List<Integer>>` becomes
/// `Map` and `ArrayList<Integer>[]` becomes `ArrayList[]`. Surrounding
/// whitespace is trimmed. Erasing an already-erased name returns it unchanged.
pub fn erase_generics(type_name: &str) -> String {
    let mut erased = String::with_capacity(type_name.len());
    let mut depth = 0usize;

    for c in type_name.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => erased.push(c),
            _ => {}
        }
    }

    erased.trim().to_string()
}

/// True when two type names agree after erasure.
pub fn same_type(expected: &str, actual: &str) -> bool {
    erase_generics(expected) == erase_generics(actual)
}

/// True when two parameter lists have the same arity and agree element-wise,
/// in order, after erasure.
pub fn same_parameter_types<E, A>(expected: &[E], actual: &[A]) -> bool
where
    E: AsRef<str>,
    A: AsRef<str>,
{
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(e, a)| same_type(e.as_ref(), a.as_ref()))
}

/// True when two optional return types agree. `None` (a constructor) only
/// matches `None`.
pub fn same_return_type(expected: Option<&str>, actual: Option<&str>) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => same_type(e, a),
        _ => false,
    }
}

/// Splits a comma-joined type list, ignoring commas inside generic arguments.
///
/// `"Map<String, Integer>, int"` yields `["Map<String, Integer>", "int"]`.
/// An empty or all-whitespace string yields an empty list.
pub fn split_type_list(list: &str) -> Vec<String> {
    let mut types = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in list.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                types.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() || !types.is_empty() {
        types.push(current.trim().to_string());
    }
    types
}

/// Joins a type list for display, e.g. `int, int`.
pub fn join_type_list<T: AsRef<str>>(types: &[T]) -> String {
    types
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeListRepr {
    List(Vec<String>),
    Joined(String),
}

/// Accepts a parameter list written either as a JSON array or as a single
/// comma-joined string.
pub fn deserialize_type_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TypeListRepr::deserialize(deserializer)? {
        TypeListRepr::List(types) => types.into_iter().map(|t| t.trim().to_string()).collect(),
        TypeListRepr::Joined(joined) => split_type_list(&joined),
    })
}
