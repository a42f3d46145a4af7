use crate::diagnostics::Diagnostic;

/// StructureComparator is a strategy trait for checking a compiled submission
/// against the contract of one question kind.
///
/// Implementations are pure: the same question and payload always yield the
/// same errors, in the same order.
pub trait StructureComparator: Send + Sync {
    /// The contract being checked against.
    type Question;
    /// The kind-specific part of the runner's result.
    type Payload;
    /// The diagnostics this comparator emits.
    type Error: Diagnostic;

    /// Compare the compiled structure in `payload` with `question`.
    ///
    /// - `question`: the instructor's contract.
    /// - `payload`: what the runner reported for the submission.
    ///
    /// Returns every mismatch found. An empty list means the structure is correct.
    fn compare(&self, question: &Self::Question, payload: &Self::Payload) -> Vec<Self::Error>;
}
