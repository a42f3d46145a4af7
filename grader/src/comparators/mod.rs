//! # Comparators
//!
//! Structural comparators, one per question kind that has a structure to check.
//! Each implements [`crate::traits::comparator::StructureComparator`].
//!
//! - [`class_structure_comparator`]: fields, overload sets and method signatures of a class.
//! - [`method_signature_comparator`]: the signature of a single submitted method.

pub mod class_structure_comparator;
pub mod method_signature_comparator;

pub use class_structure_comparator::ClassStructureComparator;
pub use method_signature_comparator::MethodSignatureComparator;
