//! Errors reported by the normalization passes.
use itertools::Itertools;

use crate::{
    jvm::{method::AnnotationVisibility, references::MethodRef},
    types::{Descriptor, field_type::FieldType},
};

/// An error that prevents a pass from being set up.
/// No class is processed when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The host cannot store the `num_parameters` item of parameter annotation attributes
    /// separately from the annotation list.
    #[error("Annotable parameter counts are not supported by the host class representation")]
    AnnotableParameterCountUnsupported,
}

/// An unexpected shape found in a class.
/// The pass leaves the affected data untouched and carries on with the rest of the class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Anomaly {
    /// A constructor does not start with the synthetic parameters its class implies.
    #[error(
        "Unexpected lack of synthetic parameters: expected [{}] at the start of {method}",
        .expected.iter().map(FieldType::descriptor).join(", ")
    )]
    SyntheticPrefixMismatch {
        /// The constructor.
        method: MethodRef,
        /// The synthetic parameter types the class implies.
        expected: Vec<FieldType>,
    },
    /// A parameter annotation list matches neither the padded nor the source-level parameter count.
    #[error("Unexpected number of {visibility} entries in {method}: {count}")]
    UnexpectedAnnotationCount {
        /// The constructor.
        method: MethodRef,
        /// The attribute holding the list.
        visibility: AnnotationVisibility,
        /// The length of the list.
        count: usize,
    },
}
