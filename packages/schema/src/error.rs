//! Error types for schema dispatch.

use crate::element::ElementKind;
use lookedit_values::{ValueFormatError, ValueKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A kind name outside the closed element enumeration. Contract-level:
    /// well-formed schema data never produces this.
    #[error("unknown Falagard element kind: {0:?}")]
    UnknownElementKind(String),

    /// An attribute name not in the kind's declared list. Contract-level.
    #[error("{kind} has no attribute named {attribute:?}")]
    UnknownAttribute {
        kind: ElementKind,
        attribute: String,
    },

    /// Rename/type-change write path; requires element recreation, which is
    /// outside in-place editing.
    #[error("changing {attribute:?} of a {kind} requires recreating the element")]
    UnsupportedMutation {
        kind: ElementKind,
        attribute: String,
    },

    #[error("{kind}.{attribute} expects a {expected} value, got {got}")]
    TypeMismatch {
        kind: ElementKind,
        attribute: String,
        expected: ValueKind,
        got: ValueKind,
    },

    #[error(transparent)]
    Value(#[from] ValueFormatError),
}
