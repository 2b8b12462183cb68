//! Error types for path-based value access.

use weft_core::{Kind, Shape};

use crate::PathToken;

/// Error returned when navigating a value along a [`Path`](crate::Path), or
/// when reading or writing the [`Location`](crate::Location) it leads to.
///
/// Each variant captures enough context for a caller to produce a meaningful
/// diagnostic without re-walking the path.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum PathAccessError {
    /// The token's kind doesn't apply to the container.
    ///
    /// For example, a string token on a list, or an integer token on a struct.
    WrongTokenKind {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The kind of the offending token.
        token: Kind,
        /// The kind of the container the token was applied to.
        container: Kind,
    },

    /// A sequence index is negative or past the end.
    IndexOutOfBounds {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The index that was requested.
        index: i128,
        /// The number of available elements.
        len: usize,
    },

    /// The token's type cannot be used as a key of this map.
    KeyTypeMismatch {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The shape of the token, `None` for a nil token.
        token: Option<&'static Shape>,
        /// The map's key shape.
        expected: &'static Shape,
    },

    /// The map has no entry for the key.
    MissingKey {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The key that was looked up.
        key: PathToken,
    },

    /// The struct has no field by that name.
    NoSuchField {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The struct's shape.
        shape: &'static Shape,
        /// The requested field name.
        field: String,
    },

    /// No token can be applied to a value of this kind.
    NotNavigable {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The kind of the value.
        kind: Kind,
    },

    /// An empty pointer needed a pointee but its slot cannot be written.
    NilPointerNotSettable {
        /// Index of this step in the path (0-based).
        step_index: usize,
        /// The pointer's shape.
        shape: &'static Shape,
    },

    /// The location was reached through a private field and cannot be read.
    NotReadable,

    /// The location cannot be written.
    NotSettable,

    /// The value doesn't fit the location's declared shape.
    NotAssignable {
        /// The value's shape, `None` for nil.
        value: Option<&'static Shape>,
        /// The location's shape, `None` if it holds nil.
        slot: Option<&'static Shape>,
    },
}

fn shape_name(shape: Option<&'static Shape>) -> &'static str {
    shape.map_or("nil", |shape| shape.type_identifier)
}

impl core::fmt::Display for PathAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathAccessError::WrongTokenKind {
                step_index,
                token,
                container,
            } => {
                write!(
                    f,
                    "step {step_index}: a {token} token does not apply to a {container}"
                )
            }
            PathAccessError::IndexOutOfBounds {
                step_index,
                index,
                len,
            } => {
                write!(
                    f,
                    "step {step_index}: index {index} out of bounds (has {len})"
                )
            }
            PathAccessError::KeyTypeMismatch {
                step_index,
                token,
                expected,
            } => {
                write!(
                    f,
                    "step {step_index}: key of type {} is not assignable to {expected}",
                    shape_name(*token)
                )
            }
            PathAccessError::MissingKey { step_index, key } => {
                write!(f, "step {step_index}: no entry for key {key}")
            }
            PathAccessError::NoSuchField {
                step_index,
                shape,
                field,
            } => {
                write!(f, "step {step_index}: {shape} has no field `{field}`")
            }
            PathAccessError::NotNavigable { step_index, kind } => {
                write!(f, "step {step_index}: cannot navigate into a {kind}")
            }
            PathAccessError::NilPointerNotSettable { step_index, shape } => {
                write!(
                    f,
                    "step {step_index}: {shape} is nil and cannot be allocated in place"
                )
            }
            PathAccessError::NotReadable => {
                write!(f, "location was reached through a private field")
            }
            PathAccessError::NotSettable => write!(f, "location cannot be written"),
            PathAccessError::NotAssignable { value, slot } => {
                write!(
                    f,
                    "value of type {} is not assignable to {}",
                    shape_name(*value),
                    shape_name(*slot)
                )
            }
        }
    }
}

impl core::error::Error for PathAccessError {}
