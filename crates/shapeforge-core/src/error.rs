//! Editor error type.
//!
//! None of these are fatal: the canvas absorbs them as no-ops, logs them,
//! and surfaces the user-facing ones as advisories.

use crate::shapes::{ShapeId, ShapeKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Shape {id} would leave the drawing area")]
    OutOfBounds { id: ShapeId },
    #[error("{kind} {id} would fall below its minimum size")]
    BelowMinimumSize { id: ShapeId, kind: ShapeKind },
    #[error("New {kind} would exceed the drawing area")]
    CreationOutOfBounds { kind: ShapeKind },
    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
