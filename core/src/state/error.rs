//! Errors raised while building or mutating a state tree

use gltrace_shared::{GlEnum, StateType};

use super::types::{PropertyKind, ValueType};

/// Broad error classes
///
/// Build errors are defects in a static profile definition. Everything else is
/// reported per attempted mutation, and the failed mutation never applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed profile assembly; construction is aborted
    Build,
    /// Index outside a fixed list, or growth of a fixed-length list
    Bounds,
    /// Unknown tag, absent handle, or a path that does not fit the tree
    NotFound,
    /// Value of the wrong kind or outside an enum domain
    Type,
}

/// Error produced by state tree operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    /// Two direct children of a composite share a tag
    #[error("composite {parent:?} has duplicate child {child:?}")]
    DuplicateChild { parent: StateType, child: StateType },

    /// A declared default does not satisfy its own leaf's constraints
    #[error("default {value} of {state_type:?} is outside its domain")]
    InvalidDefault { state_type: StateType, value: GlEnum },

    /// Fixed list index outside `[0, len)`
    #[error("index {index} out of bounds for {state_type:?} (len {len})")]
    IndexOutOfBounds {
        state_type: StateType,
        index: usize,
        len: usize,
    },

    /// `push` on a list whose length is fixed
    #[error("{0:?} has a fixed length")]
    NotGrowable(StateType),

    /// No live entry for a handle in a sparse array
    #[error("{state_type:?} has no entry for handle {handle}")]
    HandleNotFound { state_type: StateType, handle: u32 },

    /// Composite has no child with the requested tag
    #[error("{parent:?} has no child {child:?}")]
    ChildNotFound { parent: StateType, child: StateType },

    /// Path segment applied to a node of the wrong kind
    #[error("{state_type:?} is a {actual:?} node, expected {expected:?}")]
    KindMismatch {
        state_type: StateType,
        expected: PropertyKind,
        actual: PropertyKind,
    },

    /// Identifier or symbol name that does not exist
    #[error("unknown name '{0}'")]
    UnknownName(String),

    /// Path text that does not follow the path grammar
    #[error("malformed path '{0}'")]
    InvalidPath(String),

    /// Assigned value has the wrong type
    #[error("{state_type:?} holds {expected} values, got {actual}")]
    TypeMismatch {
        state_type: StateType,
        expected: ValueType,
        actual: ValueType,
    },

    /// Enum value outside the leaf's symbol domain
    #[error("{value} is not a valid value for {state_type:?}")]
    OutOfDomain { state_type: StateType, value: GlEnum },

    /// Text that cannot be parsed as the leaf's value type
    #[error("cannot parse '{text}' as {expected} for {state_type:?}")]
    InvalidLiteral {
        state_type: StateType,
        expected: ValueType,
        text: String,
    },
}

impl StateError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            StateError::DuplicateChild { .. } | StateError::InvalidDefault { .. } => {
                ErrorCategory::Build
            }
            StateError::IndexOutOfBounds { .. } | StateError::NotGrowable(_) => {
                ErrorCategory::Bounds
            }
            StateError::HandleNotFound { .. }
            | StateError::ChildNotFound { .. }
            | StateError::KindMismatch { .. }
            | StateError::UnknownName(_)
            | StateError::InvalidPath(_) => ErrorCategory::NotFound,
            StateError::TypeMismatch { .. }
            | StateError::OutOfDomain { .. }
            | StateError::InvalidLiteral { .. } => ErrorCategory::Type,
        }
    }
}
