//! gltrace Core - GL context state model
//!
//! This crate models the state of a traced OpenGL ES context as a typed
//! property tree, for a trace debugger that replays recorded calls into it.
//!
//! # Architecture
//!
//! - [`GlProperty`] - A state tree node (scalar, composite, list or sparse array)
//! - [`Profile`] - GLES1/GLES2 default tree construction
//! - [`StatePath`] - Addressing and mutation of nodes inside a tree
//! - [`StateError`] - Build, bounds, not-found and type errors

pub mod state;

// Re-export the state model
pub use state::{
    CompositeProperty, ErrorCategory, ExportOptions, GlProperty, ListProperty, PathSegment,
    Profile, PropertyKind, ScalarProperty, SparseArrayProperty, StateError, StatePath,
    StateValue, ValueType, build_empty_root, build_es1_state, build_es2_state,
};

// Re-export shared identifiers
pub use gltrace_shared::{GlEnum, StateType};
