//! GL state model
//!
//! An in-memory snapshot of a traced GL context's state, shaped as a tree of
//! typed properties.
//!
//! # Overview
//!
//! - [`property`] - The four node kinds and the [`GlProperty`] variant type
//! - [`builder`] - Default trees for the GLES1 and GLES2 profiles
//! - [`path`] - Addressing nodes by tag, list index and object handle
//! - [`export`] - Text, JSON and diff views for display
//!
//! # Usage
//!
//! ```rust,ignore
//! use gltrace_core::state::{StatePath, build_empty_root, build_es2_state};
//!
//! let mut root = build_empty_root();
//! root.as_list_mut().unwrap().push(build_es2_state()?)?;
//!
//! let path: StatePath = "[0]/TextureState/Textures".parse()?;
//! root.add_handle(&path, 5)?;
//! ```
//!
//! A tree's shape is fixed once built; only leaf values and sparse array
//! membership change. Failed mutations leave the tree untouched, so a replay
//! driver can skip a bad event and carry on.

pub mod builder;
pub mod error;
pub mod export;
pub mod path;
pub mod property;
mod tests;
pub mod types;

pub use builder::{
    Profile, TEXTURE_UNIT_COUNT, VERTEX_ATTRIB_COUNT, build_empty_root, build_es1_state,
    build_es2_state,
};
pub use error::{ErrorCategory, StateError};
pub use export::{ExportOptions, changed_values, format_tree, to_json};
pub use path::{PathSegment, StatePath};
pub use property::{
    CompositeProperty, GlProperty, ListProperty, ScalarProperty, SparseArrayProperty,
};
pub use types::{DisplayRadix, PropertyKind, StateValue, ValueType};
