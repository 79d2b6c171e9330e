//! Shared types for gltrace.
//!
//! Identifier tags and GL symbols used by the state model and by anything that
//! decodes trace events into state mutations.

pub mod gl_enum;
pub mod state_type;

pub use gl_enum::{GlEnum, domains};
pub use state_type::StateType;
