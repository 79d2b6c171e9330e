//! Scripted mutations applied to a state tree

use std::fmt;

use anyhow::{Result, bail};

use gltrace_core::{GlProperty, StateError, StatePath};

/// One command-line mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Parse a value for the leaf at a path
    Set { path: String, value: String },
    /// Create a sparse array entry
    Add { path: String, handle: u32 },
    /// Delete a sparse array entry
    Remove { path: String, handle: u32 },
}

impl Mutation {
    /// Apply to `state`; a failure leaves it unchanged
    pub fn apply(&self, state: &mut GlProperty) -> Result<(), StateError> {
        match self {
            Mutation::Set { path, value } => state.parse_value_at(&path.parse()?, value),
            Mutation::Add { path, handle } => {
                state.add_handle(&path.parse()?, *handle)?;
                Ok(())
            }
            Mutation::Remove { path, handle } => {
                let path: StatePath = path.parse()?;
                if state.remove_handle(&path, *handle)?.is_none() {
                    tracing::debug!("{}: handle {} was not live", path, handle);
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Set { path, value } => write!(f, "set {}={}", path, value),
            Mutation::Add { path, handle } => write!(f, "add {}={}", path, handle),
            Mutation::Remove { path, handle } => write!(f, "remove {}={}", path, handle),
        }
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub applied: usize,
    pub skipped: usize,
}

/// Apply mutations in order
///
/// A failing mutation is logged and skipped, or aborts the replay when
/// `strict` is set. Mutations before the failure stay applied either way.
pub fn apply_all(
    state: &mut GlProperty,
    mutations: &[Mutation],
    strict: bool,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for mutation in mutations {
        match mutation.apply(state) {
            Ok(()) => {
                tracing::debug!("applied {}", mutation);
                summary.applied += 1;
            }
            Err(e) if strict => bail!("{}: {} ({:?} error)", mutation, e, e.category()),
            Err(e) => {
                tracing::warn!("skipping {}: {} ({:?} error)", mutation, e, e.category());
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
