//! Sparse array properties keyed by driver-assigned object names

use std::collections::BTreeMap;

use gltrace_shared::StateType;

use super::super::error::StateError;
use super::GlProperty;

/// A growable mapping from object handle to property
///
/// Models GL object names (textures, programs, shaders) which are assigned
/// by the driver and are neither contiguous nor bounded. Entries exist only
/// once added; a new entry is an independent clone of the template.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseArrayProperty {
    state_type: StateType,
    template: Box<GlProperty>,
    entries: BTreeMap<u32, GlProperty>,
}

impl SparseArrayProperty {
    /// Create an empty sparse array
    pub fn new(state_type: StateType, template: GlProperty) -> Self {
        Self {
            state_type,
            template: Box::new(template),
            entries: BTreeMap::new(),
        }
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }

    /// Prototype cloned for each new entry
    pub fn template(&self) -> &GlProperty {
        &self.template
    }

    /// Entry for `handle`, creating it from the template if absent
    ///
    /// Adding a live handle returns the existing entry unchanged.
    pub fn add(&mut self, handle: u32) -> &mut GlProperty {
        let state_type = self.state_type;
        let template = &self.template;
        self.entries.entry(handle).or_insert_with(|| {
            tracing::trace!("{:?}: created entry {}", state_type, handle);
            (**template).clone()
        })
    }

    /// Delete the entry for `handle`, returning it if it was live
    pub fn remove(&mut self, handle: u32) -> Option<GlProperty> {
        let removed = self.entries.remove(&handle);
        if removed.is_some() {
            tracing::trace!("{:?}: removed entry {}", self.state_type, handle);
        }
        removed
    }

    pub fn contains(&self, handle: u32) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Entry for a live handle
    ///
    /// # Errors
    ///
    /// Returns [`StateError::HandleNotFound`] if the handle was never added or
    /// has been removed.
    pub fn get(&self, handle: u32) -> Result<&GlProperty, StateError> {
        self.entries.get(&handle).ok_or(StateError::HandleNotFound {
            state_type: self.state_type,
            handle,
        })
    }

    pub fn get_mut(&mut self, handle: u32) -> Result<&mut GlProperty, StateError> {
        let state_type = self.state_type;
        self.entries
            .get_mut(&handle)
            .ok_or(StateError::HandleNotFound { state_type, handle })
    }

    /// Live handles in ascending order
    pub fn handles(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// `(handle, entry)` pairs in ascending handle order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &GlProperty)> + '_ {
        self.entries.iter().map(|(handle, entry)| (*handle, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset the leaves of every live entry; membership is unchanged
    pub fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.reset();
        }
    }
}
