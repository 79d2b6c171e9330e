//! Composite properties: a fixed set of uniquely tagged children

use hashbrown::HashSet;

use gltrace_shared::StateType;

use super::super::error::StateError;
use super::GlProperty;

/// A fixed, ordered, heterogeneous group of child properties
///
/// Children are fixed at construction and their tags are pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeProperty {
    state_type: StateType,
    children: Vec<GlProperty>,
}

impl CompositeProperty {
    /// Create a composite from its ordered children
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateChild`] if two children share a tag.
    pub fn new(state_type: StateType, children: Vec<GlProperty>) -> Result<Self, StateError> {
        let mut seen = HashSet::with_capacity(children.len());
        for child in &children {
            if !seen.insert(child.state_type()) {
                return Err(StateError::DuplicateChild {
                    parent: state_type,
                    child: child.state_type(),
                });
            }
        }
        Ok(Self {
            state_type,
            children,
        })
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }

    /// Ordered children
    pub fn children(&self) -> &[GlProperty] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child with the given tag, if any
    pub fn get(&self, state_type: StateType) -> Option<&GlProperty> {
        self.children.iter().find(|c| c.state_type() == state_type)
    }

    /// Child with the given tag
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ChildNotFound`] if no direct child has that tag.
    pub fn lookup(&self, state_type: StateType) -> Result<&GlProperty, StateError> {
        self.get(state_type).ok_or(StateError::ChildNotFound {
            parent: self.state_type,
            child: state_type,
        })
    }

    /// Mutable child with the given tag
    pub fn lookup_mut(&mut self, state_type: StateType) -> Result<&mut GlProperty, StateError> {
        let parent = self.state_type;
        self.children
            .iter_mut()
            .find(|c| c.state_type() == state_type)
            .ok_or(StateError::ChildNotFound {
                parent,
                child: state_type,
            })
    }

    /// Reset every descendant leaf to its default
    pub fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
    }
}
