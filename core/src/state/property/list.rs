//! List properties: fixed-length homogeneous sequences

use gltrace_shared::StateType;

use super::super::error::StateError;
use super::GlProperty;

/// A homogeneous sequence of properties
///
/// A fixed list is populated at construction with `len` independent clones
/// of its template and never grows or shrinks. The only growable list is the
/// context root from [`ListProperty::growable`], which starts empty and takes
/// whole profile trees through [`ListProperty::push`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListProperty {
    state_type: StateType,
    template: Option<Box<GlProperty>>,
    items: Vec<GlProperty>,
    growable: bool,
}

impl ListProperty {
    /// Fixed list of `len` clones of `template`
    pub fn new(state_type: StateType, template: GlProperty, len: usize) -> Self {
        let items = (0..len).map(|_| template.clone()).collect();
        Self {
            state_type,
            template: Some(Box::new(template)),
            items,
            growable: false,
        }
    }

    /// Empty list without a template that accepts [`push`](Self::push)
    pub fn growable(state_type: StateType) -> Self {
        Self {
            state_type,
            template: None,
            items: Vec::new(),
            growable: true,
        }
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }

    pub fn template(&self) -> Option<&GlProperty> {
        self.template.as_deref()
    }

    pub fn is_growable(&self) -> bool {
        self.growable
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlProperty> {
        self.items.iter()
    }

    /// Element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfBounds`] outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&GlProperty, StateError> {
        let len = self.items.len();
        self.items.get(index).ok_or(StateError::IndexOutOfBounds {
            state_type: self.state_type,
            index,
            len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut GlProperty, StateError> {
        let len = self.items.len();
        let state_type = self.state_type;
        self.items.get_mut(index).ok_or(StateError::IndexOutOfBounds {
            state_type,
            index,
            len,
        })
    }

    /// Append a node to a growable list, returning its index
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotGrowable`] for fixed lists.
    pub fn push(&mut self, node: GlProperty) -> Result<usize, StateError> {
        if !self.growable {
            return Err(StateError::NotGrowable(self.state_type));
        }
        self.items.push(node);
        let index = self.items.len() - 1;
        tracing::trace!("{:?}: appended entry {}", self.state_type, index);
        Ok(index)
    }

    /// Reset every element's leaves to their defaults
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.reset();
        }
    }
}
