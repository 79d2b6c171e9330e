//! State property nodes
//!
//! A state tree is built from four node kinds: scalar leaves, composites,
//! fixed lists and sparse arrays. [`GlProperty`] is the closed set of them;
//! every operation matches on it exhaustively.
//!
//! Nodes own their descendants outright. `Clone` is therefore a deep copy,
//! which is what list population and sparse `add` rely on: no clone ever
//! shares mutable storage with its template or its siblings.

mod composite;
mod list;
mod scalar;
mod sparse;

pub use composite::CompositeProperty;
pub use list::ListProperty;
pub use scalar::ScalarProperty;
pub use sparse::SparseArrayProperty;

use gltrace_shared::StateType;

use super::path::{PathSegment, StatePath};
use super::types::PropertyKind;

/// A node in a GL state tree
#[derive(Debug, Clone, PartialEq)]
pub enum GlProperty {
    Scalar(ScalarProperty),
    Composite(CompositeProperty),
    List(ListProperty),
    SparseArray(SparseArrayProperty),
}

impl GlProperty {
    /// Identifier tag of this node
    pub fn state_type(&self) -> StateType {
        match self {
            GlProperty::Scalar(p) => p.state_type(),
            GlProperty::Composite(p) => p.state_type(),
            GlProperty::List(p) => p.state_type(),
            GlProperty::SparseArray(p) => p.state_type(),
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            GlProperty::Scalar(_) => PropertyKind::Scalar,
            GlProperty::Composite(_) => PropertyKind::Composite,
            GlProperty::List(_) => PropertyKind::List,
            GlProperty::SparseArray(_) => PropertyKind::SparseArray,
        }
    }

    /// Restore every descendant leaf to its default
    ///
    /// Sparse array membership is not affected.
    pub fn reset(&mut self) {
        match self {
            GlProperty::Scalar(p) => p.reset(),
            GlProperty::Composite(p) => p.reset(),
            GlProperty::List(p) => p.reset(),
            GlProperty::SparseArray(p) => p.reset(),
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarProperty> {
        match self {
            GlProperty::Scalar(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_scalar_mut(&mut self) -> Option<&mut ScalarProperty> {
        match self {
            GlProperty::Scalar(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeProperty> {
        match self {
            GlProperty::Composite(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeProperty> {
        match self {
            GlProperty::Composite(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListProperty> {
        match self {
            GlProperty::List(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListProperty> {
        match self {
            GlProperty::List(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&SparseArrayProperty> {
        match self {
            GlProperty::SparseArray(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_sparse_mut(&mut self) -> Option<&mut SparseArrayProperty> {
        match self {
            GlProperty::SparseArray(p) => Some(p),
            _ => None,
        }
    }

    /// Direct children keyed by the path segment that reaches them
    ///
    /// Composites yield fields in declaration order, lists yield indices,
    /// sparse arrays yield handles in ascending order. Leaves yield nothing.
    pub fn children(&self) -> Box<dyn Iterator<Item = (PathSegment, &GlProperty)> + '_> {
        match self {
            GlProperty::Scalar(_) => Box::new(std::iter::empty()),
            GlProperty::Composite(p) => Box::new(
                p.children()
                    .iter()
                    .map(|c| (PathSegment::Field(c.state_type()), c)),
            ),
            GlProperty::List(p) => Box::new(
                p.iter()
                    .enumerate()
                    .map(|(i, c)| (PathSegment::Index(i), c)),
            ),
            GlProperty::SparseArray(p) => {
                Box::new(p.iter().map(|(h, c)| (PathSegment::Handle(h), c)))
            }
        }
    }

    /// Depth-first, pre-order traversal
    ///
    /// The visitor sees each node with its path relative to `self` (the
    /// starting node has the empty path).
    pub fn walk<F>(&self, visitor: &mut F)
    where
        F: FnMut(&StatePath, &GlProperty),
    {
        let mut path = StatePath::new();
        self.walk_inner(&mut path, visitor);
    }

    fn walk_inner<F>(&self, path: &mut StatePath, visitor: &mut F)
    where
        F: FnMut(&StatePath, &GlProperty),
    {
        visitor(path, self);
        for (segment, child) in self.children() {
            path.push(segment);
            child.walk_inner(path, visitor);
            path.pop();
        }
    }

    /// First node carrying `state_type`, searching through composites only
    ///
    /// List and sparse elements are reached through explicit paths instead.
    pub fn find(&self, state_type: StateType) -> Option<&GlProperty> {
        if self.state_type() == state_type {
            return Some(self);
        }
        match self {
            GlProperty::Composite(p) => p.children().iter().find_map(|c| c.find(state_type)),
            GlProperty::Scalar(_) | GlProperty::List(_) | GlProperty::SparseArray(_) => None,
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }
}

impl From<ScalarProperty> for GlProperty {
    fn from(p: ScalarProperty) -> Self {
        GlProperty::Scalar(p)
    }
}

impl From<CompositeProperty> for GlProperty {
    fn from(p: CompositeProperty) -> Self {
        GlProperty::Composite(p)
    }
}

impl From<ListProperty> for GlProperty {
    fn from(p: ListProperty) -> Self {
        GlProperty::List(p)
    }
}

impl From<SparseArrayProperty> for GlProperty {
    fn from(p: SparseArrayProperty) -> Self {
        GlProperty::SparseArray(p)
    }
}
