//! Addressing nodes inside a state tree
//!
//! A [`StatePath`] is a sequence of segments walked from some starting node:
//! a field tag selects a composite child, an index selects a fixed-list
//! element and a handle selects a sparse-array entry.
//!
//! Text form: fields are identifier names separated by `/`, an index is
//! appended as `[i]` and a handle as `#h`:
//!
//! ```text
//! TextureState/Textures#5/TextureMinFilter
//! VertexArrayData/VertexAttribArray[3]/VertexAttribArrayEnabled
//! [0]/FramebufferState/FramebufferBinding
//! ```

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use gltrace_shared::StateType;

use super::error::StateError;
use super::property::GlProperty;
use super::types::{PropertyKind, StateValue};

/// One step of a [`StatePath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Composite child by tag
    Field(StateType),
    /// Fixed list element by position
    Index(usize),
    /// Sparse array entry by object handle
    Handle(u32),
}

impl PathSegment {
    /// Node kind this segment applies to
    pub fn target_kind(&self) -> PropertyKind {
        match self {
            PathSegment::Field(_) => PropertyKind::Composite,
            PathSegment::Index(_) => PropertyKind::List,
            PathSegment::Handle(_) => PropertyKind::SparseArray,
        }
    }
}

/// Location of a node relative to some starting node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StatePath {
    segments: SmallVec<[PathSegment; 8]>,
}

impl StatePath {
    /// Empty path (the starting node itself)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, state_type: StateType) -> Self {
        self.segments.push(PathSegment::Field(state_type));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    pub fn handle(mut self, handle: u32) -> Self {
        self.segments.push(PathSegment::Handle(handle));
        self
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Tag of the last field segment, if any
    pub fn last_field(&self) -> Option<StateType> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::Field(t) => Some(*t),
            PathSegment::Index(_) | PathSegment::Handle(_) => None,
        })
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(t) => {
                    if i > 0 {
                        f.write_str("/")?;
                    }
                    f.write_str(t.name())?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Handle(handle) => write!(f, "#{handle}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for StatePath {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = StatePath::new();
        if s.is_empty() {
            return Ok(path);
        }

        for part in s.split('/') {
            let split = part.find(['[', '#']).unwrap_or(part.len());
            let (name, mut rest) = part.split_at(split);

            if !name.is_empty() {
                let state_type = StateType::from_name(name)
                    .ok_or_else(|| StateError::UnknownName(name.to_string()))?;
                path.push(PathSegment::Field(state_type));
            } else if rest.is_empty() {
                return Err(StateError::InvalidPath(s.to_string()));
            }

            while !rest.is_empty() {
                if let Some(tail) = rest.strip_prefix('[') {
                    let end = tail
                        .find(']')
                        .ok_or_else(|| StateError::InvalidPath(s.to_string()))?;
                    let index = tail[..end]
                        .parse::<usize>()
                        .map_err(|_| StateError::InvalidPath(s.to_string()))?;
                    path.push(PathSegment::Index(index));
                    rest = &tail[end + 1..];
                } else if let Some(tail) = rest.strip_prefix('#') {
                    let end = tail.find(['[', '#']).unwrap_or(tail.len());
                    let handle = tail[..end]
                        .parse::<u32>()
                        .map_err(|_| StateError::InvalidPath(s.to_string()))?;
                    path.push(PathSegment::Handle(handle));
                    rest = &tail[end..];
                } else {
                    return Err(StateError::InvalidPath(s.to_string()));
                }
            }
        }

        Ok(path)
    }
}

fn step<'a>(node: &'a GlProperty, segment: &PathSegment) -> Result<&'a GlProperty, StateError> {
    match (segment, node) {
        (PathSegment::Field(t), GlProperty::Composite(p)) => p.lookup(*t),
        (PathSegment::Index(i), GlProperty::List(p)) => p.get(*i),
        (PathSegment::Handle(h), GlProperty::SparseArray(p)) => p.get(*h),
        (segment, node) => Err(kind_mismatch(node, segment.target_kind())),
    }
}

fn step_mut<'a>(
    node: &'a mut GlProperty,
    segment: &PathSegment,
) -> Result<&'a mut GlProperty, StateError> {
    match (segment, node) {
        (PathSegment::Field(t), GlProperty::Composite(p)) => p.lookup_mut(*t),
        (PathSegment::Index(i), GlProperty::List(p)) => p.get_mut(*i),
        (PathSegment::Handle(h), GlProperty::SparseArray(p)) => p.get_mut(*h),
        (segment, node) => Err(kind_mismatch(node, segment.target_kind())),
    }
}

fn kind_mismatch(node: &GlProperty, expected: PropertyKind) -> StateError {
    StateError::KindMismatch {
        state_type: node.state_type(),
        expected,
        actual: node.kind(),
    }
}

impl GlProperty {
    /// Node at `path` relative to `self`
    pub fn resolve(&self, path: &StatePath) -> Result<&GlProperty, StateError> {
        path.segments().iter().try_fold(self, step)
    }

    /// Mutable node at `path` relative to `self`
    pub fn resolve_mut(&mut self, path: &StatePath) -> Result<&mut GlProperty, StateError> {
        let mut node = self;
        for segment in path.segments() {
            node = step_mut(node, segment)?;
        }
        Ok(node)
    }

    /// Assign the leaf at `path`
    ///
    /// Resolution and validation happen before anything is written, so a
    /// failure leaves the tree untouched.
    pub fn set_value(
        &mut self,
        path: &StatePath,
        value: impl Into<StateValue>,
    ) -> Result<(), StateError> {
        match self.resolve_mut(path)? {
            GlProperty::Scalar(p) => p.set(value),
            other => Err(kind_mismatch(other, PropertyKind::Scalar)),
        }
    }

    /// Parse `text` for the leaf at `path` and assign it
    pub fn parse_value_at(&mut self, path: &StatePath, text: &str) -> Result<(), StateError> {
        match self.resolve_mut(path)? {
            GlProperty::Scalar(p) => p.parse_and_set(text),
            other => Err(kind_mismatch(other, PropertyKind::Scalar)),
        }
    }

    /// Add `handle` to the sparse array at `path`
    pub fn add_handle(
        &mut self,
        path: &StatePath,
        handle: u32,
    ) -> Result<&mut GlProperty, StateError> {
        match self.resolve_mut(path)? {
            GlProperty::SparseArray(p) => Ok(p.add(handle)),
            other => Err(kind_mismatch(other, PropertyKind::SparseArray)),
        }
    }

    /// Remove `handle` from the sparse array at `path`
    pub fn remove_handle(
        &mut self,
        path: &StatePath,
        handle: u32,
    ) -> Result<Option<GlProperty>, StateError> {
        match self.resolve_mut(path)? {
            GlProperty::SparseArray(p) => Ok(p.remove(handle)),
            other => Err(kind_mismatch(other, PropertyKind::SparseArray)),
        }
    }

    /// Reset the subtree at `path`
    pub fn reset_at(&mut self, path: &StatePath) -> Result<(), StateError> {
        self.resolve_mut(path)?.reset();
        Ok(())
    }
}
