//! Scalar value types for GL state leaves
//!
//! Core types for the values held by leaf properties.

use std::fmt;

use serde::{Deserialize, Serialize};

use gltrace_shared::GlEnum;

/// Value type identifier for scalar properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Integer,
    Float,
    Boolean,
    Enum,
    String,
}

impl ValueType {
    /// Get a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::Enum => "enum",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// How an integer leaf is presented. Never affects comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayRadix {
    #[default]
    Decimal,
    Hex,
}

/// Node kind classification exposed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Terminal value
    Scalar,
    /// Fixed, heterogeneous, uniquely tagged children
    Composite,
    /// Fixed-length homogeneous sequence
    List,
    /// Growable handle-indexed collection
    SparseArray,
}

/// Runtime value of a scalar property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StateValue {
    Integer(i64),
    Float(f32),
    Boolean(bool),
    Enum(GlEnum),
    /// Nullable string (e.g. shader source, texture image reference)
    String(Option<String>),
}

impl StateValue {
    /// Get the value type for this value
    pub fn value_type(&self) -> ValueType {
        match self {
            StateValue::Integer(_) => ValueType::Integer,
            StateValue::Float(_) => ValueType::Float,
            StateValue::Boolean(_) => ValueType::Boolean,
            StateValue::Enum(_) => ValueType::Enum,
            StateValue::String(_) => ValueType::String,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StateValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            StateValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<GlEnum> {
        match self {
            StateValue::Enum(v) => Some(*v),
            _ => None,
        }
    }

    /// String contents; `None` for a null string and for non-string values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::String(v) => v.as_deref(),
            _ => None,
        }
    }

    /// Format for display
    ///
    /// Hex integers print their low 32 bits, matching how GL masks are read.
    pub fn format(&self, radix: DisplayRadix) -> String {
        match (self, radix) {
            (StateValue::Integer(v), DisplayRadix::Hex) => format!("{:#010x}", *v as u32),
            (StateValue::Integer(v), DisplayRadix::Decimal) => v.to_string(),
            (StateValue::Float(v), _) => format!("{v:?}"),
            (StateValue::Boolean(v), _) => v.to_string(),
            (StateValue::Enum(v), _) => v.name().to_string(),
            (StateValue::String(Some(s)), _) => s.clone(),
            (StateValue::String(None), _) => "null".to_string(),
        }
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        StateValue::Integer(v)
    }
}

impl From<i32> for StateValue {
    fn from(v: i32) -> Self {
        StateValue::Integer(v.into())
    }
}

impl From<u32> for StateValue {
    fn from(v: u32) -> Self {
        StateValue::Integer(v.into())
    }
}

impl From<f32> for StateValue {
    fn from(v: f32) -> Self {
        StateValue::Float(v)
    }
}

impl From<bool> for StateValue {
    fn from(v: bool) -> Self {
        StateValue::Boolean(v)
    }
}

impl From<GlEnum> for StateValue {
    fn from(v: GlEnum) -> Self {
        StateValue::Enum(v)
    }
}

impl From<&str> for StateValue {
    fn from(v: &str) -> Self {
        StateValue::String(Some(v.to_string()))
    }
}

impl From<String> for StateValue {
    fn from(v: String) -> Self {
        StateValue::String(Some(v))
    }
}
