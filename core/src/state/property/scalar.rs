//! Scalar (leaf) properties

use gltrace_shared::{GlEnum, StateType};

use super::super::error::StateError;
use super::super::types::{DisplayRadix, StateValue, ValueType};

/// A terminal property holding one typed value and its default
///
/// The value type is fixed at construction. Enum leaves additionally carry a
/// symbol domain; assignments outside it are rejected, except for the leaf's
/// own default.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarProperty {
    state_type: StateType,
    value: StateValue,
    default: StateValue,
    radix: DisplayRadix,
    domain: Option<&'static [GlEnum]>,
}

impl ScalarProperty {
    fn with_default(state_type: StateType, default: StateValue) -> Self {
        Self {
            state_type,
            value: default.clone(),
            default,
            radix: DisplayRadix::Decimal,
            domain: None,
        }
    }

    /// Integer leaf shown in decimal
    pub fn integer(state_type: StateType, default: i64) -> Self {
        Self::with_default(state_type, StateValue::Integer(default))
    }

    /// Integer leaf shown in hex (masks)
    pub fn hex_integer(state_type: StateType, default: i64) -> Self {
        Self {
            radix: DisplayRadix::Hex,
            ..Self::integer(state_type, default)
        }
    }

    pub fn float(state_type: StateType, default: f32) -> Self {
        Self::with_default(state_type, StateValue::Float(default))
    }

    pub fn boolean(state_type: StateType, default: bool) -> Self {
        Self::with_default(state_type, StateValue::Boolean(default))
    }

    /// Enum leaf restricted to `domain`
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidDefault`] if `default` is neither in
    /// `domain` nor a numeric alias of one of its members.
    pub fn enumeration(
        state_type: StateType,
        default: GlEnum,
        domain: &'static [GlEnum],
    ) -> Result<Self, StateError> {
        if !default.is_in(domain) && !default.aliases_into(domain) {
            return Err(StateError::InvalidDefault {
                state_type,
                value: default,
            });
        }
        Ok(Self {
            domain: Some(domain),
            ..Self::with_default(state_type, StateValue::Enum(default))
        })
    }

    /// Nullable string leaf
    pub fn string(state_type: StateType, default: Option<&str>) -> Self {
        Self::with_default(state_type, StateValue::String(default.map(str::to_string)))
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }

    /// Current value
    pub fn value(&self) -> &StateValue {
        &self.value
    }

    pub fn default_value(&self) -> &StateValue {
        &self.default
    }

    pub fn value_type(&self) -> ValueType {
        self.default.value_type()
    }

    pub fn radix(&self) -> DisplayRadix {
        self.radix
    }

    /// Symbol domain of an enum leaf
    pub fn domain(&self) -> Option<&'static [GlEnum]> {
        self.domain
    }

    /// Whether the current value equals the default
    ///
    /// Enums compare by numeric value, so `GL_ONE` matches a `GL_LINES` default.
    pub fn is_default(&self) -> bool {
        match (&self.value, &self.default) {
            (StateValue::Enum(value), StateValue::Enum(default)) => value.value() == default.value(),
            (value, default) => value == default,
        }
    }

    /// Assign a new value
    ///
    /// # Errors
    ///
    /// Returns a type error if `value` is of a different kind, or for enum
    /// leaves, outside the domain. The current value is left untouched.
    pub fn set(&mut self, value: impl Into<StateValue>) -> Result<(), StateError> {
        let value = value.into();
        self.check(&value)?;
        self.value = value;
        Ok(())
    }

    fn check(&self, value: &StateValue) -> Result<(), StateError> {
        let expected = self.value_type();
        if value.value_type() != expected {
            return Err(StateError::TypeMismatch {
                state_type: self.state_type,
                expected,
                actual: value.value_type(),
            });
        }
        if let (StateValue::Enum(e), Some(domain)) = (value, self.domain) {
            if !e.is_in(domain) && *value != self.default {
                return Err(StateError::OutOfDomain {
                    state_type: self.state_type,
                    value: *e,
                });
            }
        }
        Ok(())
    }

    /// Restore the default value
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Parse text as a value of this leaf's type
    ///
    /// Integers accept decimal or `0x` hex. Enums accept a `GL_*` name or a
    /// raw number resolved within the domain. `null` is a null string.
    pub fn parse_value(&self, text: &str) -> Result<StateValue, StateError> {
        let text = text.trim();
        let invalid = || StateError::InvalidLiteral {
            state_type: self.state_type,
            expected: self.value_type(),
            text: text.to_string(),
        };

        match self.value_type() {
            ValueType::Integer => parse_integer(text).map(StateValue::Integer).ok_or_else(invalid),
            ValueType::Float => text
                .parse::<f32>()
                .map(StateValue::Float)
                .map_err(|_| invalid()),
            ValueType::Boolean => match text {
                "true" | "GL_TRUE" => Ok(StateValue::Boolean(true)),
                "false" | "GL_FALSE" => Ok(StateValue::Boolean(false)),
                _ => Err(invalid()),
            },
            ValueType::Enum => {
                if let Some(e) = GlEnum::from_name(text) {
                    return Ok(StateValue::Enum(e));
                }
                let raw = parse_integer(text)
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(invalid)?;
                let domain = self.domain.unwrap_or(GlEnum::ALL);
                GlEnum::from_value_in(domain, raw)
                    .map(StateValue::Enum)
                    .ok_or_else(invalid)
            }
            ValueType::String => Ok(match text {
                "null" => StateValue::String(None),
                s => StateValue::String(Some(s.to_string())),
            }),
        }
    }

    /// Parse and assign in one step; a parse or validation failure is a no-op
    pub fn parse_and_set(&mut self, text: &str) -> Result<(), StateError> {
        let value = self.parse_value(text)?;
        self.set(value)
    }

    /// Current value formatted for display
    pub fn display_value(&self) -> String {
        self.value.format(self.radix)
    }

    /// Default value formatted for display
    pub fn display_default(&self) -> String {
        self.default.format(self.radix)
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => {
            i64::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if digits.starts_with(|c: char| c.is_ascii_digit()) => digits.parse::<i64>().ok()?,
        None => return None,
    };
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}
