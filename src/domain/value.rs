// ============================================================================
// Comparable Values
// Tagged union of everything a caller can hand to the comparator
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Number
// ============================================================================

/// A numeric operand.
///
/// Only `Long` is compared as an integer. Every other variant, including the
/// narrower integer types, is compared through its `f64` value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Long(i64),
    Int(i32),
    Short(i16),
    Byte(i8),
    Double(f64),
    Float(f32),
    Decimal(Decimal),
}

/// Representation that selects the comparison path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Repr {
    Integral(i64),
    Fractional(f64),
}

impl Number {
    /// True when the value takes the 64-bit integer path.
    #[inline]
    pub const fn is_integral(&self) -> bool {
        matches!(self, Number::Long(_))
    }

    /// Double-precision value. Wide `Long`s and `Decimal`s may round.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Number::Long(v) => v as f64,
            Number::Int(v) => f64::from(v),
            Number::Short(v) => f64::from(v),
            Number::Byte(v) => f64::from(v),
            Number::Double(v) => v,
            Number::Float(v) => f64::from(v),
            Number::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Name of the underlying type, as reported in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Number::Long(_) => "i64",
            Number::Int(_) => "i32",
            Number::Short(_) => "i16",
            Number::Byte(_) => "i8",
            Number::Double(_) => "f64",
            Number::Float(_) => "f32",
            Number::Decimal(_) => "Decimal",
        }
    }

    #[inline]
    pub(crate) fn repr(&self) -> Repr {
        match *self {
            Number::Long(v) => Repr::Integral(v),
            _ => Repr::Fractional(self.to_f64()),
        }
    }
}

// ============================================================================
// Value
// ============================================================================

/// Any operand a caller may pass to `NumberComparator::compare`.
///
/// `Null` is the absent value. The non-numeric variants exist so that mistyped
/// input can be reported instead of silently coerced.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    #[default]
    Null,
    Long(i64),
    Int(i32),
    Short(i16),
    Byte(i8),
    Double(f64),
    Float(f32),
    Decimal(Decimal),
    Bool(bool),
    Char(char),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// The numeric view of this value, or `None` for null and non-numbers.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Long(v) => Some(Number::Long(v)),
            Value::Int(v) => Some(Number::Int(v)),
            Value::Short(v) => Some(Number::Short(v)),
            Value::Byte(v) => Some(Number::Byte(v)),
            Value::Double(v) => Some(Number::Double(v)),
            Value::Float(v) => Some(Number::Float(v)),
            Value::Decimal(v) => Some(Number::Decimal(v)),
            Value::Null | Value::Bool(_) | Value::Char(_) | Value::Text(_) | Value::Bytes(_) => {
                None
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Text(_) => "String",
            Value::Bytes(_) => "Vec<u8>",
            _ => self.as_number().map_or("null", |n| n.type_name()),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Long(v) => Value::Long(v),
            Number::Int(v) => Value::Int(v),
            Number::Short(v) => Value::Short(v),
            Number::Byte(v) => Value::Byte(v),
            Number::Double(v) => Value::Double(v),
            Number::Float(v) => Value::Float(v),
            Number::Decimal(v) => Value::Decimal(v),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i64 => Long,
    i32 => Int,
    i16 => Short,
    i8 => Byte,
    f64 => Double,
    f32 => Float,
    Decimal => Decimal,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// JSON (API boundaries)
// ============================================================================

#[cfg(feature = "serde")]
impl Value {
    /// Convert a scalar JSON value.
    ///
    /// Integers that fit in `i64` become `Long`, every other number becomes
    /// `Double`. Arrays and objects have no scalar form and return `None`.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::String(s) => Some(Value::Text(s.clone())),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Value::Long(i)),
                None => n.as_f64().map(Value::Double),
            },
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}
