//! Constraint values for keywords that accept more than one representation.
//!
//! `multipleOf`, `minimum` and the other numeric keywords on a number schema
//! hold either an integer or a double. `additionalItems` and
//! `additionalProperties` hold either a boolean or a sub-schema. Each is
//! stored in a single slot, so assigning one form replaces the other.

use serde_json::{Number, Value};

use crate::Schema;

/// Integer- or double-valued numeric keyword.
///
/// # Examples
///
/// ```
/// use schema_builder_core::NumberValue;
///
/// assert_eq!(NumberValue::from(3), NumberValue::Integer(3));
/// assert_eq!(NumberValue::from(0.5), NumberValue::Double(0.5));
/// assert_eq!(NumberValue::from(3).to_json(), serde_json::json!(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// Rendered as a JSON integer.
    Integer(i64),
    /// Rendered as a JSON float.
    Double(f64),
}

impl NumberValue {
    /// Returns `true` unless this is a NaN or infinite double.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Double(d) => d.is_finite(),
        }
    }

    /// Returns `true` if the value is strictly greater than zero.
    ///
    /// NaN is never positive.
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Integer(i) => *i > 0,
            Self::Double(d) => *d > 0.0,
        }
    }

    /// Renders the value as a JSON number.
    ///
    /// Builders never store non-finite doubles; should one reach this point
    /// it renders as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Integer(i) => Value::from(*i),
            Self::Double(d) => Number::from_f64(*d).map_or(Value::Null, Value::Number),
        }
    }
}

impl From<i32> for NumberValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for NumberValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f32> for NumberValue {
    fn from(value: f32) -> Self {
        Self::Double(f64::from(value))
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

/// Policy for items or properties not covered by the explicit keywords.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalSchema {
    /// `true` allows anything, `false` forbids everything.
    Allowed(bool),
    /// Additional entries must validate against this schema.
    Schema(Box<Schema>),
}

impl AdditionalSchema {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            Self::Allowed(allowed) => Value::Bool(*allowed),
            Self::Schema(schema) => schema.to_fragment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::StringSchema;

    #[test]
    fn test_number_value_renders_integer_and_double() {
        assert_eq!(NumberValue::Integer(-4).to_json(), json!(-4));
        assert_eq!(NumberValue::Double(2.5).to_json(), json!(2.5));
        assert_eq!(NumberValue::from(7_u32), NumberValue::Integer(7));
        assert_eq!(NumberValue::from(0.5_f32), NumberValue::Double(0.5));
        assert_eq!(NumberValue::from(u32::MAX).to_json(), json!(4_294_967_295_u64));
    }

    #[test]
    fn test_number_value_positivity() {
        assert!(NumberValue::from(1).is_positive());
        assert!(!NumberValue::from(0).is_positive());
        assert!(!NumberValue::from(-0.1).is_positive());
        assert!(!NumberValue::Double(f64::NAN).is_positive());
    }

    #[test]
    fn test_number_value_finiteness() {
        assert!(NumberValue::from(i64::MAX).is_finite());
        assert!(!NumberValue::Double(f64::INFINITY).is_finite());
        assert_eq!(NumberValue::Double(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn test_additional_schema_json() {
        assert_eq!(AdditionalSchema::Allowed(false).to_json(), json!(false));
        let schema = AdditionalSchema::Schema(Box::new(StringSchema::builder().build().into()));
        assert_eq!(schema.to_json(), json!({"type": "string"}));
    }
}
