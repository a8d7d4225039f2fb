//! Number and integer schemas.
//!
//! Both kinds share the five numeric keywords. A number schema stores each
//! keyword as a [`NumberValue`], so setting the integer form replaces the
//! double form and vice versa. An integer schema stores plain `i64`s.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Result, SchemaError};
use crate::metadata::{Metadata, metadata_setters};
use crate::value::NumberValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds<T> {
    multiple_of: Option<T>,
    minimum: Option<T>,
    exclusive_minimum: Option<T>,
    maximum: Option<T>,
    exclusive_maximum: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            multiple_of: None,
            minimum: None,
            exclusive_minimum: None,
            maximum: None,
            exclusive_maximum: None,
        }
    }
}

impl<T> Bounds<T> {
    fn write_into(&self, json: &mut Map<String, Value>, render: impl Fn(&T) -> Value) {
        let keywords = [
            ("multipleOf", &self.multiple_of),
            ("minimum", &self.minimum),
            ("exclusiveMinimum", &self.exclusive_minimum),
            ("maximum", &self.maximum),
            ("exclusiveMaximum", &self.exclusive_maximum),
        ];
        for (keyword, value) in keywords {
            if let Some(value) = value {
                json.insert(keyword.into(), render(value));
            }
        }
    }
}

fn numeric_fragment<T>(
    type_name: &str,
    metadata: &Metadata,
    bounds: &Bounds<T>,
    render: impl Fn(&T) -> Value,
) -> Value {
    let mut json = Map::new();
    json.insert("type".into(), Value::from(type_name));
    metadata.write_into(&mut json);
    bounds.write_into(&mut json, render);
    Value::Object(json)
}

/// Drops non-finite doubles, which have no JSON representation.
fn finite(keyword: &str, value: NumberValue) -> Option<NumberValue> {
    if value.is_finite() {
        Some(value)
    } else {
        warn!(keyword, ?value, "ignoring non-finite numeric constraint");
        None
    }
}

/// `{"type": "number", ...}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::NumberSchema;
/// use serde_json::json;
///
/// let schema = NumberSchema::builder()
///     .with_minimum(0)
///     .with_exclusive_maximum(100.5)
///     .with_multiple_of(0.5)?
///     .build();
///
/// assert_eq!(
///     schema.to_fragment(),
///     json!({"type": "number", "multipleOf": 0.5, "minimum": 0, "exclusiveMaximum": 100.5})
/// );
/// # Ok::<(), schema_builder_core::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSchema {
    required: bool,
    metadata: Metadata,
    bounds: Bounds<NumberValue>,
}

impl NumberSchema {
    /// Starts a new builder.
    pub fn builder() -> NumberSchemaBuilder {
        NumberSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `number` fragment.
    pub fn to_fragment(&self) -> Value {
        numeric_fragment("number", &self.metadata, &self.bounds, NumberValue::to_json)
    }
}

/// Builder for [`NumberSchema`].
///
/// Numeric setters accept integers or doubles. NaN and infinite doubles are
/// ignored, leaving the keyword unchanged.
#[derive(Debug, Clone, Default)]
pub struct NumberSchemaBuilder {
    required: bool,
    metadata: Metadata,
    bounds: Bounds<NumberValue>,
}

impl NumberSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Sets `multipleOf`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](SchemaError::InvalidArgument) unless the
    /// value is finite and strictly positive.
    pub fn with_multiple_of(mut self, multiple_of: impl Into<NumberValue>) -> Result<Self> {
        let multiple_of = multiple_of.into();
        if !multiple_of.is_finite() {
            return Err(SchemaError::InvalidArgument("multipleOf must be finite".into()));
        }
        if !multiple_of.is_positive() {
            return Err(SchemaError::InvalidArgument("multipleOf must be positive".into()));
        }
        self.bounds.multiple_of = Some(multiple_of);
        Ok(self)
    }

    /// Sets the inclusive `minimum`.
    pub fn with_minimum(mut self, minimum: impl Into<NumberValue>) -> Self {
        if let Some(value) = finite("minimum", minimum.into()) {
            self.bounds.minimum = Some(value);
        }
        self
    }

    /// Sets `exclusiveMinimum`.
    pub fn with_exclusive_minimum(mut self, exclusive_minimum: impl Into<NumberValue>) -> Self {
        if let Some(value) = finite("exclusiveMinimum", exclusive_minimum.into()) {
            self.bounds.exclusive_minimum = Some(value);
        }
        self
    }

    /// Sets the inclusive `maximum`.
    pub fn with_maximum(mut self, maximum: impl Into<NumberValue>) -> Self {
        if let Some(value) = finite("maximum", maximum.into()) {
            self.bounds.maximum = Some(value);
        }
        self
    }

    /// Sets `exclusiveMaximum`.
    pub fn with_exclusive_maximum(mut self, exclusive_maximum: impl Into<NumberValue>) -> Self {
        if let Some(value) = finite("exclusiveMaximum", exclusive_maximum.into()) {
            self.bounds.exclusive_maximum = Some(value);
        }
        self
    }

    /// Finishes the node.
    pub fn build(self) -> NumberSchema {
        NumberSchema {
            required: self.required,
            metadata: self.metadata,
            bounds: self.bounds,
        }
    }
}

/// `{"type": "integer", ...}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::IntegerSchema;
/// use serde_json::json;
///
/// let port = IntegerSchema::builder()
///     .with_minimum(1)
///     .with_maximum(65535)
///     .build();
///
/// assert_eq!(
///     port.to_fragment(),
///     json!({"type": "integer", "minimum": 1, "maximum": 65535})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerSchema {
    required: bool,
    metadata: Metadata,
    bounds: Bounds<i64>,
}

impl IntegerSchema {
    /// Starts a new builder.
    pub fn builder() -> IntegerSchemaBuilder {
        IntegerSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `integer` fragment.
    pub fn to_fragment(&self) -> Value {
        numeric_fragment("integer", &self.metadata, &self.bounds, |v| Value::from(*v))
    }
}

/// Builder for [`IntegerSchema`].
#[derive(Debug, Clone, Default)]
pub struct IntegerSchemaBuilder {
    required: bool,
    metadata: Metadata,
    bounds: Bounds<i64>,
}

impl IntegerSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Sets `multipleOf`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](SchemaError::InvalidArgument) unless
    /// `multiple_of` is strictly positive.
    pub fn with_multiple_of(mut self, multiple_of: i64) -> Result<Self> {
        if multiple_of <= 0 {
            return Err(SchemaError::InvalidArgument("multipleOf must be positive".into()));
        }
        self.bounds.multiple_of = Some(multiple_of);
        Ok(self)
    }

    /// Sets the inclusive `minimum`.
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.bounds.minimum = Some(minimum);
        self
    }

    /// Sets `exclusiveMinimum`.
    pub fn with_exclusive_minimum(mut self, exclusive_minimum: i64) -> Self {
        self.bounds.exclusive_minimum = Some(exclusive_minimum);
        self
    }

    /// Sets the inclusive `maximum`.
    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.bounds.maximum = Some(maximum);
        self
    }

    /// Sets `exclusiveMaximum`.
    pub fn with_exclusive_maximum(mut self, exclusive_maximum: i64) -> Self {
        self.bounds.exclusive_maximum = Some(exclusive_maximum);
        self
    }

    /// Finishes the node.
    pub fn build(self) -> IntegerSchema {
        IntegerSchema {
            required: self.required,
            metadata: self.metadata,
            bounds: self.bounds,
        }
    }
}
