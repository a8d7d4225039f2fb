//! Enumerated-literal schemas.
//!
//! Literals are kept in four partitions (strings, integers, doubles, null),
//! each deduplicated and sorted, and rendered in that partition order. Draft-07
//! forbids an empty `enum`, so a schema with no literals renders `[null]`.

use std::collections::BTreeSet;

use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::metadata::{Metadata, metadata_setters};

/// A literal accepted by [`EnumSchemaBuilder::with_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    /// A string literal.
    String(String),
    /// An integer literal.
    Integer(i64),
    /// A double literal. Must be finite to be kept.
    Double(f64),
    /// The `null` literal, same as [`EnumSchemaBuilder::with_null`].
    Null,
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

/// `{"enum": [...]}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::EnumSchema;
/// use serde_json::json;
///
/// let schema = EnumSchema::builder()
///     .with_value("B")
///     .with_value("A")
///     .with_value(2)
///     .with_value(1.5)
///     .with_null()
///     .build();
/// assert_eq!(schema.to_fragment(), json!({"enum": ["A", "B", 2, 1.5, null]}));
///
/// // An enum with no literals still renders a valid schema.
/// assert_eq!(EnumSchema::builder().build().to_fragment(), json!({"enum": [null]}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    required: bool,
    metadata: Metadata,
    strings: BTreeSet<String>,
    integers: BTreeSet<i64>,
    doubles: Vec<f64>,
    include_null: bool,
}

impl EnumSchema {
    /// Starts a new builder.
    pub fn builder() -> EnumSchemaBuilder {
        EnumSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `enum` fragment.
    pub fn to_fragment(&self) -> Value {
        let mut json = Map::new();
        self.metadata.write_into(&mut json);

        let mut values: Vec<Value> = Vec::new();
        values.extend(self.strings.iter().map(|s| Value::from(s.as_str())));
        values.extend(self.integers.iter().map(|i| Value::from(*i)));
        values.extend(
            self.doubles
                .iter()
                .filter_map(|d| Number::from_f64(*d).map(Value::Number)),
        );
        if self.include_null || values.is_empty() {
            values.push(Value::Null);
        }

        json.insert("enum".into(), Value::Array(values));
        Value::Object(json)
    }
}

/// Builder for [`EnumSchema`].
#[derive(Debug, Clone, Default)]
pub struct EnumSchemaBuilder {
    required: bool,
    metadata: Metadata,
    strings: BTreeSet<String>,
    integers: BTreeSet<i64>,
    doubles: Vec<f64>,
    include_null: bool,
}

impl EnumSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Adds a literal. Duplicates are dropped; NaN and infinite doubles are
    /// ignored.
    pub fn with_value(mut self, value: impl Into<EnumValue>) -> Self {
        match value.into() {
            EnumValue::String(s) => {
                self.strings.insert(s);
            }
            EnumValue::Integer(i) => {
                self.integers.insert(i);
            }
            EnumValue::Double(d) if d.is_finite() => self.doubles.push(d),
            EnumValue::Double(d) => {
                warn!(value = d, "ignoring non-finite enum literal");
            }
            EnumValue::Null => self.include_null = true,
        }
        self
    }

    /// Adds `value` when present. `None` leaves the builder unchanged; use
    /// [`with_null`](Self::with_null) to accept `null`.
    pub fn with_optional_value(self, value: Option<impl Into<EnumValue>>) -> Self {
        match value {
            Some(value) => self.with_value(value),
            None => self,
        }
    }

    /// Adds several literals.
    pub fn with_values<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        values.into_iter().fold(self, |builder, v| builder.with_value(v))
    }

    /// Adds the `null` literal.
    pub fn with_null(mut self) -> Self {
        self.include_null = true;
        self
    }

    /// Sorts and deduplicates the double literals.
    pub fn build(mut self) -> EnumSchema {
        self.doubles.sort_by(f64::total_cmp);
        self.doubles.dedup_by(|a, b| a.total_cmp(b).is_eq());

        EnumSchema {
            required: self.required,
            metadata: self.metadata,
            strings: self.strings,
            integers: self.integers,
            doubles: self.doubles,
            include_null: self.include_null,
        }
    }
}
