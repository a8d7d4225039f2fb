//! String schemas.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{Result, non_negative};
use crate::metadata::{Metadata, metadata_setters};

/// `{"type": "string", ...}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::StringSchema;
/// use serde_json::json;
///
/// let schema = StringSchema::builder()
///     .with_min_length(1)?
///     .with_max_length(64)?
///     .with_pattern("^[a-z]+$")
///     .build();
///
/// assert_eq!(
///     schema.to_fragment(),
///     json!({"type": "string", "minLength": 1, "maxLength": 64, "pattern": "^[a-z]+$"})
/// );
/// # Ok::<(), schema_builder_core::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StringSchema {
    required: bool,
    metadata: Metadata,
    min_length: Option<u64>,
    max_length: Option<u64>,
    pattern: Option<String>,
    enum_values: BTreeSet<String>,
}

impl StringSchema {
    /// Starts a new builder.
    pub fn builder() -> StringSchemaBuilder {
        StringSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `string` fragment.
    pub fn to_fragment(&self) -> Value {
        let mut json = Map::new();
        json.insert("type".into(), Value::from("string"));
        self.metadata.write_into(&mut json);

        if let Some(min) = self.min_length {
            json.insert("minLength".into(), Value::from(min));
        }
        if let Some(max) = self.max_length {
            json.insert("maxLength".into(), Value::from(max));
        }
        if let Some(pattern) = &self.pattern {
            json.insert("pattern".into(), Value::from(pattern.as_str()));
        }
        if !self.enum_values.is_empty() {
            let values = self.enum_values.iter().map(|v| Value::from(v.as_str()));
            json.insert("enum".into(), Value::Array(values.collect()));
        }

        Value::Object(json)
    }
}

/// Builder for [`StringSchema`].
#[derive(Debug, Clone, Default)]
pub struct StringSchemaBuilder {
    required: bool,
    metadata: Metadata,
    min_length: Option<u64>,
    max_length: Option<u64>,
    pattern: Option<String>,
    enum_values: BTreeSet<String>,
}

impl StringSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Sets `minLength`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `min_length` is negative.
    pub fn with_min_length(mut self, min_length: i64) -> Result<Self> {
        self.min_length = Some(non_negative("minLength", min_length)?);
        Ok(self)
    }

    /// Sets `maxLength`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `max_length` is negative.
    pub fn with_max_length(mut self, max_length: i64) -> Result<Self> {
        self.max_length = Some(non_negative("maxLength", max_length)?);
        Ok(self)
    }

    /// Sets `pattern`. The expression is emitted as-is.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Adds a permitted literal to the inline `enum`.
    pub fn with_enum_value(mut self, value: impl Into<String>) -> Self {
        self.enum_values.insert(value.into());
        self
    }

    /// Adds several permitted literals to the inline `enum`.
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Finishes the node.
    pub fn build(self) -> StringSchema {
        StringSchema {
            required: self.required,
            metadata: self.metadata,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern,
            enum_values: self.enum_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::SchemaError;

    #[test]
    fn test_empty_string() {
        assert_eq!(StringSchema::builder().build().to_fragment(), json!({"type": "string"}));
    }

    #[test]
    fn test_length_bounds() {
        let schema = StringSchema::builder()
            .with_min_length(0)
            .unwrap()
            .with_max_length(10)
            .unwrap()
            .build();
        assert_eq!(
            schema.to_fragment(),
            json!({"type": "string", "minLength": 0, "maxLength": 10})
        );
    }

    #[test]
    fn test_negative_lengths_rejected() {
        let err = StringSchema::builder().with_min_length(-1).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidArgument(_)));

        let err = StringSchema::builder().with_max_length(-1).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidArgument(_)));
    }

    #[test]
    fn test_inline_enum_sorted_and_deduplicated() {
        let schema = StringSchema::builder()
            .with_enum_value("red")
            .with_enum_values(["green", "blue", "red"])
            .build();
        assert_eq!(
            schema.to_fragment(),
            json!({"type": "string", "enum": ["blue", "green", "red"]})
        );
    }

    #[test]
    fn test_metadata_precedes_keywords() {
        let schema = StringSchema::builder()
            .with_pattern("^x")
            .with_title("Name")
            .with_read_only()
            .build();
        let fragment = schema.to_fragment();
        let keys: Vec<&str> = fragment
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["type", "title", "readOnly", "pattern"]);
    }

    #[test]
    fn test_read_only_and_write_only_exclusive() {
        let schema = StringSchema::builder()
            .with_read_only()
            .with_write_only()
            .build();
        assert_eq!(schema.to_fragment(), json!({"type": "string", "writeOnly": true}));
    }
}
