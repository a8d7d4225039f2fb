//! Boolean and null schemas. Both carry only a type and metadata.

use serde_json::{Map, Value};

use crate::metadata::{Metadata, metadata_setters};

fn typed_fragment(type_name: &str, metadata: &Metadata) -> Value {
    let mut json = Map::new();
    json.insert("type".into(), Value::from(type_name));
    metadata.write_into(&mut json);
    Value::Object(json)
}

/// `{"type": "boolean"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanSchema {
    required: bool,
    metadata: Metadata,
}

impl BooleanSchema {
    /// Starts a new builder.
    pub fn builder() -> BooleanSchemaBuilder {
        BooleanSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `boolean` fragment.
    pub fn to_fragment(&self) -> Value {
        typed_fragment("boolean", &self.metadata)
    }
}

/// Builder for [`BooleanSchema`].
#[derive(Debug, Clone, Default)]
pub struct BooleanSchemaBuilder {
    required: bool,
    metadata: Metadata,
}

impl BooleanSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Finishes the node.
    pub fn build(self) -> BooleanSchema {
        BooleanSchema {
            required: self.required,
            metadata: self.metadata,
        }
    }
}

/// `{"type": "null"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullSchema {
    required: bool,
    metadata: Metadata,
}

impl NullSchema {
    /// Starts a new builder.
    pub fn builder() -> NullSchemaBuilder {
        NullSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `null` fragment.
    pub fn to_fragment(&self) -> Value {
        typed_fragment("null", &self.metadata)
    }
}

/// Builder for [`NullSchema`].
#[derive(Debug, Clone, Default)]
pub struct NullSchemaBuilder {
    required: bool,
    metadata: Metadata,
}

impl NullSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Finishes the node.
    pub fn build(self) -> NullSchema {
        NullSchema {
            required: self.required,
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_boolean() {
        assert_eq!(BooleanSchema::builder().build().to_fragment(), json!({"type": "boolean"}));
    }

    #[test]
    fn test_boolean_metadata() {
        let schema = BooleanSchema::builder()
            .with_title("Enabled")
            .with_description("Feature toggle")
            .with_write_only()
            .build();
        assert_eq!(
            schema.to_fragment(),
            json!({
                "type": "boolean",
                "title": "Enabled",
                "description": "Feature toggle",
                "writeOnly": true
            })
        );
    }

    #[test]
    fn test_null() {
        assert_eq!(NullSchema::builder().build().to_fragment(), json!({"type": "null"}));
    }

    #[test]
    fn test_null_read_only() {
        let schema = NullSchema::builder().with_read_only().build();
        assert_eq!(schema.to_fragment(), json!({"type": "null", "readOnly": true}));
    }
}
