//! Array schemas.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, non_negative};
use crate::metadata::{Metadata, metadata_setters};
use crate::value::AdditionalSchema;
use crate::Schema;

/// Item validation mode. List and tuple validation never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    /// Every element validates against one schema.
    List(Box<Schema>),
    /// Element `i` validates against schema `i`.
    Tuple(Vec<Schema>),
}

/// `{"type": "array", ...}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{ArraySchema, NumberSchema, StringSchema};
/// use serde_json::json;
///
/// let point = ArraySchema::builder()
///     .with_item_tuple([NumberSchema::builder().build(), NumberSchema::builder().build()])
///     .with_additional_items(false)
///     .build();
/// assert_eq!(
///     point.to_fragment(),
///     json!({
///         "type": "array",
///         "items": [{"type": "number"}, {"type": "number"}],
///         "additionalItems": false
///     })
/// );
///
/// let tags = ArraySchema::builder()
///     .with_item(StringSchema::builder().build())
///     .with_unique_items(true)
///     .build();
/// assert_eq!(
///     tags.to_fragment(),
///     json!({"type": "array", "items": {"type": "string"}, "uniqueItems": true})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    required: bool,
    metadata: Metadata,
    contains: Option<Box<Schema>>,
    items: Option<Items>,
    additional_items: Option<AdditionalSchema>,
    min_items: Option<u64>,
    max_items: Option<u64>,
    unique_items: Option<bool>,
}

impl ArraySchema {
    /// Starts a new builder.
    pub fn builder() -> ArraySchemaBuilder {
        ArraySchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The configured item validation mode, if any.
    pub fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    /// Renders the `array` fragment.
    pub fn to_fragment(&self) -> Value {
        let mut json = Map::new();
        json.insert("type".into(), Value::from("array"));
        self.metadata.write_into(&mut json);

        if let Some(contains) = &self.contains {
            json.insert("contains".into(), contains.to_fragment());
        }
        match &self.items {
            Some(Items::List(item)) => {
                json.insert("items".into(), item.to_fragment());
            }
            Some(Items::Tuple(items)) => {
                let items = items.iter().map(Schema::to_fragment).collect();
                json.insert("items".into(), Value::Array(items));
            }
            None => {}
        }
        if let Some(additional) = &self.additional_items {
            json.insert("additionalItems".into(), additional.to_json());
        }
        if let Some(min) = self.min_items {
            json.insert("minItems".into(), Value::from(min));
        }
        if let Some(max) = self.max_items {
            json.insert("maxItems".into(), Value::from(max));
        }
        if let Some(unique) = self.unique_items {
            json.insert("uniqueItems".into(), Value::Bool(unique));
        }

        Value::Object(json)
    }
}

/// Builder for [`ArraySchema`].
#[derive(Debug, Clone, Default)]
pub struct ArraySchemaBuilder {
    required: bool,
    metadata: Metadata,
    contains: Option<Box<Schema>>,
    items: Option<Items>,
    additional_items: Option<AdditionalSchema>,
    min_items: Option<u64>,
    max_items: Option<u64>,
    unique_items: Option<bool>,
}

impl ArraySchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Sets `contains`: at least one element must match.
    pub fn with_contains(mut self, contains: impl Into<Schema>) -> Self {
        self.contains = Some(Box::new(contains.into()));
        self
    }

    /// List validation. Replaces any tuple previously configured.
    pub fn with_item(mut self, item: impl Into<Schema>) -> Self {
        self.items = Some(Items::List(Box::new(item.into())));
        self
    }

    /// Tuple validation. Replaces any list schema previously configured.
    pub fn with_item_tuple<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Schema>,
    {
        self.items = Some(Items::Tuple(items.into_iter().map(Into::into).collect()));
        self
    }

    /// Clears both list and tuple validation.
    pub fn without_items(mut self) -> Self {
        self.items = None;
        self
    }

    /// Sets `additionalItems` to a boolean, replacing any schema value.
    pub fn with_additional_items(mut self, allowed: bool) -> Self {
        self.additional_items = Some(AdditionalSchema::Allowed(allowed));
        self
    }

    /// Sets `additionalItems` to a schema, replacing any boolean value.
    pub fn with_additional_items_schema(mut self, schema: impl Into<Schema>) -> Self {
        self.additional_items = Some(AdditionalSchema::Schema(Box::new(schema.into())));
        self
    }

    /// Sets `minItems`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `min_items` is negative.
    pub fn with_min_items(mut self, min_items: i64) -> Result<Self> {
        self.min_items = Some(non_negative("minItems", min_items)?);
        Ok(self)
    }

    /// Sets `maxItems`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `max_items` is negative.
    pub fn with_max_items(mut self, max_items: i64) -> Result<Self> {
        self.max_items = Some(non_negative("maxItems", max_items)?);
        Ok(self)
    }

    /// Sets `uniqueItems`.
    pub fn with_unique_items(mut self, unique_items: bool) -> Self {
        self.unique_items = Some(unique_items);
        self
    }

    /// Finishes the node.
    pub fn build(self) -> ArraySchema {
        debug!(
            tuple_len = match &self.items {
                Some(Items::Tuple(items)) => items.len(),
                _ => 0,
            },
            has_contains = self.contains.is_some(),
            "built array schema"
        );

        ArraySchema {
            required: self.required,
            metadata: self.metadata,
            contains: self.contains,
            items: self.items,
            additional_items: self.additional_items,
            min_items: self.min_items,
            max_items: self.max_items,
            unique_items: self.unique_items,
        }
    }
}
