//! Object schemas and required-property aggregation.
//!
//! An object does not store a `required` list of its own. When rendered, it
//! scans `properties` and `patternProperties` and lists every key whose child
//! node reports [`Schema::is_required`], sorted and deduplicated.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, non_negative};
use crate::metadata::{Metadata, metadata_setters};
use crate::value::AdditionalSchema;
use crate::Schema;

/// `{"type": "object", ...}`.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{IntegerSchema, ObjectSchema, StringSchema};
/// use serde_json::json;
///
/// let person = ObjectSchema::builder()
///     .with_property("name", StringSchema::builder().with_required().build())
///     .with_property("age", IntegerSchema::builder().with_minimum(0).build())
///     .with_additional_properties(false)
///     .build();
///
/// assert_eq!(
///     person.to_fragment(),
///     json!({
///         "type": "object",
///         "properties": {
///             "age": {"type": "integer", "minimum": 0},
///             "name": {"type": "string"}
///         },
///         "required": ["name"],
///         "additionalProperties": false
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    required: bool,
    metadata: Metadata,
    properties: BTreeMap<String, Schema>,
    pattern_properties: BTreeMap<String, Schema>,
    property_names: Option<String>,
    property_dependencies: BTreeMap<String, BTreeSet<String>>,
    schema_dependencies: BTreeMap<String, ObjectSchema>,
    additional_properties: Option<AdditionalSchema>,
    min_properties: Option<u64>,
    max_properties: Option<u64>,
}

impl ObjectSchema {
    /// Starts a new builder.
    pub fn builder() -> ObjectSchemaBuilder {
        ObjectSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Keys listed in the rendered `required` array.
    pub fn required_keys(&self) -> BTreeSet<&str> {
        self.properties
            .iter()
            .chain(&self.pattern_properties)
            .filter(|(_, schema)| schema.is_required())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Renders the `object` fragment, with `required` collected from the properties.
    pub fn to_fragment(&self) -> Value {
        Value::Object(self.render(true))
    }

    /// Renders the object's keywords. Schema dependencies are partial
    /// constraints and are rendered without `type`.
    fn render(&self, with_type: bool) -> Map<String, Value> {
        let mut json = Map::new();
        if with_type {
            json.insert("type".into(), Value::from("object"));
        }
        self.metadata.write_into(&mut json);

        if !self.properties.is_empty() {
            json.insert("properties".into(), fragments(&self.properties));
        }
        if !self.pattern_properties.is_empty() {
            json.insert("patternProperties".into(), fragments(&self.pattern_properties));
        }
        if let Some(pattern) = &self.property_names {
            let mut names = Map::new();
            names.insert("pattern".into(), Value::from(pattern.as_str()));
            json.insert("propertyNames".into(), Value::Object(names));
        }
        if !self.property_dependencies.is_empty() || !self.schema_dependencies.is_empty() {
            let mut dependencies = Map::new();
            for (key, names) in &self.property_dependencies {
                let names = names.iter().map(|n| Value::from(n.as_str())).collect();
                dependencies.insert(key.clone(), Value::Array(names));
            }
            for (key, schema) in &self.schema_dependencies {
                dependencies.insert(key.clone(), Value::Object(schema.render(false)));
            }
            json.insert("dependencies".into(), Value::Object(dependencies));
        }

        let required = self.required_keys();
        if !required.is_empty() {
            let keys = required.into_iter().map(Value::from).collect();
            json.insert("required".into(), Value::Array(keys));
        }

        if let Some(additional) = &self.additional_properties {
            json.insert("additionalProperties".into(), additional.to_json());
        }
        if let Some(min) = self.min_properties {
            json.insert("minProperties".into(), Value::from(min));
        }
        if let Some(max) = self.max_properties {
            json.insert("maxProperties".into(), Value::from(max));
        }

        json
    }
}

fn fragments(schemas: &BTreeMap<String, Schema>) -> Value {
    Value::Object(
        schemas
            .iter()
            .map(|(key, schema)| (key.clone(), schema.to_fragment()))
            .collect(),
    )
}

/// Builder for [`ObjectSchema`].
#[derive(Debug, Clone, Default)]
pub struct ObjectSchemaBuilder {
    required: bool,
    metadata: Metadata,
    properties: BTreeMap<String, Schema>,
    pattern_properties: BTreeMap<String, Schema>,
    property_names: Option<String>,
    property_dependencies: BTreeMap<String, BTreeSet<String>>,
    schema_dependencies: BTreeMap<String, ObjectSchema>,
    additional_properties: Option<AdditionalSchema>,
    min_properties: Option<u64>,
    max_properties: Option<u64>,
}

impl ObjectSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    metadata_setters!();

    /// Adds a named property, replacing any earlier schema for `name`.
    pub fn with_property(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Adds a property whose name matches the regular expression `pattern`.
    pub fn with_pattern_property(
        mut self,
        pattern: impl Into<String>,
        schema: impl Into<Schema>,
    ) -> Self {
        self.pattern_properties.insert(pattern.into(), schema.into());
        self
    }

    /// Constrains every property name to match `pattern`.
    pub fn with_property_names(mut self, pattern: impl Into<String>) -> Self {
        self.property_names = Some(pattern.into());
        self
    }

    /// When `property` is present, `dependency` must be present too.
    ///
    /// Replaces any schema dependency recorded for `property`; repeated calls
    /// accumulate dependency names.
    pub fn with_property_dependency(
        mut self,
        property: impl Into<String>,
        dependency: impl Into<String>,
    ) -> Self {
        let property = property.into();
        self.schema_dependencies.remove(&property);
        self.property_dependencies
            .entry(property)
            .or_default()
            .insert(dependency.into());
        self
    }

    /// When `property` is present, the object must also satisfy `schema`.
    ///
    /// Replaces any property dependencies recorded for `property`.
    pub fn with_schema_dependency(
        mut self,
        property: impl Into<String>,
        schema: ObjectSchema,
    ) -> Self {
        let property = property.into();
        self.property_dependencies.remove(&property);
        self.schema_dependencies.insert(property, schema);
        self
    }

    /// Sets `additionalProperties` to a boolean, replacing any schema value.
    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(AdditionalSchema::Allowed(allowed));
        self
    }

    /// Sets `additionalProperties` to a schema, replacing any boolean value.
    pub fn with_additional_properties_schema(mut self, schema: impl Into<Schema>) -> Self {
        self.additional_properties = Some(AdditionalSchema::Schema(Box::new(schema.into())));
        self
    }

    /// Sets `minProperties`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `min_properties` is negative.
    pub fn with_min_properties(mut self, min_properties: i64) -> Result<Self> {
        self.min_properties = Some(non_negative("minProperties", min_properties)?);
        Ok(self)
    }

    /// Sets `maxProperties`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::SchemaError::InvalidArgument) if
    /// `max_properties` is negative.
    pub fn with_max_properties(mut self, max_properties: i64) -> Result<Self> {
        self.max_properties = Some(non_negative("maxProperties", max_properties)?);
        Ok(self)
    }

    /// Finishes the node.
    pub fn build(self) -> ObjectSchema {
        debug!(
            properties = self.properties.len(),
            pattern_properties = self.pattern_properties.len(),
            dependencies = self.property_dependencies.len() + self.schema_dependencies.len(),
            "built object schema"
        );

        ObjectSchema {
            required: self.required,
            metadata: self.metadata,
            properties: self.properties,
            pattern_properties: self.pattern_properties,
            property_names: self.property_names,
            property_dependencies: self.property_dependencies,
            schema_dependencies: self.schema_dependencies,
            additional_properties: self.additional_properties,
            min_properties: self.min_properties,
            max_properties: self.max_properties,
        }
    }
}
