//! `allOf`, `anyOf`, `oneOf` and `not`.
//!
//! The list combinators keep children in insertion order so repeated renders
//! of equal trees are byte-identical.

use serde_json::{Map, Value};
use tracing::debug;

use crate::Schema;

macro_rules! list_combinator {
    (
        $(#[$doc:meta])*
        $schema:ident, $builder:ident, $keyword:literal
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $schema {
            required: bool,
            schemas: Vec<Schema>,
        }

        impl $schema {
            /// Starts a new builder.
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Whether the parent object lists this node in `required`.
            pub fn is_required(&self) -> bool {
                self.required
            }

            /// Child schemas in insertion order.
            pub fn schemas(&self) -> &[Schema] {
                &self.schemas
            }

            /// Renders the combinator fragment.
            pub fn to_fragment(&self) -> Value {
                let children = self.schemas.iter().map(Schema::to_fragment).collect();
                let mut json = Map::new();
                json.insert($keyword.into(), Value::Array(children));
                Value::Object(json)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($schema), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            required: bool,
            schemas: Vec<Schema>,
        }

        impl $builder {
            /// Marks the node as required by its parent object.
            pub fn with_required(mut self) -> Self {
                self.required = true;
                self
            }

            /// Appends a child schema.
            pub fn with_schema(mut self, schema: impl Into<Schema>) -> Self {
                self.schemas.push(schema.into());
                self
            }

            /// Appends a child schema if one is given; `None` is a no-op.
            pub fn with_optional_schema<S: Into<Schema>>(self, schema: Option<S>) -> Self {
                match schema {
                    Some(schema) => self.with_schema(schema),
                    None => self,
                }
            }

            /// Appends several child schemas.
            pub fn with_schemas<I, S>(mut self, schemas: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<Schema>,
            {
                self.schemas.extend(schemas.into_iter().map(Into::into));
                self
            }

            /// Finishes the node.
            pub fn build(self) -> $schema {
                debug!(
                    keyword = $keyword,
                    children = self.schemas.len(),
                    "built composition schema"
                );
                $schema {
                    required: self.required,
                    schemas: self.schemas,
                }
            }
        }
    };
}

list_combinator! {
    /// `{"allOf": [...]}`: valid against every child.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_builder_core::{AllOfSchema, NumberSchema};
    /// use serde_json::json;
    ///
    /// let schema = AllOfSchema::builder()
    ///     .with_schema(NumberSchema::builder().with_minimum(0).build())
    ///     .with_schema(NumberSchema::builder().with_maximum(10).build())
    ///     .build();
    /// assert_eq!(
    ///     schema.to_fragment(),
    ///     json!({"allOf": [
    ///         {"type": "number", "minimum": 0},
    ///         {"type": "number", "maximum": 10}
    ///     ]})
    /// );
    /// ```
    AllOfSchema, AllOfSchemaBuilder, "allOf"
}

list_combinator! {
    /// `{"anyOf": [...]}`: valid against at least one child.
    AnyOfSchema, AnyOfSchemaBuilder, "anyOf"
}

list_combinator! {
    /// `{"oneOf": [...]}`: valid against exactly one child.
    OneOfSchema, OneOfSchemaBuilder, "oneOf"
}

/// `{"not": {...}}`. Renders `{}` when no child was set.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{NotSchema, StringSchema};
/// use serde_json::json;
///
/// let schema = NotSchema::builder().with_not(StringSchema::builder().build()).build();
/// assert_eq!(schema.to_fragment(), json!({"not": {"type": "string"}}));
///
/// assert_eq!(NotSchema::builder().build().to_fragment(), json!({}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NotSchema {
    required: bool,
    not: Option<Box<Schema>>,
}

impl NotSchema {
    /// Starts a new builder.
    pub fn builder() -> NotSchemaBuilder {
        NotSchemaBuilder::default()
    }

    /// Whether the parent object lists this node in `required`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Renders the `not` fragment.
    pub fn to_fragment(&self) -> Value {
        let mut json = Map::new();
        if let Some(not) = &self.not {
            json.insert("not".into(), not.to_fragment());
        }
        Value::Object(json)
    }
}

/// Builder for [`NotSchema`].
#[derive(Debug, Clone, Default)]
pub struct NotSchemaBuilder {
    required: bool,
    not: Option<Box<Schema>>,
}

impl NotSchemaBuilder {
    /// Marks the node as required by its parent object.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the negated schema, replacing any earlier one.
    pub fn with_not(mut self, schema: impl Into<Schema>) -> Self {
        self.not = Some(Box::new(schema.into()));
        self
    }

    /// Clears the negated schema so the node renders `{}`.
    pub fn without_not(mut self) -> Self {
        self.not = None;
        self
    }

    /// Finishes the node.
    pub fn build(self) -> NotSchema {
        NotSchema {
            required: self.required,
            not: self.not,
        }
    }
}
