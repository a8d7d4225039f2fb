//! Typed construction of JSON Schema draft-07 documents.
//!
//! Instead of hand-writing nested JSON, callers assemble a tree of schema
//! nodes through builders and render it:
//!
//! - [`StringSchema`], [`NumberSchema`], [`IntegerSchema`], [`BooleanSchema`],
//!   [`NullSchema`]: scalar types with their draft-07 keywords.
//! - [`ObjectSchema`]: properties, pattern properties, dependencies, and the
//!   `required` array derived from each child's required flag.
//! - [`ArraySchema`]: list or tuple item validation, `contains`, size and
//!   uniqueness constraints.
//! - [`EnumSchema`]: deduplicated, deterministically ordered literals.
//! - [`AllOfSchema`], [`AnyOfSchema`], [`OneOfSchema`], [`NotSchema`]:
//!   composition keywords.
//!
//! Every node converts into the closed [`Schema`] enum. Builders validate
//! numeric preconditions at the setter and return
//! [`SchemaError::InvalidArgument`]; a built node always renders.
//!
//! [`render`] wraps a root node with the draft-07 `$schema` URI.
//! [`Schema::to_fragment`] renders without it, for embedding.
//!
//! # Example
//!
//! ```
//! use schema_builder_core::*;
//! use serde_json::json;
//!
//! let address = ObjectSchema::builder()
//!     .with_property("street", StringSchema::builder().with_required().build())
//!     .with_property("zip", StringSchema::builder().with_pattern("^[0-9]{5}$").build())
//!     .build();
//!
//! let person = ObjectSchema::builder()
//!     .with_title("Person")
//!     .with_property("name", StringSchema::builder().with_min_length(1)?.with_required().build())
//!     .with_property("tags", ArraySchema::builder()
//!         .with_item(StringSchema::builder().build())
//!         .with_unique_items(true)
//!         .build())
//!     .with_property("address", address)
//!     .build();
//!
//! let document = render(&person.into());
//! assert_eq!(document["$schema"], json!(DRAFT_07));
//! assert_eq!(document["required"], json!(["name"]));
//! assert_eq!(document["properties"]["address"]["required"], json!(["street"]));
//! # Ok::<(), SchemaError>(())
//! ```

mod array;
mod composition;
mod config;
mod document;
mod enumeration;
mod error;
mod metadata;
mod node;
mod numeric;
mod object;
mod primitive;
mod string;
mod value;

pub use array::{ArraySchema, ArraySchemaBuilder, Items};
pub use composition::{
    AllOfSchema, AllOfSchemaBuilder, AnyOfSchema, AnyOfSchemaBuilder, NotSchema,
    NotSchemaBuilder, OneOfSchema, OneOfSchemaBuilder,
};
pub use config::RenderConfig;
pub use document::{DRAFT_07, render, render_with, to_json_string};
pub use enumeration::{EnumSchema, EnumSchemaBuilder, EnumValue};
pub use error::{Result, SchemaError};
pub use node::{Schema, SchemaKind};
pub use numeric::{IntegerSchema, IntegerSchemaBuilder, NumberSchema, NumberSchemaBuilder};
pub use object::{ObjectSchema, ObjectSchemaBuilder};
pub use primitive::{BooleanSchema, BooleanSchemaBuilder, NullSchema, NullSchemaBuilder};
pub use string::{StringSchema, StringSchemaBuilder};
pub use value::{AdditionalSchema, NumberValue};
