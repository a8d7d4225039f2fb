//! The closed set of schema node kinds.
//!
//! Every concrete node type is a variant of [`Schema`]. Container nodes
//! (objects, arrays, compositions) hold their children as `Schema` values and
//! render them through [`Schema::to_fragment`].

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{
    AllOfSchema, AnyOfSchema, ArraySchema, BooleanSchema, EnumSchema, IntegerSchema, NotSchema,
    NullSchema, NumberSchema, ObjectSchema, OneOfSchema, StringSchema,
};

/// Discriminant of a [`Schema`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// `"type": "string"`.
    String,
    /// `"type": "number"`.
    Number,
    /// `"type": "integer"`.
    Integer,
    /// `"type": "boolean"`.
    Boolean,
    /// `"type": "null"`.
    Null,
    /// `"type": "object"`.
    Object,
    /// `"type": "array"`.
    Array,
    /// An `enum` of literals.
    Enum,
    /// `allOf` composition.
    AllOf,
    /// `anyOf` composition.
    AnyOf,
    /// `oneOf` composition.
    OneOf,
    /// `not` composition.
    Not,
}

impl SchemaKind {
    /// Lowercase name: the draft-07 `type` for typed kinds, the keyword for
    /// the rest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Object => "object",
            Self::Array => "array",
            Self::Enum => "enum",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::Not => "not",
        }
    }
}

/// A built, immutable schema node.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{Schema, SchemaKind, StringSchema};
///
/// let node: Schema = StringSchema::builder().with_required().build().into();
/// assert_eq!(node.kind(), SchemaKind::String);
/// assert!(node.is_required());
/// assert_eq!(node.to_fragment(), serde_json::json!({"type": "string"}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A string node.
    String(StringSchema),
    /// A number node; bounds may be integers or doubles.
    Number(NumberSchema),
    /// An integer node.
    Integer(IntegerSchema),
    /// A boolean node.
    Boolean(BooleanSchema),
    /// A null node.
    Null(NullSchema),
    /// An object node with its properties.
    Object(ObjectSchema),
    /// An array node with its items.
    Array(ArraySchema),
    /// An enumerated-literal node.
    Enum(EnumSchema),
    /// Valid against every child.
    AllOf(AllOfSchema),
    /// Valid against at least one child.
    AnyOf(AnyOfSchema),
    /// Valid against exactly one child.
    OneOf(OneOfSchema),
    /// Valid when the child does not match.
    Not(NotSchema),
}

impl Schema {
    /// Renders this node's JSON Schema fragment, without `$schema`.
    ///
    /// Rendering never mutates the node, so repeated calls produce identical
    /// output.
    pub fn to_fragment(&self) -> Value {
        match self {
            Self::String(s) => s.to_fragment(),
            Self::Number(s) => s.to_fragment(),
            Self::Integer(s) => s.to_fragment(),
            Self::Boolean(s) => s.to_fragment(),
            Self::Null(s) => s.to_fragment(),
            Self::Object(s) => s.to_fragment(),
            Self::Array(s) => s.to_fragment(),
            Self::Enum(s) => s.to_fragment(),
            Self::AllOf(s) => s.to_fragment(),
            Self::AnyOf(s) => s.to_fragment(),
            Self::OneOf(s) => s.to_fragment(),
            Self::Not(s) => s.to_fragment(),
        }
    }

    /// Whether a parent object must list this node's key in `required`.
    pub fn is_required(&self) -> bool {
        match self {
            Self::String(s) => s.is_required(),
            Self::Number(s) => s.is_required(),
            Self::Integer(s) => s.is_required(),
            Self::Boolean(s) => s.is_required(),
            Self::Null(s) => s.is_required(),
            Self::Object(s) => s.is_required(),
            Self::Array(s) => s.is_required(),
            Self::Enum(s) => s.is_required(),
            Self::AllOf(s) => s.is_required(),
            Self::AnyOf(s) => s.is_required(),
            Self::OneOf(s) => s.is_required(),
            Self::Not(s) => s.is_required(),
        }
    }

    /// Returns the node's kind.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String(_) => SchemaKind::String,
            Self::Number(_) => SchemaKind::Number,
            Self::Integer(_) => SchemaKind::Integer,
            Self::Boolean(_) => SchemaKind::Boolean,
            Self::Null(_) => SchemaKind::Null,
            Self::Object(_) => SchemaKind::Object,
            Self::Array(_) => SchemaKind::Array,
            Self::Enum(_) => SchemaKind::Enum,
            Self::AllOf(_) => SchemaKind::AllOf,
            Self::AnyOf(_) => SchemaKind::AnyOf,
            Self::OneOf(_) => SchemaKind::OneOf,
            Self::Not(_) => SchemaKind::Not,
        }
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_fragment().serialize(serializer)
    }
}

macro_rules! impl_from_node {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Schema {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    StringSchema => String,
    NumberSchema => Number,
    IntegerSchema => Integer,
    BooleanSchema => Boolean,
    NullSchema => Null,
    ObjectSchema => Object,
    ArraySchema => Array,
    EnumSchema => Enum,
    AllOfSchema => AllOf,
    AnyOfSchema => AnyOf,
    OneOfSchema => OneOf,
    NotSchema => Not,
}
