use schema_builder_core::{
    AllOfSchema, AnyOfSchema, ArraySchema, BooleanSchema, DRAFT_07, EnumSchema, IntegerSchema,
    NotSchema, NullSchema, NumberSchema, ObjectSchema, OneOfSchema, RenderConfig, Schema,
    SchemaError, StringSchema, render, render_with, to_json_string,
};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn string() -> StringSchema {
    StringSchema::builder().build()
}

fn assert_invalid<T>(result: Result<T, SchemaError>) {
    match result {
        Err(SchemaError::InvalidArgument(_)) => {}
        Err(other) => panic!("expected invalid argument, got {other}"),
        Ok(_) => panic!("expected invalid argument, got a builder"),
    }
}

fn person_schema() -> Schema {
    let billing = ObjectSchema::builder()
        .with_property("billing_address", StringSchema::builder().with_required().build())
        .build();

    ObjectSchema::builder()
        .with_title("Person")
        .with_description("A person record")
        .with_property(
            "name",
            StringSchema::builder()
                .with_min_length(1)
                .unwrap()
                .with_max_length(100)
                .unwrap()
                .with_required()
                .build(),
        )
        .with_property(
            "age",
            IntegerSchema::builder()
                .with_minimum(0)
                .with_maximum(150)
                .build(),
        )
        .with_property("credit_card", NumberSchema::builder().build())
        .with_property(
            "nickname",
            AnyOfSchema::builder()
                .with_schema(string())
                .with_schema(NullSchema::builder().build())
                .with_required()
                .build(),
        )
        .with_property(
            "tags",
            ArraySchema::builder()
                .with_item(string())
                .with_unique_items(true)
                .build(),
        )
        .with_pattern_property("^x-", BooleanSchema::builder().build())
        .with_schema_dependency("credit_card", billing)
        .with_additional_properties(false)
        .build()
        .into()
}

// ---------------------------------------------------------------------------
// Document rendering
// ---------------------------------------------------------------------------

#[test]
fn test_document_wraps_fragment() {
    let root = Schema::from(string());
    assert_eq!(
        render(&root),
        json!({"$schema": "http://json-schema.org/draft-07/schema#", "type": "string"})
    );
    assert_eq!(root.to_fragment(), json!({"type": "string"}));
}

#[test]
fn test_every_kind_renders_as_document() {
    let roots: Vec<Schema> = vec![
        string().into(),
        NumberSchema::builder().build().into(),
        IntegerSchema::builder().build().into(),
        BooleanSchema::builder().build().into(),
        NullSchema::builder().build().into(),
        ObjectSchema::builder().build().into(),
        ArraySchema::builder().build().into(),
        EnumSchema::builder().build().into(),
        AllOfSchema::builder().build().into(),
        AnyOfSchema::builder().build().into(),
        OneOfSchema::builder().build().into(),
        NotSchema::builder().build().into(),
    ];

    for root in &roots {
        let document = render(root);
        assert_eq!(document["$schema"], json!(DRAFT_07), "{:?}", root.kind());
        assert!(root.to_fragment().get("$schema").is_none());
    }
}

#[test]
fn test_full_document() {
    let expected = json!({
        "$schema": DRAFT_07,
        "type": "object",
        "title": "Person",
        "description": "A person record",
        "properties": {
            "age": {"type": "integer", "minimum": 0, "maximum": 150},
            "credit_card": {"type": "number"},
            "name": {"type": "string", "minLength": 1, "maxLength": 100},
            "nickname": {"anyOf": [{"type": "string"}, {"type": "null"}]},
            "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true}
        },
        "patternProperties": {
            "^x-": {"type": "boolean"}
        },
        "dependencies": {
            "credit_card": {
                "properties": {"billing_address": {"type": "string"}},
                "required": ["billing_address"]
            }
        },
        "required": ["name", "nickname"],
        "additionalProperties": false
    });
    assert_eq!(render(&person_schema()), expected);
}

#[test]
fn test_rendering_is_idempotent() {
    let root = person_schema();
    let first = to_json_string(&root, &RenderConfig::default()).unwrap();
    let second = to_json_string(&root, &RenderConfig::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(root.to_fragment(), root.to_fragment());
}

#[test]
fn test_render_with_id_and_pretty_text() {
    let root = Schema::from(BooleanSchema::builder().build());
    let config = RenderConfig::default().with_id("urn:flag").pretty();

    let document = render_with(&root, &config);
    assert_eq!(
        document,
        json!({"$schema": DRAFT_07, "$id": "urn:flag", "type": "boolean"})
    );

    let text = to_json_string(&root, &config).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, document);
    assert!(text.contains('\n'));
}

// ---------------------------------------------------------------------------
// Required flag
// ---------------------------------------------------------------------------

#[test]
fn test_required_flag() {
    assert!(Schema::from(StringSchema::builder().with_required().build()).is_required());
    assert!(!Schema::from(string()).is_required());
    assert!(Schema::from(NotSchema::builder().with_required().build()).is_required());
    assert!(Schema::from(EnumSchema::builder().with_required().build()).is_required());
}

#[test]
fn test_object_without_required_children_omits_required() {
    let schema = ObjectSchema::builder()
        .with_property("foo", string())
        .with_pattern_property("^b", string())
        .build();
    assert!(schema.to_fragment().get("required").is_none());
}

#[test]
fn test_shared_child_contributes_to_each_parent() {
    let id = Schema::from(StringSchema::builder().with_required().build());
    let left = ObjectSchema::builder().with_property("left_id", id.clone()).build();
    let right = ObjectSchema::builder().with_property("right_id", id).build();

    assert_eq!(left.to_fragment()["required"], json!(["left_id"]));
    assert_eq!(right.to_fragment()["required"], json!(["right_id"]));
}

#[test]
fn test_required_on_nested_object_reported_to_grandparent_only_through_parent() {
    let inner = ObjectSchema::builder()
        .with_property("leaf", StringSchema::builder().with_required().build())
        .with_required()
        .build();
    let outer = ObjectSchema::builder().with_property("inner", inner).build();

    let fragment = outer.to_fragment();
    assert_eq!(fragment["required"], json!(["inner"]));
    assert_eq!(fragment["properties"]["inner"]["required"], json!(["leaf"]));
}

// ---------------------------------------------------------------------------
// Enum fallbacks
// ---------------------------------------------------------------------------

#[test]
fn test_enum_round_trips() {
    let letters = EnumSchema::builder().with_value("A").with_value("B").build();
    assert_eq!(letters.to_fragment(), json!({"enum": ["A", "B"]}));

    assert_eq!(EnumSchema::builder().build().to_fragment(), json!({"enum": [null]}));
    assert_eq!(
        EnumSchema::builder().with_null().build().to_fragment(),
        json!({"enum": [null]})
    );
}

// ---------------------------------------------------------------------------
// Mutual exclusion
// ---------------------------------------------------------------------------

#[test]
fn test_item_then_tuple_renders_tuple_only() {
    let schema = ArraySchema::builder()
        .with_item(BooleanSchema::builder().build())
        .with_item_tuple([
            Schema::from(NumberSchema::builder().build()),
            Schema::from(string()),
        ])
        .build();
    assert_eq!(
        schema.to_fragment(),
        json!({"type": "array", "items": [{"type": "number"}, {"type": "string"}]})
    );
}

#[test]
fn test_property_then_schema_dependency() {
    let schema = ObjectSchema::builder()
        .with_property_dependency("a", "b")
        .with_schema_dependency(
            "a",
            ObjectSchema::builder()
                .with_property("b", StringSchema::builder().with_required().build())
                .build(),
        )
        .build();
    assert_eq!(
        schema.to_fragment()["dependencies"],
        json!({"a": {"properties": {"b": {"type": "string"}}, "required": ["b"]}})
    );
}

#[test]
fn test_number_keyword_last_assignment_wins() {
    let schema = NumberSchema::builder()
        .with_multiple_of(2)
        .unwrap()
        .with_multiple_of(0.1)
        .unwrap()
        .with_exclusive_minimum(0.5)
        .with_exclusive_minimum(1)
        .build();
    assert_eq!(
        schema.to_fragment(),
        json!({"type": "number", "multipleOf": 0.1, "exclusiveMinimum": 1})
    );
}

// ---------------------------------------------------------------------------
// Precondition failures
// ---------------------------------------------------------------------------

#[test]
fn test_negative_bounds_rejected() {
    assert_invalid(ArraySchema::builder().with_min_items(-1));
    assert_invalid(ArraySchema::builder().with_max_items(-1));
    assert_invalid(StringSchema::builder().with_min_length(-1));
    assert_invalid(StringSchema::builder().with_max_length(-1));
    assert_invalid(ObjectSchema::builder().with_min_properties(-1));
    assert_invalid(ObjectSchema::builder().with_max_properties(-1));
}

#[test]
fn test_non_positive_multiple_of_rejected() {
    assert_invalid(NumberSchema::builder().with_multiple_of(0));
    assert_invalid(NumberSchema::builder().with_multiple_of(-3.5));
    assert_invalid(IntegerSchema::builder().with_multiple_of(0));
    assert_invalid(IntegerSchema::builder().with_multiple_of(-1));
}

#[test]
fn test_error_propagates_with_question_mark() {
    fn build() -> schema_builder_core::Result<StringSchema> {
        Ok(StringSchema::builder().with_min_length(3)?.with_max_length(-2)?.build())
    }

    let err = build().unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: maxLength must be non-negative");
}
