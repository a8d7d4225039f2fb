//! Person schema example.
//!
//! Builds a nested object schema with required properties, a schema
//! dependency, tuple validation and composition, then prints the draft-07
//! document.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p schema-builder-examples --example person_schema
//! ```

use schema_builder_core::{
    AnyOfSchema, ArraySchema, EnumSchema, IntegerSchema, NullSchema, NumberSchema, ObjectSchema,
    Result, Schema, StringSchema, render,
};

fn main() -> Result<()> {
    let person = build_person()?;

    let document = render(&person);
    println!("{}", serde_json::to_string_pretty(&document)?);
    println!();

    // The same tree embeds cleanly as a sub-schema: no `$schema` at depth.
    let roster = ArraySchema::builder()
        .with_item(person)
        .with_min_items(1)?
        .build();
    println!("Roster fragment:");
    println!("{}", serde_json::to_string_pretty(&roster.to_fragment())?);

    Ok(())
}

fn build_person() -> Result<Schema> {
    let location = ArraySchema::builder()
        .with_title("Coordinates")
        .with_item_tuple([
            NumberSchema::builder().with_minimum(-90).with_maximum(90).build(),
            NumberSchema::builder().with_minimum(-180).with_maximum(180).build(),
        ])
        .with_additional_items(false)
        .build();

    let billing = ObjectSchema::builder()
        .with_property("billing_address", StringSchema::builder().with_required().build())
        .build();

    let person = ObjectSchema::builder()
        .with_title("Person")
        .with_property(
            "name",
            StringSchema::builder()
                .with_min_length(1)?
                .with_required()
                .build(),
        )
        .with_property(
            "age",
            IntegerSchema::builder()
                .with_minimum(0)
                .with_exclusive_maximum(150)
                .build(),
        )
        .with_property(
            "role",
            EnumSchema::builder()
                .with_values(["admin", "member", "guest"])
                .with_required()
                .build(),
        )
        .with_property(
            "nickname",
            AnyOfSchema::builder()
                .with_schema(StringSchema::builder().build())
                .with_schema(NullSchema::builder().build())
                .build(),
        )
        .with_property("location", location)
        .with_property("credit_card", StringSchema::builder().with_pattern("^[0-9]{16}$").build())
        .with_schema_dependency("credit_card", billing)
        .with_property_names("^[a-z_]+$")
        .with_additional_properties(false)
        .build();

    Ok(person.into())
}
