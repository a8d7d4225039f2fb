//! Render configuration example.
//!
//! Writes a YAML render configuration, loads it back and uses it to emit a
//! schema document with a `$id` and pretty-printed output.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p schema-builder-examples --example render_config
//! ```

use schema_builder_core::{
    NotSchema, ObjectSchema, OneOfSchema, RenderConfig, Result, Schema, StringSchema,
    to_json_string,
};

fn main() -> Result<()> {
    let dir = std::env::temp_dir().join("schema_builder_example_config");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("render.yml");

    RenderConfig::default()
        .with_id("https://example.com/identifier.schema.json")
        .pretty()
        .save(&path)?;

    let config = RenderConfig::load(&path)?;
    println!("Loaded config from {}: {config:?}", path.display());
    println!();

    let identifier = OneOfSchema::builder()
        .with_schema(StringSchema::builder().with_pattern("^[0-9a-f]{32}$").build())
        .with_schema(
            ObjectSchema::builder()
                .with_property("namespace", StringSchema::builder().with_required().build())
                .with_property("key", StringSchema::builder().with_required().build())
                .with_additional_properties(false)
                .build(),
        )
        .build();

    let not_blank = NotSchema::builder()
        .with_not(StringSchema::builder().with_max_length(0)?.build())
        .build();

    println!("{}", to_json_string(&Schema::from(identifier), &config)?);
    println!("{}", to_json_string(&Schema::from(not_blank), &RenderConfig::default())?);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
