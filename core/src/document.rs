//! Standalone document rendering.
//!
//! Only these functions add `$schema` (and optionally `$id`). Fragments
//! embedded under `items`, `not`, `dependencies` and so on never carry them.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::Schema;

/// The draft-07 meta-schema URI.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Renders `root` as a complete draft-07 document.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{render, Schema, StringSchema};
/// use serde_json::json;
///
/// let root = Schema::from(StringSchema::builder().build());
/// assert_eq!(
///     render(&root),
///     json!({"$schema": "http://json-schema.org/draft-07/schema#", "type": "string"})
/// );
/// assert_eq!(root.to_fragment(), json!({"type": "string"}));
/// ```
pub fn render(root: &Schema) -> Value {
    render_with(root, &RenderConfig::default())
}

/// Renders `root` as a complete document, adding `$id` when `config` has
/// one.
pub fn render_with(root: &Schema, config: &RenderConfig) -> Value {
    debug!(kind = root.kind().as_str(), id = ?config.id, "rendering schema document");

    let mut document = Map::new();
    document.insert("$schema".into(), Value::from(DRAFT_07));
    if let Some(id) = &config.id {
        document.insert("$id".into(), Value::from(id.as_str()));
    }
    if let Value::Object(fragment) = root.to_fragment() {
        document.extend(fragment);
    }
    Value::Object(document)
}

/// Renders `root` as a complete document and serializes it to text.
///
/// # Errors
///
/// Returns [`Json`](crate::SchemaError::Json) if serialization fails.
///
/// # Examples
///
/// ```
/// use schema_builder_core::{to_json_string, NullSchema, RenderConfig, Schema};
///
/// let root = Schema::from(NullSchema::builder().build());
/// let text = to_json_string(&root, &RenderConfig::default())?;
/// assert_eq!(text, r#"{"$schema":"http://json-schema.org/draft-07/schema#","type":"null"}"#);
/// # Ok::<(), schema_builder_core::SchemaError>(())
/// ```
pub fn to_json_string(root: &Schema, config: &RenderConfig) -> Result<String> {
    let document = render_with(root, config);
    let text = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(text)
}
