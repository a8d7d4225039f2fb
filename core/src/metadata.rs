//! Annotation keywords shared by the non-composition schema kinds.

use serde_json::{Map, Value};

/// Access annotation. `readOnly` and `writeOnly` never appear together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Emits `"readOnly": true`.
    ReadOnly,
    /// Emits `"writeOnly": true`.
    WriteOnly,
}

/// `title`, `description`, `readOnly` and `writeOnly`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Short human-readable title.
    pub title: Option<String>,
    /// Longer explanation of the schema's purpose.
    pub description: Option<String>,
    /// Read/write access annotation.
    pub access: Option<Access>,
}

impl Metadata {
    /// Appends the annotations that are set, in keyword order.
    pub(crate) fn write_into(&self, json: &mut Map<String, Value>) {
        if let Some(title) = &self.title {
            json.insert("title".into(), Value::from(title.as_str()));
        }
        if let Some(description) = &self.description {
            json.insert("description".into(), Value::from(description.as_str()));
        }
        match self.access {
            Some(Access::ReadOnly) => {
                json.insert("readOnly".into(), Value::Bool(true));
            }
            Some(Access::WriteOnly) => {
                json.insert("writeOnly".into(), Value::Bool(true));
            }
            None => {}
        }
    }
}

/// Expands to the `with_title`/`with_description`/`with_read_only`/
/// `with_write_only` setters inside a builder `impl` block. The builder must
/// have a `metadata: Metadata` field.
macro_rules! metadata_setters {
    () => {
        /// Sets the `title` annotation.
        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.metadata.title = Some(title.into());
            self
        }

        /// Sets the `description` annotation.
        pub fn with_description(mut self, description: impl Into<String>) -> Self {
            self.metadata.description = Some(description.into());
            self
        }

        /// Marks the value as read-only, clearing any `writeOnly`.
        pub fn with_read_only(mut self) -> Self {
            self.metadata.access = Some($crate::metadata::Access::ReadOnly);
            self
        }

        /// Marks the value as write-only, clearing any `readOnly`.
        pub fn with_write_only(mut self) -> Self {
            self.metadata.access = Some($crate::metadata::Access::WriteOnly);
            self
        }
    };
}

pub(crate) use metadata_setters;
