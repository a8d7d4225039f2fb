//! Render configuration.
//!
//! Controls the document-level keywords added by
//! [`render_with`](crate::render_with) and the text layout produced by
//! [`to_json_string`](crate::to_json_string). Can be loaded from YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! id: "https://example.com/person.schema.json"
//! pretty: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Document rendering options. Missing YAML fields take their defaults.
///
/// # Examples
///
/// ```
/// use schema_builder_core::RenderConfig;
///
/// let config = RenderConfig::default().with_id("urn:example:person").pretty();
/// assert_eq!(config.id.as_deref(), Some("urn:example:person"));
/// assert!(config.pretty);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emitted as the root `$id` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pretty-print text output.
    pub pretty: bool,
}

impl RenderConfig {
    /// Sets the root `$id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Enables pretty-printed text output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::SchemaError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::SchemaError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::SchemaError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::SchemaError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaError;

    #[test]
    fn test_deserialize_complete() {
        let yaml = r#"
id: "https://example.com/person.schema.json"
pretty: true
"#;
        let config: RenderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.id.as_deref(), Some("https://example.com/person.schema.json"));
        assert!(config.pretty);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: RenderConfig = serde_yaml::from_str("pretty: false").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.yml");

        let config = RenderConfig::default().with_id("urn:test").pretty();
        config.save(&path).unwrap();

        let loaded = RenderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "pretty: [not, a, bool]").unwrap();

        let err = RenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
    }
}
