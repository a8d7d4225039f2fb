//! Error types for schema construction and rendering.
//!
//! Builder precondition failures are reported as
//! [`InvalidArgument`](SchemaError::InvalidArgument) at the offending setter.
//! The remaining variants cover text serialization and render configuration
//! loading.

use thiserror::Error;

/// Errors that can occur while building or rendering schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A builder setter received a value that violates its precondition
    /// (negative length/size bound, non-positive `multipleOf`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Fails with [`SchemaError::InvalidArgument`] when `value` is negative.
pub(crate) fn non_negative(keyword: &str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| SchemaError::InvalidArgument(format!("{keyword} must be non-negative")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative("minLength", 0).unwrap(), 0);
        assert_eq!(non_negative("minLength", 7).unwrap(), 7);
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = non_negative("maxItems", -1).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: maxItems must be non-negative");
    }
}
