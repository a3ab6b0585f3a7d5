//! Per-call response configuration.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::data::Serializer;
use crate::error::ConfigError;

/// Options recognised in a JSON options object. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseOptions {
    count: Option<u64>,
    meta: Option<Map<String, Value>>,
}

/// Configuration consumed by [`build_response`](crate::build_response).
///
/// # Examples
/// ```
/// use api_response::ResponseConfig;
/// use serde_json::json;
///
/// let config = ResponseConfig::from_options(&json!({
///     "count": 5,
///     "meta": {"page": 2},
///     "each_serializer": "ignored",
/// }))
/// .expect("options are well formed");
/// assert_eq!(config.count(), Some(5));
/// assert_eq!(config.meta().get("page"), Some(&json!(2)));
/// ```
#[derive(Clone, Default)]
pub struct ResponseConfig {
    serializer: Option<Arc<dyn Serializer>>,
    count: Option<u64>,
    meta: Map<String, Value>,
}

impl ResponseConfig {
    /// Empty configuration: pass-through serialisation, no count, no meta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `count` and `meta` from a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] when `options` is not an object
    /// and [`ConfigError::InvalidOptions`] when `count` is not a non-negative
    /// integer or `meta` is not an object.
    pub fn from_options(options: &Value) -> Result<Self, ConfigError> {
        if !options.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_type(options),
            });
        }
        let parsed = ResponseOptions::deserialize(options)?;
        Ok(Self {
            serializer: None,
            count: parsed.count,
            meta: parsed.meta.unwrap_or_default(),
        })
    }

    /// Use `serializer` for the body.
    #[must_use]
    pub fn with_serializer<S>(self, serializer: S) -> Self
    where
        S: Serializer + 'static,
    {
        self.with_shared_serializer(Arc::new(serializer))
    }

    /// Use an already shared serializer for the body.
    #[must_use]
    pub fn with_shared_serializer(mut self, serializer: Arc<dyn Serializer>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Report `count` as the total item count.
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Merge `meta` into the envelope metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = meta;
        self
    }

    /// Configured serializer, if any.
    #[must_use]
    pub fn serializer(&self) -> Option<&dyn Serializer> {
        self.serializer.as_deref()
    }

    /// Total item count, if supplied.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Caller-supplied metadata.
    #[must_use]
    pub const fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }
}

impl fmt::Debug for ResponseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseConfig")
            .field("serializer", &self.serializer.as_ref().map(|_| "<serializer>"))
            .field("count", &self.count)
            .field("meta", &self.meta)
            .finish()
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
