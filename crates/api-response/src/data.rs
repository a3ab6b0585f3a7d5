//! Body serialisation.
//!
//! The crate does not own a serialisation engine. It hands entries to a
//! [`Serializer`] collaborator, falling back to [`PassThrough`] when the
//! configuration does not name one.

use serde_json::{Map, Value};

use crate::classify::Classification;
use crate::config::ResponseConfig;
use crate::error::SerializeError;
use crate::resource::{Entry, Resource};

/// Read-only view of the configuration handed to serializers.
#[derive(Debug, Clone, Copy)]
pub struct SerializationContext<'a> {
    count: Option<u64>,
    meta: &'a Map<String, Value>,
}

impl<'a> SerializationContext<'a> {
    pub(crate) fn new(config: &'a ResponseConfig) -> Self {
        Self {
            count: config.count(),
            meta: config.meta(),
        }
    }

    /// Total item count supplied with the configuration.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Caller-supplied metadata.
    #[must_use]
    pub const fn meta(&self) -> &'a Map<String, Value> {
        self.meta
    }
}

/// Turns entries into their wire form.
pub trait Serializer: Send + Sync {
    /// Serialise a single entry.
    ///
    /// # Errors
    ///
    /// Implementations decide what they cannot serialise; the error reaches
    /// the caller of [`build_response`](crate::build_response) unchanged.
    fn serialize(
        &self,
        entry: &Entry,
        context: &SerializationContext<'_>,
    ) -> Result<Value, SerializeError>;

    /// Serialise a sequence, preserving its order.
    ///
    /// # Errors
    ///
    /// Stops at the first entry that fails to serialise.
    fn serialize_collection(
        &self,
        entries: &[Entry],
        context: &SerializationContext<'_>,
    ) -> Result<Vec<Value>, SerializeError> {
        entries
            .iter()
            .map(|entry| self.serialize(entry, context))
            .collect()
    }
}

/// Serializer that returns each entry's own wire form unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl Serializer for PassThrough {
    fn serialize(
        &self,
        entry: &Entry,
        _context: &SerializationContext<'_>,
    ) -> Result<Value, SerializeError> {
        Ok(entry.to_value())
    }
}

/// Serialise the envelope body.
///
/// `None` for errors and invalid records, and when a single object
/// serialises to JSON `null`.
pub(crate) fn serialize_body(
    resource: &Resource,
    class: &Classification,
    config: &ResponseConfig,
) -> Result<Option<Value>, SerializeError> {
    if class.is_any_error() || class.has_validation_errors() {
        return Ok(None);
    }

    let serializer: &dyn Serializer = match config.serializer() {
        Some(configured) => configured,
        None => &PassThrough,
    };
    let context = SerializationContext::new(config);

    match resource {
        Resource::Collection(entries) => serializer
            .serialize_collection(entries, &context)
            .map(|items| Some(Value::Array(items))),
        Resource::Object(entry) => serializer
            .serialize(entry, &context)
            .map(|value| (!value.is_null()).then_some(value)),
        Resource::DomainError(_) | Resource::Error(_) => Ok(None),
    }
}
