//! Envelope assembly.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::classify::Classification;
use crate::config::ResponseConfig;
use crate::data::serialize_body;
use crate::error::BuildError;
use crate::messages::{Messages, collect_messages};
use crate::resource::Resource;
use crate::status::{Status, resolve_status, resolve_status_code, status_code_serde};

/// Request parameters forwarded alongside the resource. Currently unused.
pub type Params = Map<String, Value>;

const TOTAL_COUNT_KEY: &str = "total_count";

/// The canonical response envelope.
///
/// `status`, `status_code` and `meta` are always present; `messages` and
/// `body` are omitted from the wire form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    status: Status,
    #[serde(with = "status_code_serde")]
    status_code: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    messages: Option<Messages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
    #[serde(default)]
    meta: Map<String, Value>,
}

impl Envelope {
    /// Coarse outcome.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// HTTP status the transport layer should emit.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Structured messages, present only for failures.
    #[must_use]
    pub const fn messages(&self) -> Option<&Messages> {
        self.messages.as_ref()
    }

    /// Shortcut for `messages.errors`.
    #[must_use]
    pub fn errors(&self) -> Option<&[String]> {
        self.messages.as_ref().map(|messages| messages.errors.as_slice())
    }

    /// Serialised body, present only for successes.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Merged metadata.
    #[must_use]
    pub const fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }
}

/// Build the envelope for `resource`.
///
/// The resource is classified once; status, status code, messages and body
/// are then derived independently from that classification. `params` is
/// accepted for callers that thread request parameters through, but nothing
/// reads it.
///
/// Metadata starts with `total_count` when the configuration carries a
/// count, and the configured `meta` is merged on top, so an explicit
/// `total_count` in `meta` wins.
///
/// # Errors
///
/// Returns [`BuildError::Serialization`] when the configured serializer
/// fails. Classification itself never fails.
pub fn build_response(
    resource: &Resource,
    config: &ResponseConfig,
    _params: &Params,
) -> Result<Envelope, BuildError> {
    let class = Classification::of(resource);
    let status = resolve_status(&class);
    let status_code = resolve_status_code(&class);
    let messages = collect_messages(resource, &class);
    let body = serialize_body(resource, &class, config)?;
    let meta = merge_meta(config);

    debug!(
        ?status,
        status_code = status_code.as_u16(),
        collection = class.is_collection(),
        has_body = body.is_some(),
        "response envelope built"
    );

    Ok(Envelope {
        status,
        status_code,
        messages,
        body,
        meta,
    })
}

fn merge_meta(config: &ResponseConfig) -> Map<String, Value> {
    let mut meta = Map::new();
    if let Some(count) = config.count() {
        meta.insert(TOTAL_COUNT_KEY.to_owned(), Value::from(count));
    }
    for (key, value) in config.meta() {
        meta.insert(key.clone(), value.clone());
    }
    meta
}
