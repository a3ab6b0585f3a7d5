//! Coarse status and HTTP status code resolution.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::classify::Classification;

/// Coarse outcome reported in the envelope's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The resource represents a successful result.
    Success,
    /// The resource represents a validation, domain or unexpected failure.
    Failure,
}

pub(crate) const fn resolve_status(class: &Classification) -> Status {
    if class.has_validation_errors() || class.is_domain_error() || class.is_other_error() {
        Status::Failure
    } else {
        Status::Success
    }
}

/// Priority chain; the first matching rule wins.
///
/// Validation failures are checked before domain errors, and uncatalogued
/// errors always collapse to 500 so their native codes never reach clients.
pub(crate) const fn resolve_status_code(class: &Classification) -> StatusCode {
    if class.has_validation_errors() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    if let Some(status) = class.domain_status() {
        return status;
    }
    if class.is_other_error() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::OK
}

/// Serde adapter writing [`StatusCode`] as its numeric value.
pub(crate) mod status_code_serde {
    use http::StatusCode;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) fn serialize<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(status.as_u16())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u16::deserialize(deserializer)?;
        StatusCode::from_u16(raw).map_err(de::Error::custom)
    }
}
