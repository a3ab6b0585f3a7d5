//! Failure types surfaced by the crate itself.
//!
//! Catalogued application failures live in [`DomainError`](crate::DomainError);
//! the enums here only describe what can go wrong around the pipeline:
//! rejected serialisation, malformed options and unknown catalogue keys.

use thiserror::Error;

/// Errors returned by a [`Serializer`](crate::Serializer) collaborator.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The resource could not be encoded as JSON.
    #[error("failed to encode resource: {0}")]
    Encode(#[from] serde_json::Error),

    /// The serializer refused the resource.
    #[error("serializer rejected resource: {message}")]
    Rejected {
        /// Explanation supplied by the serializer.
        message: String,
    },
}

impl SerializeError {
    /// Convenience constructor for [`SerializeError::Rejected`].
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Errors raised while assembling an envelope.
///
/// Classification never fails; the only way out is a failing serializer,
/// whose error is passed through untouched.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured serializer failed.
    #[error(transparent)]
    Serialization(#[from] SerializeError),
}

/// Errors raised when loading a [`ResponseConfig`](crate::ResponseConfig)
/// from a JSON options object.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options value was not a JSON object.
    #[error("response options must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was supplied instead.
        found: &'static str,
    },

    /// A recognised option had the wrong shape.
    #[error("invalid response options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Returned when a string does not name a catalogued error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind '{key}'")]
pub struct UnknownErrorKind {
    /// The key that failed to parse.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_formats_correctly() {
        let err = SerializeError::rejected("no serializer for drafts");
        assert_eq!(
            err.to_string(),
            "serializer rejected resource: no serializer for drafts"
        );
    }

    #[test]
    fn build_error_is_transparent() {
        let err = BuildError::from(SerializeError::rejected("nope"));
        assert_eq!(err.to_string(), "serializer rejected resource: nope");
    }

    #[test]
    fn not_an_object_formats_correctly() {
        let err = ConfigError::NotAnObject { found: "array" };
        assert_eq!(
            err.to_string(),
            "response options must be a JSON object, found array"
        );
    }

    #[test]
    fn unknown_error_kind_formats_correctly() {
        let err = UnknownErrorKind {
            key: "teapot".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown error kind 'teapot'");
    }
}
