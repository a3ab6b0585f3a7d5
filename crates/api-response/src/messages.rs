//! Structured message collection for failed resources.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::Classification;
use crate::domain_error::{DomainError, ErrorKind};
use crate::resource::{Entry, Resource};

/// The envelope's `messages` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Human-readable failure messages.
    pub errors: Vec<String>,
}

impl Messages {
    fn errors(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

/// Collect messages for `resource`; `None` when nothing went wrong.
///
/// Uncatalogued errors are re-expressed as an internal server error whose
/// message is the original error's text.
pub(crate) fn collect_messages(resource: &Resource, class: &Classification) -> Option<Messages> {
    if class.is_domain_error() {
        return resource
            .domain_error()
            .map(|error| Messages::errors(error.full_messages()));
    }
    if class.has_validation_errors() {
        return match resource {
            Resource::Object(Entry::Record(record)) => {
                Some(Messages::errors(record.error_messages()))
            }
            _ => None,
        };
    }
    if class.is_other_error() {
        return match resource {
            Resource::Error(error) => {
                warn!(error = %error, "unexpected error normalised to internal server error");
                let normalised =
                    DomainError::with_message(ErrorKind::InternalServerError, error.to_string());
                Some(Messages::errors(normalised.full_messages()))
            }
            _ => None,
        };
    }
    None
}
