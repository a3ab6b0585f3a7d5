//! Shape classification for resources.
//!
//! Every envelope field is derived from a single [`Classification`], so the
//! status, status code, messages and body can never disagree about what the
//! resource is.

use http::StatusCode;

use crate::resource::{Entry, Resource};

/// Answers to the fixed set of shape questions asked of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    validated_object: bool,
    validation_errors: bool,
    collection: bool,
    domain_status: Option<StatusCode>,
    other_error: bool,
}

impl Classification {
    /// Classify `resource`.
    #[must_use]
    pub fn of(resource: &Resource) -> Self {
        match resource {
            Resource::Object(Entry::Record(record)) => Self {
                validated_object: true,
                validation_errors: !record.error_messages().is_empty(),
                ..Self::default()
            },
            Resource::Object(Entry::Value(_)) => Self::default(),
            Resource::Collection(_) => Self {
                collection: true,
                ..Self::default()
            },
            Resource::DomainError(_) | Resource::Error(_) => match resource.domain_error() {
                Some(error) => Self {
                    domain_status: Some(error.status_code()),
                    ..Self::default()
                },
                None => Self {
                    other_error: true,
                    ..Self::default()
                },
            },
        }
    }

    /// The resource is a single validatable record.
    #[must_use]
    pub const fn is_validated_object(&self) -> bool {
        self.validated_object
    }

    /// The resource is a validatable record that failed validation.
    #[must_use]
    pub const fn has_validation_errors(&self) -> bool {
        self.validation_errors
    }

    /// The resource is an ordered sequence.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.collection
    }

    /// The resource is a catalogued domain error.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        self.domain_status.is_some()
    }

    /// Status carried by the domain error, when there is one.
    #[must_use]
    pub const fn domain_status(&self) -> Option<StatusCode> {
        self.domain_status
    }

    /// The resource is an error outside the catalogue.
    #[must_use]
    pub const fn is_other_error(&self) -> bool {
        self.other_error
    }

    /// The resource is an error of either kind.
    #[must_use]
    pub const fn is_any_error(&self) -> bool {
        self.is_domain_error() || self.is_other_error()
    }
}
