//! The values a response can be built from.

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::domain_error::DomainError;

/// Capability implemented by domain records that carry their own validation
/// state.
///
/// # Examples
/// ```
/// use api_response::Validatable;
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct Post {
///     title: String,
/// }
///
/// impl Validatable for Post {
///     fn error_messages(&self) -> Vec<String> {
///         if self.title.is_empty() {
///             vec!["title can't be blank".to_owned()]
///         } else {
///             Vec::new()
///         }
///     }
///
///     fn attributes(&self) -> Value {
///         json!({ "title": self.title })
///     }
/// }
///
/// let post: Box<dyn Validatable> = Box::new(Post { title: String::new() });
/// assert!(!post.is_valid());
/// ```
pub trait Validatable: fmt::Debug + Send + Sync {
    /// Human-readable validation failures; empty when the record is valid.
    fn error_messages(&self) -> Vec<String>;

    /// Wire form used when no serializer is configured.
    fn attributes(&self) -> Value;
}

impl dyn Validatable {
    /// Whether the record passed validation, i.e. reports no error messages.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error_messages().is_empty()
    }
}

/// A single serialisable item: a plain JSON value or a validatable record.
#[derive(Debug)]
pub enum Entry {
    /// A plain value passed through as-is.
    Value(Value),
    /// A domain record exposing validation state.
    Record(Box<dyn Validatable>),
}

impl Entry {
    /// Wrap a domain record.
    pub fn record<R>(record: R) -> Self
    where
        R: Validatable + 'static,
    {
        Self::Record(Box::new(record))
    }

    /// The entry's own wire form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Record(record) => record.attributes(),
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Everything [`build_response`](crate::build_response) knows how to
/// classify.
#[derive(Debug)]
pub enum Resource {
    /// A single value or record.
    Object(Entry),
    /// An ordered sequence of items, possibly empty.
    Collection(Vec<Entry>),
    /// A catalogued failure.
    DomainError(DomainError),
    /// Any other error.
    Error(Box<dyn StdError + Send + Sync>),
}

impl Resource {
    /// Wrap a domain record as a single resource.
    pub fn record<R>(record: R) -> Self
    where
        R: Validatable + 'static,
    {
        Self::Object(Entry::record(record))
    }

    /// Build a collection from anything convertible into entries.
    pub fn collection<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        Self::Collection(items.into_iter().map(Into::into).collect())
    }

    /// Wrap an arbitrary error.
    ///
    /// A boxed [`DomainError`] is recognised and unwrapped so its catalogued
    /// status survives the type erasure.
    pub fn error<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        match error.into().downcast::<DomainError>() {
            Ok(domain) => Self::DomainError(*domain),
            Err(other) => Self::Error(other),
        }
    }

    /// The catalogued error carried by this resource, if any.
    ///
    /// Looks through [`Resource::Error`] as well, so a boxed [`DomainError`]
    /// built without [`Resource::error`] is still recognised.
    #[must_use]
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            Self::DomainError(error) => Some(error),
            Self::Error(error) => error.downcast_ref::<DomainError>(),
            Self::Object(_) | Self::Collection(_) => None,
        }
    }
}

impl From<Value> for Resource {
    /// JSON arrays become collections; every other value is a single object.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::collection(items),
            other => Self::Object(Entry::Value(other)),
        }
    }
}

impl From<Entry> for Resource {
    fn from(entry: Entry) -> Self {
        Self::Object(entry)
    }
}

impl From<DomainError> for Resource {
    fn from(error: DomainError) -> Self {
        Self::DomainError(error)
    }
}
