//! Catalogued domain errors.
//!
//! Every recognised failure is one of a fixed set of [`ErrorKind`]s. Each kind
//! carries a stable key and an HTTP status; its default message comes from the
//! process-wide [`ErrorCatalog`], which is resolved once and never mutated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownErrorKind;
use crate::localization::{EnglishMessages, MessageResolver, message_key};

/// Stable identifier for a catalogued failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An unexpected fault inside the application.
    InternalServerError,
    /// The requested record does not exist.
    RecordNotFound,
    /// The record failed validation.
    RecordInvalid,
    /// The record could not be deleted.
    RecordNotDestroyed,
    /// The caller may not access the resource.
    ForbiddenResource,
    /// The caller is not authenticated.
    UnauthorizedAccess,
}

impl ErrorKind {
    /// Every catalogued kind, in catalogue order.
    pub const ALL: [Self; 6] = [
        Self::InternalServerError,
        Self::RecordNotFound,
        Self::RecordInvalid,
        Self::RecordNotDestroyed,
        Self::ForbiddenResource,
        Self::UnauthorizedAccess,
    ];

    /// Stable machine-readable key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InternalServerError => "internal_server_error",
            Self::RecordNotFound => "record_not_found",
            Self::RecordInvalid => "record_invalid",
            Self::RecordNotDestroyed => "record_not_destroyed",
            Self::ForbiddenResource => "forbidden_resource",
            Self::UnauthorizedAccess => "unauthorized_access",
        }
    }

    /// HTTP status reported for this kind.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::RecordInvalid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RecordNotDestroyed | Self::ForbiddenResource => StatusCode::FORBIDDEN,
            Self::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == value)
            .ok_or_else(|| UnknownErrorKind {
                key: value.to_owned(),
            })
    }
}

/// One catalogue row: a kind and its resolved default message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    kind: ErrorKind,
    message: String,
}

impl CatalogEntry {
    /// Kind described by this entry.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable key of the entry.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// Default human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// HTTP status associated with the entry.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

static GLOBAL_CATALOG: LazyLock<ErrorCatalog> =
    LazyLock::new(|| ErrorCatalog::build(&EnglishMessages));

/// Immutable table of default messages, one per [`ErrorKind`].
///
/// # Examples
/// ```
/// use api_response::{ErrorCatalog, ErrorKind};
///
/// let catalog = ErrorCatalog::global();
/// assert_eq!(catalog.message(ErrorKind::RecordNotFound), "Record not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCatalog {
    entries: Vec<CatalogEntry>,
}

impl ErrorCatalog {
    /// Build a catalogue, asking `resolver` once for each entry.
    pub fn build<R>(resolver: &R) -> Self
    where
        R: MessageResolver + ?Sized,
    {
        let entries: Vec<CatalogEntry> = ErrorKind::ALL
            .into_iter()
            .map(|kind| CatalogEntry {
                kind,
                message: resolver.resolve(&message_key(kind.key())),
            })
            .collect();
        debug!(entries = entries.len(), "error catalogue built");
        Self { entries }
    }

    /// Process-wide catalogue backed by [`EnglishMessages`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_CATALOG
    }

    /// All entries in catalogue order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry for `kind`.
    #[must_use]
    pub fn entry(&self, kind: ErrorKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    /// Default message for `kind`, falling back to its key.
    #[must_use]
    pub fn message(&self, kind: ErrorKind) -> &str {
        self.entry(kind).map_or(kind.key(), CatalogEntry::message)
    }

    /// Instantiate `kind` with this catalogue's default message.
    #[must_use]
    pub fn error(&self, kind: ErrorKind) -> DomainError {
        DomainError::from_parts(kind, self.message(kind).to_owned())
    }
}

/// A catalogued failure ready to be reported to clients.
///
/// Messages are grouped by key. Instances built through the constructors
/// below always hold a single key (the kind's) with a single message.
///
/// # Examples
/// ```
/// use api_response::{DomainError, ErrorKind};
///
/// let err = DomainError::with_message(ErrorKind::ForbiddenResource, "not your post");
/// assert_eq!(err.status_code().as_u16(), 403);
/// assert_eq!(err.full_messages(), vec!["not your post".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    kind: ErrorKind,
    messages: BTreeMap<String, Vec<String>>,
}

impl DomainError {
    /// Create an error carrying the catalogue's default message.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        ErrorCatalog::global().error(kind)
    }

    /// Create an error whose message overrides the catalogue default.
    ///
    /// The override is kept verbatim, even when empty.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::from_parts(kind, message.into())
    }

    /// Create an error from a catalogue entry and an optional override.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry, message: Option<String>) -> Self {
        let text = message.unwrap_or_else(|| entry.message().to_owned());
        Self::from_parts(entry.kind(), text)
    }

    fn from_parts(kind: ErrorKind, message: String) -> Self {
        let mut messages = BTreeMap::new();
        messages.insert(kind.key().to_owned(), vec![message]);
        Self { kind, messages }
    }

    /// Kind this error was built from.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status carried by this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// Messages grouped by key.
    #[must_use]
    pub const fn messages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.messages
    }

    /// Every message across all keys, flattened in key order.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.messages.values().flatten().cloned().collect()
    }

    /// Convenience constructor for [`ErrorKind::InternalServerError`].
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::new(ErrorKind::InternalServerError)
    }

    /// Convenience constructor for [`ErrorKind::RecordNotFound`].
    #[must_use]
    pub fn record_not_found() -> Self {
        Self::new(ErrorKind::RecordNotFound)
    }

    /// Convenience constructor for [`ErrorKind::RecordInvalid`].
    #[must_use]
    pub fn record_invalid() -> Self {
        Self::new(ErrorKind::RecordInvalid)
    }

    /// Convenience constructor for [`ErrorKind::RecordNotDestroyed`].
    #[must_use]
    pub fn record_not_destroyed() -> Self {
        Self::new(ErrorKind::RecordNotDestroyed)
    }

    /// Convenience constructor for [`ErrorKind::ForbiddenResource`].
    #[must_use]
    pub fn forbidden_resource() -> Self {
        Self::new(ErrorKind::ForbiddenResource)
    }

    /// Convenience constructor for [`ErrorKind::UnauthorizedAccess`].
    #[must_use]
    pub fn unauthorized_access() -> Self {
        Self::new(ErrorKind::UnauthorizedAccess)
    }
}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

impl std::error::Error for DomainError {}
