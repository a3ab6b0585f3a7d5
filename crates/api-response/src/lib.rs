//! Normalises application results into one canonical API response envelope.
//!
//! Request handlers hand this crate a single [`Resource`] (a plain value, a
//! collection, a validated record, a catalogued [`DomainError`] or any other
//! error) together with a [`ResponseConfig`]. [`build_response`] classifies the
//! resource once and derives every envelope field from that classification,
//! so callers never branch on the result themselves.
//!
//! # Example
//!
//! ```
//! use api_response::{DomainError, Params, Resource, ResponseConfig, build_response};
//! use serde_json::json;
//!
//! let config = ResponseConfig::default();
//! let params = Params::new();
//!
//! let ok = build_response(&Resource::from(json!({"id": 1})), &config, &params)
//!     .expect("pass-through serialisation cannot fail");
//! assert_eq!(ok.status_code().as_u16(), 200);
//!
//! let missing = build_response(
//!     &Resource::from(DomainError::record_not_found()),
//!     &config,
//!     &params,
//! )
//! .expect("errors never reach the serialiser");
//! assert_eq!(missing.status_code().as_u16(), 404);
//! assert_eq!(missing.errors(), Some(&["Record not found".to_owned()][..]));
//! ```

mod classify;
mod config;
mod data;
mod domain_error;
mod error;
mod localization;
mod messages;
mod resource;
mod response;
mod status;
#[cfg(test)]
mod test_support;

pub use classify::Classification;
pub use config::ResponseConfig;
pub use data::{PassThrough, SerializationContext, Serializer};
pub use domain_error::{CatalogEntry, DomainError, ErrorCatalog, ErrorKind};
pub use error::{BuildError, ConfigError, SerializeError, UnknownErrorKind};
pub use localization::{EnglishMessages, MESSAGE_KEY_PREFIX, MessageResolver, message_key};
pub use messages::Messages;
pub use resource::{Entry, Resource, Validatable};
pub use response::{Envelope, Params, build_response};
pub use status::Status;
