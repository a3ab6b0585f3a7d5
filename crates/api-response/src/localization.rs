//! Localised default messages for catalogued domain errors.
//!
//! The error catalogue does not own its copy. It asks a [`MessageResolver`]
//! once per [`ErrorKind`](crate::ErrorKind) while the catalogue is built and
//! keeps the answers for the lifetime of the process.

/// Namespace shared by every catalogue message key.
pub const MESSAGE_KEY_PREFIX: &str = "api_response.messages";

/// Build the lookup key for a catalogue entry (for example
/// `api_response.messages.record_not_found`).
///
/// # Examples
/// ```
/// use api_response::message_key;
///
/// assert_eq!(message_key("record_invalid"), "api_response.messages.record_invalid");
/// ```
#[must_use]
pub fn message_key(entry_key: &str) -> String {
    format!("{MESSAGE_KEY_PREFIX}.{entry_key}")
}

/// Resolves a message key into human-readable text.
pub trait MessageResolver {
    /// Return the text for `key`.
    ///
    /// Implementations should fall back to something printable rather than
    /// fail: a missing translation must not prevent the catalogue from being
    /// built.
    fn resolve(&self, key: &str) -> String;
}

impl<F> MessageResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in English copy for the catalogue.
///
/// Unknown keys resolve to themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishMessages;

impl EnglishMessages {
    fn lookup(key: &str) -> Option<&'static str> {
        let entry_key = key
            .strip_prefix(MESSAGE_KEY_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))?;
        let text = match entry_key {
            "internal_server_error" => "Internal server error",
            "record_not_found" => "Record not found",
            "record_invalid" => "Record invalid",
            "record_not_destroyed" => "Record could not be destroyed",
            "forbidden_resource" => "You are not allowed to access this resource",
            "unauthorized_access" => "Unauthorized access",
            _ => return None,
        };
        Some(text)
    }
}

impl MessageResolver for EnglishMessages {
    fn resolve(&self, key: &str) -> String {
        Self::lookup(key).unwrap_or(key).to_owned()
    }
}
