//! Redacting wrapper for secret material
//!
//! Passwords loaded from the key properties file pass through `Secret`,
//! which keeps them out of Debug output, error messages, and serialized
//! reports. The raw value is only reachable through an explicit accessor.

use serde::{Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "[hidden]";

/// A secret string that renders redacted everywhere except [`Secret::expose`]
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw value
    ///
    /// Callers hand this to the signing stage; it must not be logged.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}
