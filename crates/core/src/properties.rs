//! Key-value properties file parsing
//!
//! Reads the Java-style `.properties` files Android projects use for local
//! build inputs (`key.properties`, `local.properties`). Supported dialect:
//! `#` and `!` comment lines, `=` or `:` separators, surrounding whitespace
//! trimmed from keys and values, last duplicate wins. Backslash
//! continuations and unicode escapes are not supported.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parsed contents of a properties file
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parse properties from a string
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // Key ends at the first '=' or ':', whichever comes first.
            // A line without a separator is a key with an empty value.
            let split_at = line
                .char_indices()
                .find(|(_, c)| *c == '=' || *c == ':')
                .map(|(i, _)| i);

            let (key, value) = match split_at {
                Some(i) => (line[..i].trim_end(), line[i + 1..].trim_start()),
                None => (line, ""),
            };

            if key.is_empty() {
                continue;
            }

            entries.insert(key.to_string(), value.to_string());
        }

        Self { entries }
    }

    /// Read and parse a properties file
    ///
    /// Fails with `FileNotFound` if the path does not resolve. The file is
    /// read fully and closed before parsing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::io(format!("Failed to read {}: {}", path.display(), e)).with_source(e),
        })?;

        Ok(Self::parse(&content))
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get a value that must be present and non-empty
    ///
    /// Fails with `MissingKey` naming the key; an empty value counts as
    /// missing.
    pub fn get_required(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::missing_key(key)),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file defined any entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
