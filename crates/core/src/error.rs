//! Structured error handling with context and recovery suggestions
//!
//! Every fallible operation in the workspace reports through this module:
//! - Numeric error codes grouped by category
//! - Optional context and recovery suggestions
//! - Serializable error reports for `--json` output

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigParseError = 3001,
    InvalidValue = 3002,

    // Signing errors (4xxx)
    SigningError = 4000,
    MissingKey = 4001,
    KeystoreNotFound = 4002,

    // Process errors (5xxx)
    ProcessError = 5000,
    CommandNotFound = 5001,
    CommandFailed = 5002,

    // Gradle errors (6xxx)
    GradleError = 6000,
    GradleTaskFailed = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "Signing",
            5 => "Process",
            6 => "Gradle",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
///
/// Messages name the offending file or key, never secret values.
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    // Convenience constructors

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn invalid_value(field: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidValue,
            format!("Invalid value for '{}': {}", field, message.into()),
        )
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SigningError, message)
    }

    pub fn missing_key(key: &str) -> Self {
        Self::new(
            ErrorCode::MissingKey,
            format!("Required signing property '{}' is missing or empty", key),
        )
        .with_suggestion(format!(
            "Add a non-empty '{}' entry to the key properties file",
            key
        ))
    }

    pub fn keystore_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::KeystoreNotFound,
            format!("Keystore file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Generate a release keystore with keytool or fix the storeFile entry")
    }

    pub fn process(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProcessError, message)
    }

    pub fn command_not_found(cmd: &str) -> Self {
        Self::new(
            ErrorCode::CommandNotFound,
            format!("Command not found: {}", cmd),
        )
        .with_suggestion(format!("Install {} and ensure it's in your PATH", cmd))
    }

    pub fn gradle(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GradleError, message)
    }
}

/// Serializable error report for logging and `--json` output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const SIGNING_ERROR: i32 = 3;
    pub const GRADLE_ERROR: i32 = 4;
    pub const COMMAND_NOT_FOUND: i32 = 127;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("TOML parse error: {}", err),
        )
        .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::MissingKey.to_string(), "E4001");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::FileNotFound.category(), "IO");
        assert_eq!(ErrorCode::InvalidValue.category(), "Configuration");
        assert_eq!(ErrorCode::MissingKey.category(), "Signing");
        assert_eq!(ErrorCode::GradleTaskFailed.category(), "Gradle");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::file_not_found("/path/to/key.properties")
            .with_context("While loading signing credentials");

        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let err = Error::missing_key("storePassword");
        assert_eq!(err.code, ErrorCode::MissingKey);
        assert!(err.message.contains("storePassword"));
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::missing_key("keyAlias").with_context("During release configuration");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E4001"));
        assert!(json.contains("Signing"));
    }
}
