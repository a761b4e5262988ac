//! Static configuration validation
//!
//! Malformed identity or version fields abort the build before anything
//! is packaged; a release must never ship with an inconsistent identity.

use super::schema::BuildConfig;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Reverse-DNS package name, two or more dot-separated Java identifiers
static PACKAGE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").unwrap()
});

/// Validate a build configuration, failing on the first malformed field
pub fn validate(config: &BuildConfig) -> Result<()> {
    if !PACKAGE_ID.is_match(&config.application_id) {
        return Err(
            Error::invalid_value("application_id", "not a valid package name")
                .with_suggestion("Use a reverse-DNS identifier like com.example.app"),
        );
    }

    if !PACKAGE_ID.is_match(&config.namespace) {
        return Err(Error::invalid_value("namespace", "not a valid package name"));
    }

    if config.version_code < 1 {
        return Err(Error::invalid_value("version_code", "must be at least 1"));
    }

    if config.version_name.trim().is_empty() {
        return Err(Error::invalid_value("version_name", "must not be empty"));
    }

    if config.min_sdk > config.target_sdk {
        return Err(Error::invalid_value(
            "min_sdk",
            format!(
                "exceeds target_sdk ({} > {})",
                config.min_sdk, config.target_sdk
            ),
        ));
    }

    if config.target_sdk > config.compile_sdk {
        return Err(Error::invalid_value(
            "target_sdk",
            format!(
                "exceeds compile_sdk ({} > {})",
                config.target_sdk, config.compile_sdk
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&BuildConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_application_id() {
        let config = BuildConfig {
            application_id: "no-dots".to_string(),
            ..BuildConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidValue);
        assert!(err.message.contains("application_id"));
    }

    #[test]
    fn test_rejects_leading_digit_segment() {
        let config = BuildConfig {
            application_id: "com.1app.example".to_string(),
            ..BuildConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_version_code() {
        let config = BuildConfig {
            version_code: 0,
            ..BuildConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.message.contains("version_code"));
    }

    #[test]
    fn test_rejects_empty_version_name() {
        let config = BuildConfig {
            version_name: "  ".to_string(),
            ..BuildConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_min_sdk_above_target() {
        let config = BuildConfig {
            min_sdk: 36,
            target_sdk: 35,
            ..BuildConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.message.contains("min_sdk"));
    }

    #[test]
    fn test_rejects_target_sdk_above_compile() {
        let config = BuildConfig {
            target_sdk: 36,
            compile_sdk: 35,
            ..BuildConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.message.contains("target_sdk"));
    }
}
