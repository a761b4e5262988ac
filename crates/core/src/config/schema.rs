//! Configuration schema definitions
//!
//! Static build declarations with compile-time defaults. The defaults
//! describe the Boviframe app; a `droidforge.toml` manifest may override
//! any field.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectSchema {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub signing: SigningPaths,
}

/// Application identity and platform parameters
///
/// Immutable after construction; built once per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Application identifier
    #[serde(default = "default_application_id")]
    pub application_id: String,

    /// Resource namespace
    #[serde(default = "default_application_id")]
    pub namespace: String,

    /// Minimum supported SDK level
    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,

    /// SDK level the app targets
    #[serde(default = "default_target_sdk")]
    pub target_sdk: u32,

    /// SDK level the app compiles against
    #[serde(default = "default_compile_sdk")]
    pub compile_sdk: u32,

    /// Monotonically increasing version code
    #[serde(default = "default_version_code")]
    pub version_code: u32,

    /// Human-readable version name
    #[serde(default = "default_version_name")]
    pub version_name: String,

    /// Pinned NDK version, if the project builds native code
    #[serde(default = "default_ndk_version")]
    pub ndk_version: Option<String>,

    /// Java source/target compatibility level
    #[serde(default = "default_java_compatibility")]
    pub java_compatibility: u32,

    /// Kotlin JVM target
    #[serde(default = "default_kotlin_jvm_target")]
    pub kotlin_jvm_target: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            namespace: default_application_id(),
            min_sdk: default_min_sdk(),
            target_sdk: default_target_sdk(),
            compile_sdk: default_compile_sdk(),
            version_code: default_version_code(),
            version_name: default_version_name(),
            ndk_version: default_ndk_version(),
            java_compatibility: default_java_compatibility(),
            kotlin_jvm_target: default_kotlin_jvm_target(),
        }
    }
}

fn default_application_id() -> String {
    "com.app.boviframe".to_string()
}

fn default_min_sdk() -> u32 {
    23
}

fn default_target_sdk() -> u32 {
    35
}

fn default_compile_sdk() -> u32 {
    35
}

fn default_version_code() -> u32 {
    1
}

fn default_version_name() -> String {
    "1.0.1".to_string()
}

fn default_ndk_version() -> Option<String> {
    Some("27.0.12077973".to_string())
}

fn default_java_compatibility() -> u32 {
    11
}

fn default_kotlin_jvm_target() -> String {
    "11".to_string()
}

/// Filesystem locations of signing inputs
///
/// Paths are relative to the project directory. Only the release variant
/// ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningPaths {
    /// Key properties file holding alias and passwords
    #[serde(default = "default_key_properties")]
    pub key_properties: String,
}

impl Default for SigningPaths {
    fn default() -> Self {
        Self {
            key_properties: default_key_properties(),
        }
    }
}

fn default_key_properties() -> String {
    "app/key.properties".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_declarations() {
        let build = BuildConfig::default();
        assert_eq!(build.application_id, "com.app.boviframe");
        assert_eq!(build.namespace, build.application_id);
        assert_eq!(build.min_sdk, 23);
        assert_eq!(build.target_sdk, 35);
        assert_eq!(build.version_code, 1);
        assert_eq!(build.version_name, "1.0.1");
        assert_eq!(build.java_compatibility, 11);
    }

    #[test]
    fn test_static_config_is_idempotent() {
        assert_eq!(BuildConfig::default(), BuildConfig::default());
        assert_eq!(ProjectSchema::default(), ProjectSchema::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ProjectSchema =
            toml::from_str("[build]\nversion_code = 7\nversion_name = \"2.0.0\"\n").unwrap();
        assert_eq!(schema.build.version_code, 7);
        assert_eq!(schema.build.version_name, "2.0.0");
        assert_eq!(schema.build.min_sdk, 23);
        assert_eq!(schema.signing.key_properties, "app/key.properties");
    }
}
