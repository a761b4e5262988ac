//! Build variants and their packaging flags
//!
//! Two variants exist: debug and release. Resolving the debug variant is
//! pure flag selection; resolving the release variant additionally loads
//! signing credentials and therefore touches the filesystem.

use crate::error::{Error, Result};
use crate::signing::SigningCredentials;
use std::path::Path;

/// ProGuard rule files applied to release builds
pub const RELEASE_PROGUARD_FILES: [&str; 2] =
    ["proguard-android-optimize.txt", "proguard-rules.pro"];

/// Named build variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    /// Development build, signed with the debug keystore by the toolchain
    Debug,
    /// Store build, signed with the release keystore
    Release,
}

impl BuildVariant {
    /// Parse a variant name as given on the command line
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(Error::invalid_value(
                "variant",
                format!("unknown variant '{}'", other),
            )
            .with_suggestion("Use 'debug' or 'release'")),
        }
    }

    /// Lowercase variant name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    /// Capitalized form used in Gradle task names
    pub fn task_suffix(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

/// Resolved per-variant packaging flags
#[derive(Debug, Clone)]
pub struct VariantConfig {
    /// Which variant this flag set belongs to
    pub variant: BuildVariant,
    /// Whether code minification runs during packaging
    pub minify_enabled: bool,
    /// Whether unused resources are stripped
    pub shrink_resources: bool,
    /// Optimization rule files handed to the packager
    pub proguard_files: Vec<String>,
    /// Release signing credentials; `None` for debug
    pub signing: Option<SigningCredentials>,
}

impl VariantConfig {
    /// Resolve the flag set for a variant
    ///
    /// `key_properties` is only dereferenced for the release variant, so a
    /// debug resolve performs no filesystem access. A release resolve that
    /// cannot produce complete credentials fails here, before any
    /// packaging step runs.
    pub fn resolve(variant: BuildVariant, key_properties: &Path) -> Result<Self> {
        match variant {
            BuildVariant::Debug => Ok(Self {
                variant,
                minify_enabled: false,
                shrink_resources: false,
                proguard_files: Vec::new(),
                signing: None,
            }),
            BuildVariant::Release => {
                let signing = SigningCredentials::load(key_properties)?;
                Ok(Self {
                    variant,
                    minify_enabled: false,
                    shrink_resources: false,
                    proguard_files: RELEASE_PROGUARD_FILES
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    signing: Some(signing),
                })
            }
        }
    }
}
