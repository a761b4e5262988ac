//! Configuration file loading

use super::schema::ProjectSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ProjectSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// Without an explicit path, standard locations are searched; when no
    /// manifest exists the compile-time declarations are used as-is, so
    /// this cannot fail for the default setup.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ProjectSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ProjectSchema::default(),
            path: None,
        }
    }
}

/// Find a project manifest in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        "droidforge.toml",
        ".droidforge.toml",
        ".config/droidforge.toml",
    ];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML manifest
fn load_config_file(path: &str) -> Result<ProjectSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse config file {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.build.min_sdk, 23);
    }

    #[test]
    fn test_config_load_without_manifest() {
        let config = Config::load(None);
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[build]").unwrap();
        writeln!(file, "application_id = \"com.example.other\"").unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.schema.build.application_id, "com.example.other");
        assert!(config.path.is_some());
    }

    #[test]
    fn test_config_load_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[build").unwrap();

        let result = Config::load(file.path().to_str());
        assert!(result.is_err());
    }
}
