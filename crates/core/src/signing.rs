//! Release signing credentials
//!
//! Loads the alias, passwords, and keystore reference a release build needs
//! from the local key properties file. Loading is lazy: only the release
//! variant ever calls into this module. Any failure here is fatal to the
//! release build; an unsigned artifact must never be produced silently.

use crate::error::{Error, Result, ResultExt};
use crate::properties::Properties;
use crate::secret::Secret;
use std::path::{Path, PathBuf};

/// Keystore filename used when the properties file has no `storeFile` entry
pub const DEFAULT_KEYSTORE_FILE: &str = "keystore-release.jks";

/// Required keys in the key properties file
pub const REQUIRED_KEYS: [&str; 3] = ["keyAlias", "keyPassword", "storePassword"];

/// Everything needed to sign a release artifact
///
/// Passwords are wrapped in [`Secret`] so the whole struct can be logged
/// or dumped without leaking them.
#[derive(Debug, Clone)]
pub struct SigningCredentials {
    /// Alias of the signing key inside the keystore
    pub key_alias: String,
    /// Password for the signing key
    pub key_password: Secret,
    /// Password for the keystore itself
    pub store_password: Secret,
    /// Keystore path, relative to the project directory
    pub keystore_file: PathBuf,
}

impl SigningCredentials {
    /// Load credentials from a key properties file
    ///
    /// Fails with `FileNotFound` if the path does not resolve and with
    /// `MissingKey` if any of `keyAlias`, `keyPassword`, `storePassword`
    /// is absent or empty. No partial credentials are ever returned. The
    /// keystore path comes from an optional `storeFile` entry, falling
    /// back to [`DEFAULT_KEYSTORE_FILE`].
    pub fn load(path: &Path) -> Result<Self> {
        let props = Properties::load(path)?;
        Self::from_properties(&props)
            .context(format!("While loading {}", path.display()))
    }

    /// Extract credentials from already-parsed properties
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let key_alias = props.get_required("keyAlias")?.to_string();
        let key_password = Secret::new(props.get_required("keyPassword")?);
        let store_password = Secret::new(props.get_required("storePassword")?);

        let keystore_file = match props.get("storeFile") {
            Some(file) if !file.is_empty() => PathBuf::from(file),
            _ => PathBuf::from(DEFAULT_KEYSTORE_FILE),
        };

        Ok(Self {
            key_alias,
            key_password,
            store_password,
            keystore_file,
        })
    }

    /// Resolve the keystore path against the project directory
    pub fn keystore_path(&self, project_dir: &Path) -> PathBuf {
        if self.keystore_file.is_absolute() {
            self.keystore_file.clone()
        } else {
            project_dir.join(&self.keystore_file)
        }
    }

    /// Check that the referenced keystore exists on disk
    ///
    /// Fails with `KeystoreNotFound`; packaging must not start without the
    /// keystore present.
    pub fn verify_keystore(&self, project_dir: &Path) -> Result<()> {
        let path = self.keystore_path(project_dir);
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::keystore_not_found(&path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    fn write_props(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_well_formed_file() {
        let file = write_props("keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\n");

        let creds = SigningCredentials::load(file.path()).unwrap();
        assert_eq!(creds.key_alias, "app");
        assert_eq!(creds.key_password.expose(), "pw1");
        assert_eq!(creds.store_password.expose(), "pw2");
        assert_eq!(creds.keystore_file, PathBuf::from("keystore-release.jks"));
    }

    #[test]
    fn test_load_honors_store_file_entry() {
        let file = write_props(
            "keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\nstoreFile=upload.jks\n",
        );

        let creds = SigningCredentials::load(file.path()).unwrap();
        assert_eq!(creds.keystore_file, PathBuf::from("upload.jks"));
    }

    #[test]
    fn test_load_missing_file() {
        let err =
            SigningCredentials::load(Path::new("/nonexistent/app/key.properties")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_load_missing_key_names_it() {
        let file = write_props("keyAlias=app\nstorePassword=pw2\n");

        let err = SigningCredentials::load(file.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingKey);
        assert!(err.message.contains("keyPassword"));
    }

    #[test]
    fn test_load_empty_password_is_missing() {
        let file = write_props("keyAlias=app\nkeyPassword=\nstorePassword=pw2\n");

        let err = SigningCredentials::load(file.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingKey);
    }

    #[test]
    fn test_error_never_contains_passwords() {
        let file = write_props("keyAlias=app\nkeyPassword=supersecret\n");

        let err = SigningCredentials::load(file.path()).unwrap_err();
        let rendered = format!("{}", err);
        assert!(!rendered.contains("supersecret"));
    }

    #[test]
    fn test_debug_output_redacts_passwords() {
        let props = Properties::parse("keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\n");
        let creds = SigningCredentials::from_properties(&props).unwrap();

        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("app"));
        assert!(!rendered.contains("pw1"));
        assert!(!rendered.contains("pw2"));
    }

    #[test]
    fn test_keystore_path_resolution() {
        let props = Properties::parse("keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\n");
        let creds = SigningCredentials::from_properties(&props).unwrap();

        let resolved = creds.keystore_path(Path::new("/proj"));
        assert_eq!(resolved, PathBuf::from("/proj/keystore-release.jks"));
    }

    #[test]
    fn test_verify_keystore_missing() {
        let props = Properties::parse("keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\n");
        let creds = SigningCredentials::from_properties(&props).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let err = creds.verify_keystore(dir.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::KeystoreNotFound);
    }

    #[test]
    fn test_verify_keystore_present() {
        let props = Properties::parse("keyAlias=app\nkeyPassword=pw1\nstorePassword=pw2\n");
        let creds = SigningCredentials::from_properties(&props).unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_KEYSTORE_FILE), b"jks").unwrap();
        assert!(creds.verify_keystore(dir.path()).is_ok());
    }
}
