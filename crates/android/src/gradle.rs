//! Gradle build system integration
//!
//! Task names are derived from the artifact kind and variant; execution
//! goes through the project's Gradle wrapper.

use droidforge_core::error::Result;
use droidforge_core::process::{run_command_in_dir, CommandResult};
use droidforge_core::variant::BuildVariant;
use std::path::Path;

/// Packaged artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Installable package (`assemble*` tasks)
    Apk,
    /// App bundle for store upload (`bundle*` tasks)
    Aab,
}

impl Artifact {
    /// Gradle task verb for this artifact kind
    pub fn task_verb(&self) -> &'static str {
        match self {
            Self::Apk => "assemble",
            Self::Aab => "bundle",
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Apk => "APK",
            Self::Aab => "AAB",
        }
    }
}

/// Gradle task name for packaging an artifact of a variant
pub fn task_name(artifact: Artifact, variant: BuildVariant) -> String {
    format!("{}{}", artifact.task_verb(), variant.task_suffix())
}

/// Path to the Gradle wrapper for the current OS
pub fn wrapper_command() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

/// Run a Gradle task in the project directory
pub fn run_task(project_dir: &Path, task: &str) -> Result<CommandResult> {
    run_command_in_dir(wrapper_command(), &[task], project_dir)
}

/// Package an artifact for a variant
pub fn package(
    project_dir: &Path,
    artifact: Artifact,
    variant: BuildVariant,
) -> Result<CommandResult> {
    run_task(project_dir, &task_name(artifact, variant))
}

/// Clean build outputs
pub fn clean(project_dir: &Path) -> Result<CommandResult> {
    run_task(project_dir, "clean")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_names() {
        assert_eq!(task_name(Artifact::Apk, BuildVariant::Debug), "assembleDebug");
        assert_eq!(
            task_name(Artifact::Apk, BuildVariant::Release),
            "assembleRelease"
        );
        assert_eq!(task_name(Artifact::Aab, BuildVariant::Debug), "bundleDebug");
        assert_eq!(
            task_name(Artifact::Aab, BuildVariant::Release),
            "bundleRelease"
        );
    }

    #[test]
    fn test_wrapper_command() {
        assert!(!wrapper_command().is_empty());
    }
}
