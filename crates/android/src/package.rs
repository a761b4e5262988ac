//! Packaging pipeline
//!
//! Materializes the full configuration for a variant and only then hands
//! off to Gradle. The ordering is the contract: static validation, then
//! variant resolution (signing credentials and keystore for release), then
//! the external build. A release that cannot be signed aborts before any
//! Gradle process starts.

use crate::gradle::{self, Artifact};
use droidforge_core::config::{self, Config};
use droidforge_core::error::{Error, Result};
use droidforge_core::process::CommandResult;
use droidforge_core::variant::{BuildVariant, VariantConfig};
use std::path::Path;

/// Fully-resolved inputs for one packaging run
#[derive(Debug)]
pub struct PackagePlan {
    /// Resolved variant flags and credentials
    pub variant: VariantConfig,
    /// Artifact kind to produce
    pub artifact: Artifact,
    /// Gradle task that will run
    pub task: String,
}

/// Resolve everything a packaging run needs, without running it
///
/// For the release variant this loads signing credentials and checks the
/// keystore exists; debug resolution touches no signing state.
pub fn plan(
    project_dir: &Path,
    config: &Config,
    variant: BuildVariant,
    artifact: Artifact,
) -> Result<PackagePlan> {
    config::validate(&config.schema.build)?;

    let key_properties = project_dir.join(&config.schema.signing.key_properties);
    let variant = VariantConfig::resolve(variant, &key_properties)?;

    if let Some(signing) = &variant.signing {
        signing.verify_keystore(project_dir)?;
    }

    let task = gradle::task_name(artifact, variant.variant);
    Ok(PackagePlan {
        variant,
        artifact,
        task,
    })
}

/// Resolve and execute a packaging run
pub fn assemble(
    project_dir: &Path,
    config: &Config,
    variant: BuildVariant,
    artifact: Artifact,
) -> Result<CommandResult> {
    let plan = plan(project_dir, config, variant, artifact)?;

    let result = gradle::run_task(project_dir, &plan.task)?;
    if result.success {
        Ok(result)
    } else {
        Err(Error::new(
            droidforge_core::ErrorCode::GradleTaskFailed,
            format!("Gradle task {} failed", plan.task),
        )
        .with_context(result.stderr.trim().to_string()))
    }
}
