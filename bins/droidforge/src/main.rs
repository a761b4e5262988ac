//! Droidforge CLI
//!
//! Build configuration, signing checks, and Gradle packaging for the
//! Boviframe Android app.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use droidforge_android::gradle::{self, Artifact};
use droidforge_android::package;
use droidforge_core::config::{self, Config};
use droidforge_core::error::{exit_codes, Error};
use droidforge_core::process::command_exists;
use droidforge_core::signing::SigningCredentials;
use droidforge_core::variant::BuildVariant;
use output::Status;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "droidforge")]
#[command(about = "Build configuration and packaging for Boviframe Android")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Android project directory
    #[arg(short, long, global = true, default_value = ".")]
    project_dir: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the app
    Build {
        /// Build variant: debug, release
        #[arg(long, default_value = "debug")]
        variant: String,
        /// Build bundle (AAB) instead of APK
        #[arg(long)]
        bundle: bool,
        /// Clean before building
        #[arg(long)]
        clean: bool,
    },

    /// Verify release signing inputs without building
    #[command(name = "check-signing")]
    CheckSigning,

    /// Print the resolved build configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose the build environment
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;

    let exit_code = match cli.command {
        Commands::Build {
            variant,
            bundle,
            clean,
        } => run_build(&cli.project_dir, &config, &variant, bundle, clean),
        Commands::CheckSigning => run_check_signing(&cli.project_dir, &config),
        Commands::Config { json } => run_config(&config, json),
        Commands::Doctor => run_doctor(&cli.project_dir, &config),
    };

    std::process::exit(exit_code);
}

/// Map an error to the CLI exit code for its category
fn exit_code_for(err: &Error) -> i32 {
    use droidforge_core::ErrorCode;

    match err.code {
        ErrorCode::CommandNotFound => exit_codes::COMMAND_NOT_FOUND,
        code => match code.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::SIGNING_ERROR,
            6 => exit_codes::GRADLE_ERROR,
            _ => exit_codes::FAILURE,
        },
    }
}

fn run_build(
    project_dir: &Path,
    config: &Config,
    variant: &str,
    bundle: bool,
    clean: bool,
) -> i32 {
    let variant = match BuildVariant::parse(variant) {
        Ok(v) => v,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(&e);
        }
    };
    let artifact = if bundle { Artifact::Aab } else { Artifact::Apk };

    if clean {
        Status::info("Cleaning...");
        if let Err(e) = gradle::clean(project_dir) {
            Status::error(&format!("Clean failed: {}", e));
            return exit_code_for(&e);
        }
    }

    Status::info(&format!(
        "Building {} {}...",
        variant.name(),
        artifact.display_name()
    ));

    match package::assemble(project_dir, config, variant, artifact) {
        Ok(_) => {
            Status::success("Build succeeded");
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Build failed: {}", e));
            exit_code_for(&e)
        }
    }
}

fn run_check_signing(project_dir: &Path, config: &Config) -> i32 {
    let key_properties = project_dir.join(&config.schema.signing.key_properties);

    let signing = match SigningCredentials::load(&key_properties) {
        Ok(s) => s,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(&e);
        }
    };

    Status::success(&format!("Key alias: {}", signing.key_alias));
    Status::success(&format!(
        "Keystore: {}",
        signing.keystore_path(project_dir).display()
    ));

    if let Err(e) = signing.verify_keystore(project_dir) {
        Status::error(&format!("{}", e));
        return exit_code_for(&e);
    }

    Status::success("Release signing is fully configured");
    exit_codes::SUCCESS
}

fn run_config(config: &Config, json: bool) -> i32 {
    if let Err(e) = config::validate(&config.schema.build) {
        Status::error(&format!("{}", e));
        return exit_code_for(&e);
    }

    if json {
        match serde_json::to_string_pretty(&config.schema) {
            Ok(rendered) => {
                println!("{}", rendered);
                exit_codes::SUCCESS
            }
            Err(e) => {
                Status::error(&format!("Failed to render config: {}", e));
                exit_codes::FAILURE
            }
        }
    } else {
        let build = &config.schema.build;
        match &config.path {
            Some(path) => Status::info(&format!("Manifest: {}", path)),
            None => Status::info("Manifest: built-in defaults"),
        }
        println!();
        println!("  application_id  {}", build.application_id);
        println!("  namespace       {}", build.namespace);
        println!("  min_sdk         {}", build.min_sdk);
        println!("  target_sdk      {}", build.target_sdk);
        println!("  compile_sdk     {}", build.compile_sdk);
        println!("  version         {} ({})", build.version_name, build.version_code);
        if let Some(ndk) = &build.ndk_version {
            println!("  ndk_version     {}", ndk);
        }
        println!("  java            {}", build.java_compatibility);
        println!("  kotlin_jvm      {}", build.kotlin_jvm_target);
        println!();
        println!("  key_properties  {}", config.schema.signing.key_properties);
        exit_codes::SUCCESS
    }
}

fn run_doctor(project_dir: &Path, config: &Config) -> i32 {
    println!("Environment Check");
    println!();

    if project_dir.join("gradlew").is_file() || project_dir.join("gradlew.bat").is_file() {
        Status::success("gradle wrapper: found");
    } else {
        Status::error("gradle wrapper: not found in project directory");
    }

    if command_exists("java") {
        Status::success("java: installed");
    } else {
        Status::error("java: not found");
    }

    if command_exists("keytool") {
        Status::success("keytool: installed");
    } else {
        Status::warning("keytool: not found");
    }

    let key_properties = project_dir.join(&config.schema.signing.key_properties);
    if key_properties.is_file() {
        match SigningCredentials::load(&key_properties) {
            Ok(signing) => {
                Status::success("key properties: complete");
                if signing.verify_keystore(project_dir).is_ok() {
                    Status::success("release keystore: found");
                } else {
                    Status::warning("release keystore: missing");
                }
            }
            Err(e) => Status::warning(&format!("key properties: {}", e.message)),
        }
    } else {
        Status::warning("key properties: not found (release builds will fail)");
    }

    exit_codes::SUCCESS
}
