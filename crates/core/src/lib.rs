//! Core build-configuration materialization for the Boviframe Android app
//!
//! This crate resolves everything the external Gradle build consumes:
//!
//! - **Configuration**: static identity and platform declarations with
//!   optional `droidforge.toml` overrides
//! - **Signing**: release credentials loaded from the local key properties
//!   file, with secrets kept out of all output
//! - **Variants**: debug/release flag sets, release owning the credentials
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Process execution**: captured-output command runs for Gradle
//!
//! Resolution is single-threaded and run-to-completion: configuration is
//! materialized once per invocation, before any packaging step.
//!
//! # Example
//!
//! ```rust,no_run
//! use droidforge_core::config::{self, Config};
//! use droidforge_core::variant::{BuildVariant, VariantConfig};
//! use std::path::Path;
//!
//! let config = Config::load(None).expect("manifest unreadable");
//! config::validate(&config.schema.build).expect("malformed declarations");
//!
//! let variant = VariantConfig::resolve(
//!     BuildVariant::Release,
//!     Path::new(&config.schema.signing.key_properties),
//! )
//! .expect("release cannot be signed");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod process;
pub mod properties;
pub mod secret;
pub mod signing;
pub mod variant;

pub use error::{Error, ErrorCode, Result, ResultExt};
