//! Gradle packaging pipeline for the Boviframe Android app
//!
//! This crate drives the external build:
//! - Gradle wrapper task invocation
//! - The assemble pipeline that resolves configuration and signing before
//!   packaging starts

#![warn(missing_docs)]

pub mod gradle;
pub mod package;
