//! Process execution utilities
//!
//! Thin wrapper over `std::process::Command` with captured output, used to
//! drive the Gradle wrapper and environment checks.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandResult {
    /// Create from std::process::Output
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Run a command in a specific directory and capture output
pub fn run_command_in_dir(program: &str, args: &[&str], dir: &Path) -> Result<CommandResult> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::process(format!("Failed to execute {}: {}", program, e)))?;

    Ok(CommandResult::from_output(output))
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    #[cfg(unix)]
    {
        Command::new("sh")
            .args(["-c", &format!("command -v {} >/dev/null 2>&1", program)])
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
    #[cfg(windows)]
    {
        Command::new("where")
            .arg(program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
