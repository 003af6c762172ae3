// Rust guideline compliant 2026-10-19

//! Command implementations for the Pushgate CLI.

pub mod check;
pub mod config;
pub mod pre_receive;
pub mod rules;

use anyhow::Result;
use pushgate_core::error::EXIT_VIOLATIONS;
use pushgate_core::Config;
use std::path::{Path, PathBuf};

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file from `--config`.
    pub config: Option<PathBuf>,
    /// Repository from `--repo`.
    pub repo: Option<PathBuf>,
    /// Whether JSON output was requested.
    pub json: bool,
    /// Whether colored status lines are allowed.
    pub use_color: bool,
}

impl GlobalOptions {
    /// Path of the configuration file in effect, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `--repo` is not a repository.
    pub fn config_path(&self) -> Result<Option<PathBuf>> {
        let git_dir = crate::git::git_dir(self.repo.as_deref())?;
        Ok(Config::resolve_path(
            self.config.as_deref(),
            git_dir.as_deref(),
            |key| std::env::var(key).ok(),
        ))
    }

    /// Loads the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be resolved or loaded.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path()?;
        Ok(Config::load(path.as_deref())?)
    }
}

/// Reads text from a file, or from stdin when `path` is `-` or unset.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

/// Maps a command failure to the process exit code.
///
/// Domain errors keep their own code; anything else counts as a rejection.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    let code = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<pushgate_core::Error>())
        .map_or(EXIT_VIOLATIONS, |err| err.exit_code());
    u8::try_from(code).unwrap_or(1)
}
