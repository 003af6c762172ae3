// Rust guideline compliant 2026-10-19

//! Implementation of the `pushgate config` commands.

use super::GlobalOptions;
use crate::terminal::print_success;
use anyhow::{Context, Result};
use pushgate_core::config::CONFIG_FILE_NAME;
use pushgate_core::Config;
use std::path::{Path, PathBuf};

/// Supported config actions.
#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Runs the requested config action.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or written.
pub fn execute(action: ConfigAction, options: &GlobalOptions) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = options.load_config()?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = init_target(options)?;
            write_default(&path, force)?;
            print_success(
                &format!("Wrote default configuration to {}", path.display()),
                options.use_color,
            );
            Ok(())
        }
    }
}

/// Writes the default configuration to `path`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is false, or writing fails.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Where `config init` writes: the resolved config path, or
/// `pushgate.toml` in the Git directory.
fn init_target(options: &GlobalOptions) -> Result<PathBuf> {
    if let Some(path) = options.config_path()? {
        return Ok(path);
    }
    let git_dir = crate::git::git_dir(options.repo.as_deref())?
        .context("Not inside a Git repository. Pass --config or --repo.")?;
    Ok(git_dir.join(CONFIG_FILE_NAME))
}
