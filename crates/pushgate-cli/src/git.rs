// Rust guideline compliant 2026-10-19

//! Shared Git helpers for CLI commands.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Finds the Git directory the CLI should read configuration from.
///
/// # Arguments
///
/// * `repo` - Repository given with `--repo`; discovered from the working
///   directory when unset
///
/// # Returns
///
/// The Git directory, or `None` outside a repository when no path was given.
///
/// # Errors
///
/// Returns an error if `repo` was given but is not a repository.
pub fn git_dir(repo: Option<&Path>) -> Result<Option<PathBuf>> {
    match repo {
        Some(path) => {
            let repo = Repository::open(path)
                .with_context(|| format!("Not a Git repository: {}", path.display()))?;
            Ok(Some(repo.path().to_path_buf()))
        }
        None => Ok(Repository::open_from_env()
            .ok()
            .map(|repo| repo.path().to_path_buf())),
    }
}
