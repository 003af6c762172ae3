// Rust guideline compliant 2026-10-19

//! Hook command wrapper for running the pre-receive hook from the CLI.

use super::GlobalOptions;
use pushgate_hooks::HookOptions;

/// Runs the pre-receive hook on standard input.
///
/// # Returns
///
/// The hook's exit code.
pub fn execute(options: &GlobalOptions) -> i32 {
    let hook_options = HookOptions {
        config: options.config.clone(),
        repo: options.repo.clone(),
    };
    pushgate_hooks::run_from_env(&hook_options)
}
