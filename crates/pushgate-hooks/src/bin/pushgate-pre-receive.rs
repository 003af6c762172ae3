// Rust guideline compliant 2026-10-19

//! Entry point for the Pushgate pre-receive hook.

use pushgate_hooks::HookOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = pushgate_hooks::run_from_env(&HookOptions::default());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
