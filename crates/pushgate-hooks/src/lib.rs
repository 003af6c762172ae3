// Rust guideline compliant 2026-10-19

//! Pushgate Git Hooks
//!
//! This crate provides the server-side hook built on `pushgate-core`:
//! - The `git2`-backed commit source
//! - Logging setup
//! - The pre-receive hook runner

pub mod git;
pub mod logging;
pub mod pre_receive;

pub use git::GitRepository;
pub use pre_receive::{run, run_from_env, HookOptions, HookOutcome};
