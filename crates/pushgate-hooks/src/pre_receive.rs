// Rust guideline compliant 2026-10-19

//! Pre-receive hook implementation.
//!
//! Reads ref updates from standard input, validates branch names and new
//! commit messages, and turns the result into an exit code. Every failure
//! path writes a diagnostic to standard error; a single violation rejects
//! the whole push.

use crate::git::GitRepository;
use crate::logging::init_tracing;
use pushgate_core::error::EXIT_VIOLATIONS;
use pushgate_core::{parse_input, CommitSource, Config, Error, ValidationReport, Validator};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, warn};

/// Prefix of fatal diagnostics.
const DIAGNOSTIC_PREFIX: &str = "pushgate";

/// Where the hook finds its repository and configuration.
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Configuration file overriding the usual lookup.
    pub config: Option<PathBuf>,
    /// Repository path; the Git environment is used when unset.
    pub repo: Option<PathBuf>,
}

/// Result of one hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// Process exit code; 0 accepts the push.
    pub exit_code: i32,
    /// Validation report, when validation ran to completion.
    pub report: Option<ValidationReport>,
}

impl HookOutcome {
    /// Whether the push is accepted.
    pub fn accepted(&self) -> bool {
        self.exit_code == 0
    }

    fn fatal(err: &Error, stderr: &mut dyn Write) -> Self {
        let _ = writeln!(stderr, "{}: {}", DIAGNOSTIC_PREFIX, err);
        Self {
            exit_code: err.exit_code(),
            report: None,
        }
    }
}

/// Runs the pre-receive hook against an open repository.
///
/// # Arguments
///
/// * `input` - Hook input (`<old> <new> <ref>` lines)
/// * `stderr` - Where diagnostics for the pusher are written
/// * `config` - Loaded configuration
/// * `source` - The repository receiving the push
///
/// # Returns
///
/// The outcome; exit code 0 only if every ref and commit passed.
pub fn run<R: BufRead>(
    input: R,
    stderr: &mut dyn Write,
    config: &Config,
    source: &dyn CommitSource,
) -> HookOutcome {
    let validator = match Validator::new(config) {
        Ok(validator) => validator,
        Err(err) => {
            error!(error = %err, "invalid rule configuration");
            return HookOutcome::fatal(&err, stderr);
        }
    };

    let updates = match parse_input(input, config.object_format) {
        Ok(updates) => updates,
        Err(err) => {
            error!(error = %err, "unparsable hook input");
            return HookOutcome::fatal(&err, stderr);
        }
    };

    let report = match validator.validate(&updates, source) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "commit lookup failed");
            return HookOutcome::fatal(&err, stderr);
        }
    };

    if report.is_accepted() {
        return HookOutcome {
            exit_code: 0,
            report: Some(report),
        };
    }

    warn!(violations = report.violations.len(), "push rejected");
    let _ = write!(stderr, "{}", report);
    let _ = stderr.flush();
    HookOutcome {
        exit_code: EXIT_VIOLATIONS,
        report: Some(report),
    }
}

/// Runs the hook the way Git invokes it.
///
/// Opens the repository (from `options.repo` or the Git environment), loads
/// configuration, sets up logging, then validates standard input.
///
/// # Returns
///
/// The process exit code.
pub fn run_from_env(options: &HookOptions) -> i32 {
    let mut stderr = std::io::stderr();

    let repo = match &options.repo {
        Some(path) => GitRepository::open(path),
        None => GitRepository::open_from_env(),
    };
    let repo = match repo {
        Ok(repo) => repo,
        Err(err) => return HookOutcome::fatal(&err, &mut stderr).exit_code,
    };

    let config_path = Config::resolve_path(
        options.config.as_deref(),
        Some(repo.git_dir()),
        |key| std::env::var(key).ok(),
    );
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => return HookOutcome::fatal(&err, &mut stderr).exit_code,
    };
    let _guard = match init_tracing(&config) {
        Ok(guard) => guard,
        Err(err) => return HookOutcome::fatal(&err, &mut stderr).exit_code,
    };

    let repo = repo.with_exclude_existing_refs(config.exclude_existing_refs);
    let stdin = std::io::stdin();
    run(stdin.lock(), &mut stderr, &config, &repo).exit_code
}
