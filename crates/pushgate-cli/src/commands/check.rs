// Rust guideline compliant 2026-10-19

//! Implementation of the `pushgate check-branch` and `pushgate check-message`
//! commands.
//!
//! Both run the same rules the hook enforces, so a developer can test a name
//! or a message before pushing.

use super::{read_input, GlobalOptions};
use crate::output::create_formatter;
use crate::terminal::print_warning;
use anyhow::Result;
use pushgate_core::models::BRANCH_PREFIX;
use pushgate_core::{ValidationReport, Validator};
use std::path::Path;

/// Turns a branch argument into a full ref name.
///
/// Names already under `refs/` are kept; anything else is a branch.
pub fn to_ref_name(name: &str) -> String {
    if name.starts_with("refs/") {
        name.to_string()
    } else {
        format!("{}{}", BRANCH_PREFIX, name)
    }
}

/// Checks several branch names and merges the results into one report.
pub fn check_branches(validator: &Validator, names: &[String]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for name in names {
        let single = validator.check_branch(&to_ref_name(name));
        report.refs_checked += single.refs_checked;
        report.violations.extend(single.violations);
    }
    report
}

/// Executes the check-branch command.
///
/// # Arguments
///
/// * `names` - Branch or ref names to check
/// * `options` - Global CLI options
///
/// # Returns
///
/// Whether every name passed.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn branch(names: &[String], options: &GlobalOptions) -> Result<bool> {
    let validator = Validator::new(&options.load_config()?)?;
    for name in names {
        let ref_name = to_ref_name(name);
        if !ref_name.starts_with(BRANCH_PREFIX) {
            print_warning(
                &format!("{} is not a branch; no branch rules apply", ref_name),
                options.use_color,
            );
        }
    }
    let report = check_branches(&validator, names);
    println!("{}", create_formatter(options.json).format_report(&report));
    Ok(report.is_accepted())
}

/// Executes the check-message command.
///
/// # Arguments
///
/// * `file` - Message file; stdin when unset or `-`
/// * `options` - Global CLI options
///
/// # Returns
///
/// Whether the message passed.
///
/// # Errors
///
/// Returns an error if the message or the configuration cannot be read.
pub fn message(file: Option<&Path>, options: &GlobalOptions) -> Result<bool> {
    let validator = Validator::new(&options.load_config()?)?;
    let text = read_input(file)?;
    let label = match file {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    };
    let report = validator.check_message_text(&label, &text);
    println!("{}", create_formatter(options.json).format_report(&report));
    Ok(report.is_accepted())
}
