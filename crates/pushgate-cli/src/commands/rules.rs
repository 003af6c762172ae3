// Rust guideline compliant 2026-10-19

//! Implementation of the `pushgate rules` command.

use super::GlobalOptions;
use crate::output::create_formatter;
use anyhow::Result;
use pushgate_core::RuleSet;

/// Lists the rules the current configuration enables.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or a pattern is
/// invalid.
pub fn execute(options: &GlobalOptions) -> Result<()> {
    let rules = RuleSet::from_config(&options.load_config()?)?;
    println!("{}", create_formatter(options.json).format_rules(&rules.describe()));
    Ok(())
}
