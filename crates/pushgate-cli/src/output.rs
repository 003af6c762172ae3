// Rust guideline compliant 2026-10-19

//! Output formatting module for the Pushgate CLI.
//!
//! Reports and rule listings are rendered either as human-readable text or
//! as JSON for machine consumption.

use pushgate_core::{RuleInfo, ValidationReport};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a validation report.
    ///
    /// # Arguments
    /// * `report` - The report to format
    ///
    /// # Returns
    /// A formatted string representation of the report
    fn format_report(&self, report: &ValidationReport) -> String;

    /// Formats the list of active rules.
    ///
    /// # Arguments
    /// * `rules` - The rules to format
    ///
    /// # Returns
    /// A formatted string representation of the rule list
    fn format_rules(&self, rules: &[RuleInfo]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ValidationReport) -> String {
        let output = json!({
            "accepted": report.is_accepted(),
            "refs_checked": report.refs_checked,
            "commits_checked": report.commits_checked,
            "violations": report.violations,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let output = json!({
            "rules": rules,
            "total": rules.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize rules" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Text output formatter.
///
/// Rejections use the same banner the hook shows to a pusher.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ValidationReport) -> String {
        if report.is_accepted() {
            return format!(
                "All checks passed ({} ref(s), {} commit(s))",
                report.refs_checked, report.commits_checked
            );
        }
        report.to_string().trim_end().to_string()
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        if rules.is_empty() {
            return "No rules enabled.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Rule", "Target", "Explanation"]);
        for rule in rules {
            builder.push_record(vec![
                rule.id.as_str(),
                rule.target.as_str(),
                rule.explanation.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates the formatter for the requested output mode.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter)
    }
}
