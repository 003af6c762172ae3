// Rust guideline compliant 2026-10-19

//! Validation results and their rendering.

use crate::models::Oid;
use crate::rules::RuleFailure;
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE_WIDTH: usize = 80;

/// What a violation is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    /// The name of an updated branch.
    Branch {
        /// Full ref name.
        ref_name: String,
    },
    /// The message of a new commit.
    Commit {
        /// Commit id.
        id: Oid,
        /// Ref the commit arrived on.
        ref_name: String,
    },
    /// A message checked outside of a push, e.g. from a file.
    Message {
        /// Where the message came from.
        label: String,
    },
}

/// A rule that failed for a specific branch name or commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending branch or commit.
    pub subject: Subject,
    /// Id of the failed rule.
    pub rule: String,
    /// Explanation of the rule.
    pub explanation: String,
}

impl Violation {
    /// Creates a violation from a rule failure.
    pub fn new(subject: Subject, failure: RuleFailure) -> Self {
        Self {
            subject,
            rule: failure.rule,
            explanation: failure.explanation,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Subject::Branch { ref_name } => write!(f, "Bad branch name ({})", ref_name)?,
            Subject::Commit { id, ref_name } => {
                write!(f, "Bad commit message ({}) on {}", id, ref_name)?
            }
            Subject::Message { label } => write!(f, "Bad commit message ({})", label)?,
        }
        write!(f, ": {} [{}]", self.explanation, self.rule)
    }
}

/// Aggregate outcome for one push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All violations, in the order they were found.
    pub violations: Vec<Violation>,
    /// Number of ref updates that were validated.
    pub refs_checked: usize,
    /// Number of distinct commits whose message was validated.
    pub commits_checked: usize,
}

impl ValidationReport {
    /// Whether the push may proceed.
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    /// Appends one violation per failure.
    pub fn record(&mut self, subject: &Subject, failures: Vec<RuleFailure>) {
        self.violations.extend(
            failures
                .into_iter()
                .map(|failure| Violation::new(subject.clone(), failure)),
        );
    }

    /// Serializes the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize report: {}", e)))
    }
}

impl fmt::Display for ValidationReport {
    /// Renders the rejection banner shown to the pusher.
    ///
    /// Accepted reports render as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_accepted() {
            return Ok(());
        }
        let heavy = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", heavy)?;
        writeln!(f, "PUSH REJECTED: {} violation(s)", self.violations.len())?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for violation in &self.violations {
            writeln!(f, "{}", violation)?;
        }
        writeln!(f, "{}", heavy)
    }
}
