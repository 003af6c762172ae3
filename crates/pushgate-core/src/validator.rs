// Rust guideline compliant 2026-10-19

//! Push validation.
//!
//! The validator walks the ref updates of one push, checks branch names and
//! the messages of every newly introduced commit, and collects all
//! violations into a single report.

use crate::config::Config;
use crate::models::{Commit, Oid, RefUpdate, UpdateKind, BRANCH_PREFIX};
use crate::report::{Subject, ValidationReport};
use crate::rules::RuleSet;
use crate::Result;
use std::collections::HashSet;
use tracing::{debug, info};

/// Access to the repository receiving the push.
///
/// Implementations report lookup failures as `Error::Git`; the validator
/// treats them as fatal for the whole push.
pub trait CommitSource {
    /// Lists the commits `update` introduces, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the commits cannot be enumerated.
    fn new_commits(&self, update: &RefUpdate) -> Result<Vec<Oid>>;

    /// Returns the raw message of commit `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be read.
    fn message(&self, id: &Oid) -> Result<String>;
}

/// Validates pushes against a compiled rule set.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: RuleSet,
    checked_ref_prefixes: Vec<String>,
}

impl Validator {
    /// Compiles the rules of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let rules = RuleSet::from_config(config)?;
        debug!(rules = rules.len(), "compiled rule set");
        Ok(Self {
            rules,
            checked_ref_prefixes: config.checked_ref_prefixes.clone(),
        })
    }

    /// The active rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates all ref updates of one push.
    ///
    /// Deletions and refs outside the checked prefixes are skipped. A commit
    /// introduced through several refs is checked once, attributed to the
    /// first ref that introduced it.
    ///
    /// # Arguments
    ///
    /// * `updates` - Parsed hook input
    /// * `source` - Repository access
    ///
    /// # Returns
    ///
    /// A report with every violation found.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit source fails.
    pub fn validate(&self, updates: &[RefUpdate], source: &dyn CommitSource) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();
        let mut seen: HashSet<Oid> = HashSet::new();

        for update in updates {
            let kind = update.kind();
            if kind == UpdateKind::Delete {
                debug!(ref_name = %update.ref_name, "skipping deletion");
                continue;
            }
            if !self.is_checked(&update.ref_name) {
                debug!(ref_name = %update.ref_name, "skipping unchecked ref");
                continue;
            }

            report.refs_checked += 1;
            if update.is_branch() {
                self.check_branch_into(&update.ref_name, &mut report);
            }

            let commits = source.new_commits(update)?;
            debug!(
                ref_name = %update.ref_name,
                kind = ?kind,
                commits = commits.len(),
                "checking new commits"
            );
            for id in commits {
                if !seen.insert(id.clone()) {
                    continue;
                }
                let commit = Commit {
                    message: source.message(&id)?,
                    id,
                };
                self.check_commit_into(&commit, &update.ref_name, &mut report);
                report.commits_checked += 1;
            }
        }

        info!(
            refs = report.refs_checked,
            commits = report.commits_checked,
            violations = report.violations.len(),
            accepted = report.is_accepted(),
            "push validated"
        );
        Ok(report)
    }

    /// Checks a single ref name against the branch rules.
    ///
    /// Names outside `refs/heads/` produce an empty report.
    pub fn check_branch(&self, ref_name: &str) -> ValidationReport {
        let mut report = ValidationReport::default();
        report.refs_checked = 1;
        if ref_name.starts_with(BRANCH_PREFIX) {
            self.check_branch_into(ref_name, &mut report);
        }
        report
    }

    /// Checks a single commit message.
    pub fn check_commit(&self, commit: &Commit, ref_name: &str) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_commit_into(commit, ref_name, &mut report);
        report.commits_checked = 1;
        report
    }

    /// Checks a message that is not part of a push.
    ///
    /// # Arguments
    ///
    /// * `label` - Where the message came from, shown in diagnostics
    /// * `message` - Raw message text
    pub fn check_message_text(&self, label: &str, message: &str) -> ValidationReport {
        let mut report = ValidationReport::default();
        let failures = self.rules.check_message(message);
        let subject = Subject::Message {
            label: label.to_string(),
        };
        report.record(&subject, failures);
        report.commits_checked = 1;
        report
    }

    fn is_checked(&self, ref_name: &str) -> bool {
        self.checked_ref_prefixes
            .iter()
            .any(|prefix| ref_name.starts_with(prefix.as_str()))
    }

    fn check_branch_into(&self, ref_name: &str, report: &mut ValidationReport) {
        let short = ref_name
            .strip_prefix(BRANCH_PREFIX)
            .unwrap_or(ref_name);
        let failures = self.rules.check_branch(short);
        let subject = Subject::Branch {
            ref_name: ref_name.to_string(),
        };
        report.record(&subject, failures);
    }

    fn check_commit_into(&self, commit: &Commit, ref_name: &str, report: &mut ValidationReport) {
        debug!(commit = %commit.id, "checking commit message");
        let failures = self.rules.check_message(&commit.message);
        let subject = Subject::Commit {
            id: commit.id.clone(),
            ref_name: ref_name.to_string(),
        };
        report.record(&subject, failures);
    }
}
