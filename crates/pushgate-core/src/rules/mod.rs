// Rust guideline compliant 2026-10-19

//! Branch name and commit message rules.
//!
//! Rules are compiled from [`Config`] once per invocation into a [`RuleSet`].
//! Each rule is a named predicate with a human-readable explanation; a rule
//! that is disabled in configuration is simply absent from the set.

mod branch;
mod message;

use crate::config::{Config, PatternMode, PatternRule};
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use branch::BranchRule;
use message::{MessageRule, ParsedMessage};

/// What a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTarget {
    /// The branch name of a ref update.
    Branch,
    /// The message of a new commit.
    Message,
}

impl RuleTarget {
    /// Display name of the target.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleTarget::Branch => "branch",
            RuleTarget::Message => "message",
        }
    }
}

/// Description of an active rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Rule id.
    pub id: String,
    /// What the rule inspects.
    pub target: RuleTarget,
    /// Explanation shown when the rule fails.
    pub explanation: String,
}

/// A rule that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    /// Rule id.
    pub rule: String,
    /// Explanation shown to the pusher.
    pub explanation: String,
}

/// A compiled user-defined pattern rule.
#[derive(Debug, Clone)]
pub(crate) struct CustomPattern {
    name: String,
    regex: Regex,
    explanation: String,
    mode: PatternMode,
}

impl CustomPattern {
    fn compile(rule: &PatternRule) -> Result<Self> {
        Ok(Self {
            name: rule.name.clone(),
            regex: compile(&rule.name, &rule.pattern)?,
            explanation: rule.explanation.clone(),
            mode: rule.mode,
        })
    }

    fn passes(&self, text: &str) -> bool {
        let matched = self.regex.is_match(text);
        match self.mode {
            PatternMode::Require => matched,
            PatternMode::Forbid => !matched,
        }
    }
}

pub(crate) fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

/// The compiled rules of one invocation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    branch: Vec<BranchRule>,
    message: Vec<MessageRule>,
}

impl RuleSet {
    /// Compiles the rules enabled in `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if a configured regex does not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            branch: branch::compile_rules(&config.branch)?,
            message: message::compile_rules(&config.message)?,
        })
    }

    /// Checks a short branch name (without `refs/heads/`).
    ///
    /// # Returns
    ///
    /// One failure per violated rule, in rule order.
    pub fn check_branch(&self, name: &str) -> Vec<RuleFailure> {
        self.branch
            .iter()
            .filter(|rule| !rule.passes(name))
            .map(|rule| RuleFailure {
                rule: rule.id().to_string(),
                explanation: rule.explanation(),
            })
            .collect()
    }

    /// Checks a raw commit message.
    ///
    /// # Returns
    ///
    /// One failure per violated rule, in rule order.
    pub fn check_message(&self, message: &str) -> Vec<RuleFailure> {
        let parsed = ParsedMessage::parse(message);
        self.message
            .iter()
            .filter(|rule| parsed.has_subject() || !rule.needs_subject())
            .filter(|rule| !rule.passes(&parsed))
            .map(|rule| RuleFailure {
                rule: rule.id().to_string(),
                explanation: rule.explanation(),
            })
            .collect()
    }

    /// Lists the active rules.
    pub fn describe(&self) -> Vec<RuleInfo> {
        let branch = self.branch.iter().map(|rule| RuleInfo {
            id: rule.id().to_string(),
            target: RuleTarget::Branch,
            explanation: rule.explanation(),
        });
        let message = self.message.iter().map(|rule| RuleInfo {
            id: rule.id().to_string(),
            target: RuleTarget::Message,
            explanation: rule.explanation(),
        });
        branch.chain(message).collect()
    }

    /// Number of active rules.
    ///
    /// Never zero: the empty-subject check is always active.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.branch.len() + self.message.len()
    }
}
