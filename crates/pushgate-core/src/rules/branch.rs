// Rust guideline compliant 2026-10-19

//! Branch name rules.

use super::{compile, CustomPattern};
use crate::config::BranchConfig;
use crate::Result;
use regex::Regex;

#[derive(Debug, Clone)]
pub(crate) enum BranchRule {
    Ascii,
    NoWhitespace,
    Pattern(Regex),
    Prefix(Vec<String>),
    MaxLength(usize),
    Custom(CustomPattern),
}

impl BranchRule {
    pub(crate) fn id(&self) -> &str {
        match self {
            BranchRule::Ascii => "branch-ascii",
            BranchRule::NoWhitespace => "branch-no-whitespace",
            BranchRule::Pattern(_) => "branch-pattern",
            BranchRule::Prefix(_) => "branch-prefix",
            BranchRule::MaxLength(_) => "branch-max-length",
            BranchRule::Custom(custom) => &custom.name,
        }
    }

    pub(crate) fn explanation(&self) -> String {
        match self {
            BranchRule::Ascii => "Use only ascii characters".to_string(),
            BranchRule::NoWhitespace => "Do not use whitespace in branch names".to_string(),
            BranchRule::Pattern(regex) => format!("Match the regex '{}'", regex.as_str()),
            BranchRule::Prefix(prefixes) => {
                format!("Start with one of the prefixes: {}", prefixes.join(", "))
            }
            BranchRule::MaxLength(max) => format!("Limit the branch name to {} characters", max),
            BranchRule::Custom(custom) => custom.explanation.clone(),
        }
    }

    pub(crate) fn passes(&self, name: &str) -> bool {
        match self {
            BranchRule::Ascii => name.is_ascii(),
            BranchRule::NoWhitespace => !name.chars().any(char::is_whitespace),
            BranchRule::Pattern(regex) => regex.is_match(name),
            BranchRule::Prefix(prefixes) => prefixes.iter().any(|p| name.starts_with(p.as_str())),
            BranchRule::MaxLength(max) => name.chars().count() <= *max,
            BranchRule::Custom(custom) => custom.passes(name),
        }
    }
}

pub(crate) fn compile_rules(config: &BranchConfig) -> Result<Vec<BranchRule>> {
    let mut rules = Vec::new();
    if config.ascii_only {
        rules.push(BranchRule::Ascii);
    }
    if config.no_whitespace {
        rules.push(BranchRule::NoWhitespace);
    }
    if !config.pattern.is_empty() {
        rules.push(BranchRule::Pattern(compile("branch-pattern", &config.pattern)?));
    }
    if !config.allowed_prefixes.is_empty() {
        rules.push(BranchRule::Prefix(config.allowed_prefixes.clone()));
    }
    if config.max_length > 0 {
        rules.push(BranchRule::MaxLength(config.max_length));
    }
    for pattern in &config.patterns {
        rules.push(BranchRule::Custom(CustomPattern::compile(pattern)?));
    }
    Ok(rules)
}
