// Rust guideline compliant 2026-10-19

//! Configuration management for Pushgate.
//!
//! The rule set is static for the lifetime of one hook invocation: it is
//! loaded once at start-up and never mutated afterwards.

use crate::models::{SHA1_HEX_LEN, SHA256_HEX_LEN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "PUSHGATE_CONFIG";

/// File name looked up inside the Git directory.
pub const CONFIG_FILE_NAME: &str = "pushgate.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Object id format accepted in hook input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFormat {
    /// Accept SHA-1 and SHA-256 ids.
    #[default]
    Any,
    /// Accept only 40-character ids.
    Sha1,
    /// Accept only 64-character ids.
    Sha256,
}

impl ObjectFormat {
    /// Whether an id of `len` hex characters is acceptable.
    pub fn accepts(self, len: usize) -> bool {
        match self {
            ObjectFormat::Any => len == SHA1_HEX_LEN || len == SHA256_HEX_LEN,
            ObjectFormat::Sha1 => len == SHA1_HEX_LEN,
            ObjectFormat::Sha256 => len == SHA256_HEX_LEN,
        }
    }

    /// Configuration name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectFormat::Any => "any",
            ObjectFormat::Sha1 => "sha1",
            ObjectFormat::Sha256 => "sha256",
        }
    }
}

/// Whether a custom pattern must or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatternMode {
    /// The subject fails unless the pattern matches.
    #[default]
    Require,
    /// The subject fails if the pattern matches.
    Forbid,
}

/// A user-defined regular expression rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Rule id shown in diagnostics.
    pub name: String,
    /// Regular expression.
    pub pattern: String,
    /// Explanation shown to the pusher when the rule fails.
    pub explanation: String,
    /// Require or forbid a match.
    #[serde(default)]
    pub mode: PatternMode,
}

/// Branch name rules.
///
/// Numeric limits of zero and empty patterns disable the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    /// Reject non-ASCII branch names.
    pub ascii_only: bool,
    /// Reject branch names containing whitespace.
    pub no_whitespace: bool,
    /// Regex the short branch name must match.
    pub pattern: String,
    /// Allowed branch name prefixes; empty allows any.
    pub allowed_prefixes: Vec<String>,
    /// Maximum branch name length in characters.
    pub max_length: usize,
    /// Additional pattern rules.
    pub patterns: Vec<PatternRule>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            ascii_only: true,
            no_whitespace: true,
            pattern: default_branch_pattern(),
            allowed_prefixes: Vec::new(),
            max_length: 0,
            patterns: Vec::new(),
        }
    }
}

/// Commit message rules.
///
/// Numeric limits of zero and empty patterns disable the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Reject non-ASCII messages.
    pub ascii_only: bool,
    /// Maximum subject line length.
    pub subject_max_length: usize,
    /// Maximum length of each body line.
    pub body_max_line_length: usize,
    /// Require the subject to end with an alphanumeric character.
    pub forbid_trailing_period: bool,
    /// Require a capitalized alphabetic first word.
    pub capitalize_subject: bool,
    /// Reject subjects whose first word is in `non_imperative_words` or
    /// ends in one of `non_imperative_suffixes`.
    pub imperative_subject: bool,
    /// First words that are not in the imperative mood.
    pub non_imperative_words: Vec<String>,
    /// Endings that mark a first word as past tense or progressive.
    pub non_imperative_suffixes: Vec<String>,
    /// Imperative verbs that happen to end in one of the suffixes.
    pub imperative_exceptions: Vec<String>,
    /// Reject single-word subjects.
    pub forbid_single_word: bool,
    /// Require a blank line between subject and body.
    pub require_blank_line: bool,
    /// Reject lines with trailing whitespace.
    pub forbid_trailing_whitespace: bool,
    /// Regex merge commit subjects must match.
    pub merge_subject_pattern: String,
    /// Regex every subject must match, e.g. a ticket reference.
    pub required_subject_pattern: String,
    /// Explanation shown when `required_subject_pattern` fails.
    pub required_subject_explanation: String,
    /// Words that must not appear in the message.
    pub forbidden_words: Vec<String>,
    /// Additional pattern rules, matched against the whole message.
    pub patterns: Vec<PatternRule>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            ascii_only: true,
            subject_max_length: 70,
            body_max_line_length: 72,
            forbid_trailing_period: true,
            capitalize_subject: true,
            imperative_subject: true,
            non_imperative_words: default_non_imperative_words(),
            non_imperative_suffixes: vec!["ed".to_string(), "ing".to_string()],
            imperative_exceptions: default_imperative_exceptions(),
            forbid_single_word: true,
            require_blank_line: true,
            forbid_trailing_whitespace: true,
            merge_subject_pattern: default_merge_subject_pattern(),
            required_subject_pattern: String::new(),
            required_subject_explanation: "Reference a ticket in the subject line".to_string(),
            forbidden_words: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

/// Configuration for Pushgate behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accepted object id format in hook input.
    pub object_format: ObjectFormat,

    /// Ref prefixes that are validated; other refs pass unchecked.
    pub checked_ref_prefixes: Vec<String>,

    /// Skip commits already reachable from any existing ref.
    pub exclude_existing_refs: bool,

    /// Log level for diagnostics logging (`off` disables it).
    pub log_level: String,

    /// File receiving log output instead of standard error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Branch name rules.
    pub branch: BranchConfig,

    /// Commit message rules.
    pub message: MessageConfig,
}

fn default_branch_pattern() -> String {
    r"^[a-z][-a-z0-9/.]+[a-z0-9]$".to_string()
}

fn default_merge_subject_pattern() -> String {
    r"^Merge .+ (into|to) [-a-z0-9/.']+$".to_string()
}

fn default_non_imperative_words() -> Vec<String> {
    [
        "Added", "Adds", "Adding", "Fixed", "Fixes", "Fixing", "Updated", "Updates",
        "Updating", "Removed", "Removes", "Removing", "Changed", "Changes", "Changing",
        "Refactored", "Refactors", "Refactoring", "Implemented", "Implements", "Implementing",
        "Created", "Creates", "Creating", "Deleted", "Deletes", "Deleting", "Moved", "Moves",
        "Moving", "Renamed", "Renames", "Renaming", "Improved", "Improves", "Improving",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_imperative_exceptions() -> Vec<String> {
    [
        "Bleed", "Breed", "Bring", "Embed", "Exceed", "Proceed", "Speed", "Spring", "String",
        "Succeed", "Swing",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            object_format: ObjectFormat::default(),
            checked_ref_prefixes: vec!["refs/heads/".to_string()],
            exclude_existing_refs: true,
            log_level: "off".to_string(),
            log_file: None,
            branch: BranchConfig::default(),
            message: MessageConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if given
    /// 3. Environment variables with `PUSHGATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Configuration file; `None` uses the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML
    /// - An environment override or a configuration value is invalid
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading overrides through `lookup`.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides_from(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Picks the configuration file to load.
    ///
    /// Precedence: explicit path, `PUSHGATE_CONFIG`, then `pushgate.toml`
    /// inside the Git directory when it exists.
    ///
    /// # Arguments
    ///
    /// * `explicit` - Path passed on the command line
    /// * `git_dir` - The repository's Git directory, if known
    /// * `lookup` - Environment lookup
    ///
    /// # Returns
    ///
    /// The file to load, or `None` to use the defaults.
    pub fn resolve_path<F>(explicit: Option<&Path>, git_dir: Option<&Path>, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = lookup(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        git_dir
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .filter(|candidate| candidate.is_file())
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PUSHGATE_SUBJECT_MAX_LENGTH` - Subject line limit (0 disables)
    /// - `PUSHGATE_BODY_MAX_LINE_LENGTH` - Body line limit (0 disables)
    /// - `PUSHGATE_BRANCH_PATTERN` - Branch name regex
    /// - `PUSHGATE_REQUIRED_SUBJECT_PATTERN` - Required subject regex
    /// - `PUSHGATE_EXCLUDE_EXISTING_REFS` - true/false
    /// - `PUSHGATE_LOG_LEVEL` - off/error/warn/info/debug/trace
    /// - `PUSHGATE_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value is invalid.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PUSHGATE_SUBJECT_MAX_LENGTH") {
            self.message.subject_max_length = val.parse().map_err(|_| {
                Error::Config("PUSHGATE_SUBJECT_MAX_LENGTH must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("PUSHGATE_BODY_MAX_LINE_LENGTH") {
            self.message.body_max_line_length = val.parse().map_err(|_| {
                Error::Config("PUSHGATE_BODY_MAX_LINE_LENGTH must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("PUSHGATE_BRANCH_PATTERN") {
            self.branch.pattern = val;
        }

        if let Some(val) = lookup("PUSHGATE_REQUIRED_SUBJECT_PATTERN") {
            self.message.required_subject_pattern = val;
        }

        if let Some(val) = lookup("PUSHGATE_EXCLUDE_EXISTING_REFS") {
            self.exclude_existing_refs = val.parse().map_err(|_| {
                Error::Config("PUSHGATE_EXCLUDE_EXISTING_REFS must be true or false".to_string())
            })?;
        }

        if let Some(val) = lookup("PUSHGATE_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Some(val) = lookup("PUSHGATE_LOG_FILE") {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// Regular expressions are checked when the rule set is compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - log_level is not a known level
    /// - checked_ref_prefixes is empty or has an empty entry
    /// - a custom pattern rule has an empty name
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if self.checked_ref_prefixes.is_empty() {
            return Err(Error::Config(
                "checked_ref_prefixes must not be empty".to_string(),
            ));
        }
        if self.checked_ref_prefixes.iter().any(|p| p.is_empty()) {
            return Err(Error::Config(
                "checked_ref_prefixes must not contain empty prefixes".to_string(),
            ));
        }

        let custom = self.branch.patterns.iter().chain(&self.message.patterns);
        for rule in custom {
            if rule.name.trim().is_empty() {
                return Err(Error::Config(format!(
                    "pattern rule '{}' has an empty name",
                    rule.pattern
                )));
            }
        }

        Ok(())
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The file cannot be created or written
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("Cannot write {}: {}", path.display(), e)))?;
        Ok(())
    }
}
