// Rust guideline compliant 2026-10-19

//! Commit message rules.

use super::{compile, CustomPattern};
use crate::config::MessageConfig;
use crate::Result;
use regex::Regex;

/// Subject prefixes Git uses for generated merge messages.
const MERGE_PREFIXES: &[&str] = &["Merge branch ", "Merge commit "];

/// A commit message split into the parts the rules look at.
///
/// Comment lines (starting with `#`) are dropped before splitting.
#[derive(Debug)]
pub(crate) struct ParsedMessage<'a> {
    raw: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> ParsedMessage<'a> {
    pub(crate) fn parse(raw: &'a str) -> Self {
        let lines = raw.lines().filter(|line| !line.starts_with('#')).collect();
        Self { raw, lines }
    }

    fn subject(&self) -> &'a str {
        self.lines.first().copied().unwrap_or("")
    }

    fn body(&self) -> &[&'a str] {
        self.lines.get(1..).unwrap_or(&[])
    }

    pub(crate) fn has_subject(&self) -> bool {
        !self.subject().trim().is_empty()
    }

    fn is_merge(&self) -> bool {
        let subject = self.subject();
        MERGE_PREFIXES.iter().any(|p| subject.starts_with(p))
    }

    fn first_word(&self) -> &'a str {
        self.subject().split_whitespace().next().unwrap_or("")
    }
}

/// Word lists behind the imperative-mood check.
#[derive(Debug, Clone)]
pub(crate) struct MoodWords {
    words: Vec<String>,
    suffixes: Vec<String>,
    exceptions: Vec<String>,
}

impl MoodWords {
    fn is_non_imperative(&self, first: &str) -> bool {
        let same = |w: &String| w.eq_ignore_ascii_case(first);
        if self.words.iter().any(same) {
            return true;
        }
        if self.exceptions.iter().any(same) {
            return false;
        }
        let lower = first.to_lowercase();
        let len = lower.chars().count();
        // Short words like "need" or "ring" are left alone.
        self.suffixes.iter().any(|suffix| {
            let suffix = suffix.to_lowercase();
            len > suffix.chars().count() + 2 && lower.ends_with(&suffix)
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) enum MessageRule {
    Ascii,
    SubjectEmpty,
    SubjectLength(usize),
    SubjectPeriod,
    MergeSubject(Regex),
    Capitalized,
    Imperative(MoodWords),
    SingleWord,
    BlankLine,
    BodyLineLength(usize),
    TrailingWhitespace,
    Ticket { regex: Regex, explanation: String },
    ForbiddenWord { word: String, regex: Regex },
    Custom(CustomPattern),
}

impl MessageRule {
    pub(crate) fn id(&self) -> &str {
        match self {
            MessageRule::Ascii => "message-ascii",
            MessageRule::SubjectEmpty => "subject-empty",
            MessageRule::SubjectLength(_) => "subject-length",
            MessageRule::SubjectPeriod => "subject-period",
            MessageRule::MergeSubject(_) => "merge-subject",
            MessageRule::Capitalized => "subject-capitalized",
            MessageRule::Imperative(_) => "subject-imperative",
            MessageRule::SingleWord => "subject-single-word",
            MessageRule::BlankLine => "subject-blank-line",
            MessageRule::BodyLineLength(_) => "body-line-length",
            MessageRule::TrailingWhitespace => "trailing-whitespace",
            MessageRule::Ticket { .. } => "subject-ticket",
            MessageRule::ForbiddenWord { .. } => "forbidden-words",
            MessageRule::Custom(custom) => &custom.name,
        }
    }

    pub(crate) fn explanation(&self) -> String {
        match self {
            MessageRule::Ascii => "Use only ascii characters".to_string(),
            MessageRule::SubjectEmpty => "Do not make subject line empty".to_string(),
            MessageRule::SubjectLength(max) => {
                format!("Limit the subject line to {} characters", max)
            }
            MessageRule::SubjectPeriod => "Do not end the subject line with a period".to_string(),
            MessageRule::MergeSubject(regex) => format!(
                "Subject line for merge commits must match regex '{}'",
                regex.as_str()
            ),
            MessageRule::Capitalized => "Capitalize the subject line".to_string(),
            MessageRule::Imperative(_) => {
                "Use the imperative mood in the subject line".to_string()
            }
            MessageRule::SingleWord => "Do not write single worded commits".to_string(),
            MessageRule::BlankLine => "Separate subject from body with a blank line".to_string(),
            MessageRule::BodyLineLength(max) => format!("Wrap the body at {} characters", max),
            MessageRule::TrailingWhitespace => "Remove trailing whitespace".to_string(),
            MessageRule::Ticket { explanation, .. } => explanation.clone(),
            MessageRule::ForbiddenWord { word, .. } => format!("Do not use the word '{}'", word),
            MessageRule::Custom(custom) => custom.explanation.clone(),
        }
    }

    /// Rules that only make sense once there is a subject line.
    pub(crate) fn needs_subject(&self) -> bool {
        matches!(
            self,
            MessageRule::SubjectLength(_)
                | MessageRule::SubjectPeriod
                | MessageRule::MergeSubject(_)
                | MessageRule::Capitalized
                | MessageRule::Imperative(_)
                | MessageRule::SingleWord
                | MessageRule::Ticket { .. }
        )
    }

    pub(crate) fn passes(&self, message: &ParsedMessage<'_>) -> bool {
        let subject = message.subject();
        match self {
            MessageRule::Ascii => message.raw.is_ascii(),
            MessageRule::SubjectEmpty => message.has_subject(),
            MessageRule::SubjectLength(max) => {
                message.is_merge() || subject.chars().count() <= *max
            }
            MessageRule::SubjectPeriod => {
                message.is_merge() || subject.chars().last().map_or(true, char::is_alphanumeric)
            }
            MessageRule::MergeSubject(regex) => !message.is_merge() || regex.is_match(subject),
            MessageRule::Capitalized => is_capitalized(message.first_word()),
            MessageRule::Imperative(mood) => !mood.is_non_imperative(message.first_word()),
            MessageRule::SingleWord => subject.split_whitespace().nth(1).is_some(),
            MessageRule::BlankLine => has_blank_separator(message.body()),
            MessageRule::BodyLineLength(max) => {
                message.body().iter().all(|line| line.chars().count() <= *max)
            }
            MessageRule::TrailingWhitespace => message
                .lines
                .iter()
                .all(|line| line.trim_end().len() == line.len()),
            MessageRule::Ticket { regex, .. } => regex.is_match(subject),
            MessageRule::ForbiddenWord { regex, .. } => !regex.is_match(message.raw),
            MessageRule::Custom(custom) => custom.passes(message.raw),
        }
    }
}

/// Alphabetic, first letter uppercase, the rest lowercase.
fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() && first.is_uppercase() => {
            chars.all(|c| c.is_alphabetic() && c.is_lowercase())
        }
        _ => false,
    }
}

/// The line after the subject is blank, and the body (if any) starts right
/// after that single blank line.
fn has_blank_separator(body: &[&str]) -> bool {
    let Some(first) = body.first() else {
        return true;
    };
    if !first.trim().is_empty() {
        return false;
    }
    if body.iter().all(|line| line.trim().is_empty()) {
        return true;
    }
    body.get(1).is_some_and(|line| !line.trim().is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive pattern matching `word` as a whole term.
///
/// A `\b` boundary only exists next to a word character, so an edge of the
/// term that is punctuation is anchored on a non-word character or the end
/// of the text instead.
fn forbidden_word_pattern(word: &str) -> String {
    let start = match word.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let end = match word.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    format!("(?i){}{}{}", start, regex::escape(word), end)
}

pub(crate) fn compile_rules(config: &MessageConfig) -> Result<Vec<MessageRule>> {
    let mut rules = Vec::new();
    if config.ascii_only {
        rules.push(MessageRule::Ascii);
    }
    rules.push(MessageRule::SubjectEmpty);
    if config.subject_max_length > 0 {
        rules.push(MessageRule::SubjectLength(config.subject_max_length));
    }
    if config.forbid_trailing_period {
        rules.push(MessageRule::SubjectPeriod);
    }
    if !config.merge_subject_pattern.is_empty() {
        rules.push(MessageRule::MergeSubject(compile(
            "merge-subject",
            &config.merge_subject_pattern,
        )?));
    }
    if config.capitalize_subject {
        rules.push(MessageRule::Capitalized);
    }
    let mood = MoodWords {
        words: config.non_imperative_words.clone(),
        suffixes: config.non_imperative_suffixes.clone(),
        exceptions: config.imperative_exceptions.clone(),
    };
    if config.imperative_subject && !(mood.words.is_empty() && mood.suffixes.is_empty()) {
        rules.push(MessageRule::Imperative(mood));
    }
    if config.forbid_single_word {
        rules.push(MessageRule::SingleWord);
    }
    if config.require_blank_line {
        rules.push(MessageRule::BlankLine);
    }
    if config.body_max_line_length > 0 {
        rules.push(MessageRule::BodyLineLength(config.body_max_line_length));
    }
    if config.forbid_trailing_whitespace {
        rules.push(MessageRule::TrailingWhitespace);
    }
    if !config.required_subject_pattern.is_empty() {
        rules.push(MessageRule::Ticket {
            regex: compile("subject-ticket", &config.required_subject_pattern)?,
            explanation: config.required_subject_explanation.clone(),
        });
    }
    for word in &config.forbidden_words {
        let pattern = forbidden_word_pattern(word);
        rules.push(MessageRule::ForbiddenWord {
            word: word.clone(),
            regex: compile("forbidden-words", &pattern)?,
        });
    }
    for pattern in &config.patterns {
        rules.push(MessageRule::Custom(CustomPattern::compile(pattern)?));
    }
    Ok(rules)
}
