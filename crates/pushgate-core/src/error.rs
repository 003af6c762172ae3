// Rust guideline compliant 2026-10-19

//! Error types for the Pushgate core library.

use thiserror::Error;

/// Result type alias for Pushgate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a push rejected by one or more rules.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit code for unparsable hook input.
pub const EXIT_MALFORMED_INPUT: i32 = 2;
/// Exit code for a failing version-control lookup.
pub const EXIT_GIT_FAILURE: i32 = 3;
/// Exit code for invalid configuration.
pub const EXIT_CONFIG: i32 = 4;

/// Error types for Pushgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A configured regular expression does not compile.
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Rule the pattern belongs to.
        rule: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A line of hook input could not be parsed.
    #[error("Malformed hook input on line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// The version-control collaborator failed.
    #[error("Git error: {0}")]
    Git(String),
}

impl Error {
    /// Returns the process exit code that reports this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MalformedInput { .. } => EXIT_MALFORMED_INPUT,
            Error::Git(_) => EXIT_GIT_FAILURE,
            Error::Config(_) | Error::InvalidPattern { .. } => EXIT_CONFIG,
            Error::Io(_) => EXIT_MALFORMED_INPUT,
        }
    }

    /// Creates a malformed input error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
