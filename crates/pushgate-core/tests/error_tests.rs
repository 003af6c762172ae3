// Rust guideline compliant 2026-10-19

//! Unit tests for error types, messages and exit codes.

use pushgate_core::error::{EXIT_CONFIG, EXIT_GIT_FAILURE, EXIT_MALFORMED_INPUT};
use pushgate_core::Error;

#[test]
fn test_malformed_input_formatting() {
    let error = Error::malformed(4, "both object ids are zero");
    assert_eq!(
        error.to_string(),
        "Malformed hook input on line 4: both object ids are zero"
    );
    assert_eq!(error.exit_code(), EXIT_MALFORMED_INPUT);
}

#[test]
fn test_git_error_formatting() {
    let error = Error::Git("revwalk failed".to_string());
    assert_eq!(error.to_string(), "Git error: revwalk failed");
    assert_eq!(error.exit_code(), EXIT_GIT_FAILURE);
}

#[test]
fn test_config_error_formatting() {
    let error = Error::Config("log_level must be one of off".to_string());
    assert!(error.to_string().starts_with("Invalid configuration:"));
    assert_eq!(error.exit_code(), EXIT_CONFIG);
}

#[test]
fn test_invalid_pattern_formatting() {
    let source = regex::Regex::new("(").expect_err("Pattern should not compile");
    let error = Error::InvalidPattern {
        rule: "branch-pattern".to_string(),
        source,
    };
    assert!(error.to_string().contains("branch-pattern"));
    assert_eq!(error.exit_code(), EXIT_CONFIG);
}

#[test]
fn test_policy_and_infrastructure_codes_differ() {
    let codes = [EXIT_MALFORMED_INPUT, EXIT_GIT_FAILURE, EXIT_CONFIG];
    for code in codes {
        assert_ne!(code, 0);
        assert_ne!(code, pushgate_core::error::EXIT_VIOLATIONS);
    }
}
