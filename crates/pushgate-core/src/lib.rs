// Rust guideline compliant 2026-10-19

//! Pushgate Core Library
//!
//! This crate provides the building blocks of the Pushgate pre-receive hook:
//! - Data models (Oid, RefUpdate, Commit)
//! - Hook input parsing
//! - Branch name and commit message rules
//! - The validator and its version-control seam
//! - Validation reports
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod rules;
pub mod validator;

pub use config::{BranchConfig, Config, MessageConfig, ObjectFormat, PatternMode, PatternRule};
pub use error::{Error, Result};
pub use input::{parse_input, parse_line};
pub use models::{Commit, Oid, RefUpdate, UpdateKind};
pub use report::{Subject, ValidationReport, Violation};
pub use rules::{RuleFailure, RuleInfo, RuleSet, RuleTarget};
pub use validator::{CommitSource, Validator};
