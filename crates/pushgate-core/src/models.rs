// Rust guideline compliant 2026-10-19

//! Core data models for hook input and commits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ref namespace holding branches.
pub const BRANCH_PREFIX: &str = "refs/heads/";

/// Hex length of a SHA-1 object id.
pub const SHA1_HEX_LEN: usize = 40;

/// Hex length of a SHA-256 object id.
pub const SHA256_HEX_LEN: usize = 64;

/// A Git object id in hexadecimal form.
///
/// Always lowercase, and either 40 or 64 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    /// Parses an object id from hex.
    ///
    /// # Arguments
    ///
    /// * `hex` - 40 or 64 hexadecimal characters, any case
    ///
    /// # Returns
    ///
    /// The normalized id, or a description of what is wrong with the input.
    pub fn parse(hex: &str) -> std::result::Result<Self, String> {
        if hex.len() != SHA1_HEX_LEN && hex.len() != SHA256_HEX_LEN {
            return Err(format!(
                "object id '{}' must be {} or {} hex characters, got {}",
                hex,
                SHA1_HEX_LEN,
                SHA256_HEX_LEN,
                hex.len()
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("object id '{}' is not hexadecimal", hex));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Returns the all-zero id of the given hex length.
    pub fn zero(len: usize) -> Self {
        Self("0".repeat(len))
    }

    /// Whether this is the all-zero id Git uses for "no object".
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// The id as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex length of the id.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; object ids are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a ref update changes the ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// The ref does not exist yet.
    Create,
    /// The ref moves from one commit to another.
    Update,
    /// The ref is removed.
    Delete,
}

/// One line of pre-receive hook input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefUpdate {
    /// Object the ref pointed to before the push (zero on creation).
    pub old: Oid,
    /// Object the ref will point to after the push (zero on deletion).
    pub new: Oid,
    /// Full ref name, e.g. `refs/heads/feature/x`.
    pub ref_name: String,
}

impl RefUpdate {
    /// Creates a new ref update.
    pub fn new(old: Oid, new: Oid, ref_name: impl Into<String>) -> Self {
        Self {
            old,
            new,
            ref_name: ref_name.into(),
        }
    }

    /// Classifies the update.
    pub fn kind(&self) -> UpdateKind {
        if self.new.is_zero() {
            UpdateKind::Delete
        } else if self.old.is_zero() {
            UpdateKind::Create
        } else {
            UpdateKind::Update
        }
    }

    /// Whether the ref is a branch.
    pub fn is_branch(&self) -> bool {
        self.ref_name.starts_with(BRANCH_PREFIX)
    }

    /// The ref name without the `refs/heads/` prefix.
    pub fn short_name(&self) -> &str {
        self.ref_name
            .strip_prefix(BRANCH_PREFIX)
            .unwrap_or(&self.ref_name)
    }
}

/// A commit introduced by a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit object id.
    pub id: Oid,
    /// Raw commit message.
    pub message: String,
}
