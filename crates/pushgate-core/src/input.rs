// Rust guideline compliant 2026-10-19

//! Parsing of pre-receive hook input.
//!
//! Git writes one line per updated ref to the hook's standard input:
//! `<old-oid> <new-oid> <ref-name>`. Anything that does not fit that shape is
//! rejected.

use crate::config::ObjectFormat;
use crate::error::{Error, Result};
use crate::models::{Oid, RefUpdate};
use std::io::BufRead;

/// Parses a single hook input line.
///
/// The ref name is everything after the second space, so it may itself
/// contain spaces.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in error messages
/// * `line` - The raw line, with or without a trailing `\r`
/// * `format` - Accepted object id format
///
/// # Errors
///
/// Returns `Error::MalformedInput` if the line does not have three fields,
/// an object id is invalid, the ids disagree in length, or both are zero.
pub fn parse_line(line_no: usize, line: &str, format: ObjectFormat) -> Result<RefUpdate> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(Error::malformed(line_no, "empty line"));
    }

    let mut fields = line.splitn(3, ' ');
    let (old, new, ref_name) = match (fields.next(), fields.next(), fields.next()) {
        (Some(old), Some(new), Some(ref_name)) => (old, new, ref_name),
        _ => {
            return Err(Error::malformed(
                line_no,
                format!("expected '<old-oid> <new-oid> <ref-name>', got '{}'", line),
            ))
        }
    };

    if ref_name.is_empty() {
        return Err(Error::malformed(line_no, "ref name is empty"));
    }

    let old = Oid::parse(old).map_err(|reason| Error::malformed(line_no, reason))?;
    let new = Oid::parse(new).map_err(|reason| Error::malformed(line_no, reason))?;

    if old.len() != new.len() {
        return Err(Error::malformed(
            line_no,
            "old and new object ids have different lengths",
        ));
    }
    if !format.accepts(old.len()) {
        return Err(Error::malformed(
            line_no,
            format!(
                "object id length {} does not match object format '{}'",
                old.len(),
                format.as_str()
            ),
        ));
    }
    if old.is_zero() && new.is_zero() {
        return Err(Error::malformed(line_no, "both object ids are zero"));
    }

    Ok(RefUpdate::new(old, new, ref_name))
}

/// Reads and parses all hook input until end of stream.
///
/// # Arguments
///
/// * `reader` - Hook input, usually standard input
/// * `format` - Accepted object id format
///
/// # Returns
///
/// The ref updates in input order. Empty input yields an empty list.
///
/// # Errors
///
/// Returns an error if reading fails or any line is malformed. Bytes that
/// are not UTF-8 in a ref name are not an error.
pub fn parse_input<R: BufRead>(reader: R, format: ObjectFormat) -> Result<Vec<RefUpdate>> {
    let mut updates = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        // Ref names are bytes to Git; invalid UTF-8 becomes U+FFFD so the
        // branch rules still see and reject it. Object ids stay strict hex.
        let line = String::from_utf8_lossy(&line);
        updates.push(parse_line(idx + 1, &line, format)?);
    }
    Ok(updates)
}
