// Rust guideline compliant 2026-10-19

//! Unit tests for hook input parsing.

use pushgate_core::{parse_input, parse_line, Error, ObjectFormat, UpdateKind};

const OLD: &str = "1111111111111111111111111111111111111111";
const NEW: &str = "abcdef0123456789abcdef0123456789abcdef01";
const ZERO: &str = "0000000000000000000000000000000000000000";

fn assert_malformed(result: pushgate_core::Result<impl std::fmt::Debug>, line: usize) {
    match result {
        Err(Error::MalformedInput { line: got, .. }) => assert_eq!(got, line),
        other => panic!("expected malformed input on line {}, got {:?}", line, other),
    }
}

#[test]
fn test_parse_update_line() {
    let update = parse_line(1, &format!("{} {} refs/heads/main", OLD, NEW), ObjectFormat::Any)
        .expect("Failed to parse line");
    assert_eq!(update.old.as_str(), OLD);
    assert_eq!(update.new.as_str(), NEW);
    assert_eq!(update.ref_name, "refs/heads/main");
    assert_eq!(update.kind(), UpdateKind::Update);
    assert_eq!(update.short_name(), "main");
}

#[test]
fn test_parse_create_and_delete() {
    let create = parse_line(1, &format!("{} {} refs/heads/x", ZERO, NEW), ObjectFormat::Any)
        .expect("Failed to parse create");
    assert_eq!(create.kind(), UpdateKind::Create);

    let delete = parse_line(1, &format!("{} {} refs/heads/x", OLD, ZERO), ObjectFormat::Any)
        .expect("Failed to parse delete");
    assert_eq!(delete.kind(), UpdateKind::Delete);
}

#[test]
fn test_ref_name_keeps_spaces() {
    let update = parse_line(1, &format!("{} {} refs/heads/bad branch", ZERO, NEW), ObjectFormat::Any)
        .expect("Failed to parse line");
    assert_eq!(update.ref_name, "refs/heads/bad branch");
}

#[test]
fn test_uppercase_hex_is_normalized() {
    let upper = NEW.to_uppercase();
    let update = parse_line(1, &format!("{} {} refs/heads/x", OLD, upper), ObjectFormat::Any)
        .expect("Failed to parse line");
    assert_eq!(update.new.as_str(), NEW);
}

#[test]
fn test_carriage_return_is_stripped() {
    let update = parse_line(1, &format!("{} {} refs/heads/x\r", OLD, NEW), ObjectFormat::Any)
        .expect("Failed to parse line");
    assert_eq!(update.ref_name, "refs/heads/x");
}

#[test]
fn test_sha256_ids() {
    let old = "1".repeat(64);
    let new = "a".repeat(64);
    let line = format!("{} {} refs/heads/x", old, new);
    assert!(parse_line(1, &line, ObjectFormat::Any).is_ok());
    assert!(parse_line(1, &line, ObjectFormat::Sha256).is_ok());
    assert_malformed(parse_line(1, &line, ObjectFormat::Sha1), 1);
}

#[test]
fn test_malformed_lines() {
    assert_malformed(parse_line(3, "", ObjectFormat::Any), 3);
    assert_malformed(parse_line(1, &format!("{} {}", OLD, NEW), ObjectFormat::Any), 1);
    assert_malformed(parse_line(1, &format!("{} {} ", OLD, NEW), ObjectFormat::Any), 1);
    assert_malformed(parse_line(1, &format!("xyz {} refs/heads/x", NEW), ObjectFormat::Any), 1);
    assert_malformed(
        parse_line(1, &format!("{} {} refs/heads/x", "g".repeat(40), NEW), ObjectFormat::Any),
        1,
    );
    assert_malformed(
        parse_line(1, &format!("{} {} refs/heads/x", OLD, "a".repeat(64)), ObjectFormat::Any),
        1,
    );
    assert_malformed(parse_line(1, &format!("{} {} refs/heads/x", ZERO, ZERO), ObjectFormat::Any), 1);
}

#[test]
fn test_parse_input_multiple_lines() {
    let input = format!(
        "{} {} refs/heads/main\n{} {} refs/heads/old\n",
        OLD, NEW, OLD, ZERO
    );
    let updates = parse_input(input.as_bytes(), ObjectFormat::Any).expect("Failed to parse input");
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].kind(), UpdateKind::Delete);
}

#[test]
fn test_parse_input_empty() {
    let updates = parse_input("".as_bytes(), ObjectFormat::Any).expect("Failed to parse input");
    assert!(updates.is_empty());
}

#[test]
fn test_parse_input_reports_line_number() {
    let input = format!("{} {} refs/heads/main\nnot a valid line\n", OLD, NEW);
    assert_malformed(parse_input(input.as_bytes(), ObjectFormat::Any), 2);
}

#[test]
fn test_malformed_error_exit_code() {
    let error = parse_line(1, "garbage", ObjectFormat::Any).expect_err("Should fail");
    assert_eq!(error.exit_code(), 2);
    assert!(error.to_string().contains("line 1"));
}

#[test]
fn test_non_utf8_ref_name_is_kept() {
    let mut input = format!("{} {} refs/heads/caf", ZERO, NEW).into_bytes();
    input.extend_from_slice(b"\xE9\n");
    let updates = parse_input(input.as_slice(), ObjectFormat::Any).expect("Failed to parse input");

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].ref_name, "refs/heads/caf\u{fffd}");
    assert!(!updates[0].ref_name.is_ascii());
}

#[test]
fn test_non_utf8_object_id_is_malformed() {
    let mut input = b"\xE9".to_vec();
    input.extend_from_slice(format!("{} {} refs/heads/main\n", &OLD[1..], NEW).as_bytes());
    assert_malformed(parse_input(input.as_slice(), ObjectFormat::Any), 1);
}
