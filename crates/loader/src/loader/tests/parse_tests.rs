//! Tests for `.env` candidate lookup through the loader.

use std::fs;

use tempfile::TempDir;

use super::array_loader;
use crate::error::{ErrorKind, LoaderError};
use crate::value::Value;

#[test]
fn test_parse_uses_first_existing_candidate() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real.env");
    fs::write(&real, "A=1\nB=2\n").unwrap();

    let mut loader = array_loader();
    loader
        .parse(&[temp_dir.path().join("missing.env"), real])
        .unwrap();

    assert!(loader.is_parsed());
    assert_eq!(loader.get("A"), Some(&Value::from("1")));
    assert_eq!(loader.get("B"), Some(&Value::from("2")));
}

#[test]
fn test_parse_stops_at_first_existing_even_if_empty() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.env");
    let full = temp_dir.path().join("full.env");
    fs::write(&empty, "").unwrap();
    fs::write(&full, "A=1\n").unwrap();

    let mut loader = array_loader();
    loader.parse(&[&empty, &full]).unwrap();

    assert!(loader.is_parsed());
    assert!(!loader.has("A"), "Later candidates must not be read");
}

#[test]
fn test_parse_without_any_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut loader = array_loader();

    let err = loader
        .parse(&[temp_dir.path().join(".env")])
        .unwrap_err();

    assert!(matches!(err, LoaderError::EnvFileNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!loader.is_parsed());
}

#[test]
fn test_parse_unreadable_existing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let full = temp_dir.path().join("full.env");
    fs::write(&full, "A=1\n").unwrap();

    let mut loader = array_loader();
    let err = loader
        .parse(&[temp_dir.path(), full.as_path()])
        .unwrap_err();

    assert!(matches!(err, LoaderError::UnreadableFile { .. }));
    assert!(!loader.has("A"));
}

#[test]
fn test_parse_empty_candidate_list_marks_parsed() {
    let mut loader = array_loader();
    let candidates: [&str; 0] = [];
    loader.parse(&candidates).unwrap();

    assert!(loader.is_parsed());
    assert!(loader.all().is_empty());
}

#[test]
fn test_parse_invalid_syntax_does_not_mark_parsed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "SECRET=hunter2\nINVALID_LINE_WITHOUT_EQUALS").unwrap();

    let mut loader = array_loader();
    let err = loader.parse_file(&path).unwrap_err();

    assert!(matches!(err, LoaderError::Parse { .. }));
    assert!(!err.to_string().contains("hunter2"));
    assert!(!loader.is_parsed());
}

#[test]
fn test_parse_twice_merges_right_biased() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.env");
    let second = temp_dir.path().join("second.env");
    fs::write(&first, "A=1\nB=1\n").unwrap();
    fs::write(&second, "B=2\nC=2\n").unwrap();

    let mut loader = array_loader();
    loader.parse_file(&first).unwrap().parse_file(&second).unwrap();

    let all = loader.all();
    assert_eq!(all["A"], Value::from("1"));
    assert_eq!(all["B"], Value::from("2"));
    assert_eq!(all["C"], Value::from("2"));
}

#[test]
fn test_parse_str_marks_parsed() {
    let mut loader = array_loader();
    loader.parse_str("GREETING=\"hello world\"\n").unwrap();

    assert!(loader.is_parsed());
    assert_eq!(loader.get("GREETING"), Some(&Value::from("hello world")));
}
