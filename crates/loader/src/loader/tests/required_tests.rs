//! Tests for required-variable checks.

use super::array_loader;
use crate::error::{ErrorKind, LoaderError};

#[test]
fn test_check_required_before_parse_is_logic_error() {
    let loader = array_loader();
    let err = loader.check_required().unwrap_err();

    assert!(matches!(err, LoaderError::NotParsed { .. }));
    assert_eq!(err.kind(), ErrorKind::Logic);
}

#[test]
fn test_missing_required_variable_is_named() {
    let mut loader = array_loader();
    loader.required(["A", "C"]);
    loader.parse_str("A=1\nB=2\n").unwrap();

    let err = loader.check_required().unwrap_err();
    match &err {
        LoaderError::MissingRequired(names) => assert_eq!(names, &vec!["C".to_string()]),
        other => panic!("expected MissingRequired, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Required variables are not set: C");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_all_missing_names_listed_in_required_order() {
    let mut loader = array_loader();
    loader.required(["Z", "A"]).required("M");
    loader.parse_str("").unwrap();

    let err = loader.check_required().unwrap_err();
    assert_eq!(err.to_string(), "Required variables are not set: Z, A, M");
}

#[test]
fn test_required_list_replaces_earlier_requirements() {
    let mut loader = array_loader();
    loader.required("OLD").required(["NEW"]);
    loader.parse_str("").unwrap();

    let err = loader.check_required().unwrap_err();
    assert_eq!(err.to_string(), "Required variables are not set: NEW");
}

#[test]
fn test_missing_names_keep_json_required_order() {
    let mut loader = array_loader();
    loader
        .config_json(&serde_json::json!({ "required": { "Z": true, "A": true, "M": false } }))
        .unwrap();
    loader.parse_str("").unwrap();

    let err = loader.check_required().unwrap_err();
    assert_eq!(err.to_string(), "Required variables are not set: Z, A");
}

#[test]
fn test_default_does_not_satisfy_requirement() {
    let mut loader = array_loader();
    loader.required("PORT").set_default("PORT", 8080);
    loader.parse_str("").unwrap();

    assert!(matches!(
        loader.check_required(),
        Err(LoaderError::MissingRequired(_))
    ));

    loader.set("PORT", "9000");
    assert!(loader.check_required().is_ok());
}

#[test]
fn test_clear_drops_requirement() {
    let mut loader = array_loader();
    loader.required("A").set("A", "1").set_default("A", "0");
    loader.parse_str("").unwrap();

    loader.clear("A");
    assert!(loader.check_required().is_ok());
    assert!(!loader.has("A"));
    assert_eq!(loader.get("A"), None);
}

#[test]
fn test_failed_check_writes_nothing() {
    let mut loader = array_loader();
    loader.required("MISSING");
    loader.parse_str("A=1\n").unwrap();

    assert!(loader.load().is_err());
    assert!(loader.overload().is_err());
    assert!(!loader.get_adapter("array").unwrap().has("A"));
}
