//! Tests for applying configuration options.

use indexmap::IndexMap;
use serde_json::json;

use super::array_loader;
use crate::adapter::AdapterKind;
use crate::error::LoaderError;
use crate::options::LoaderOptions;
use crate::value::Value;

#[test]
fn test_config_applies_adapters_defaults_and_required() {
    let mut loader = array_loader();
    loader.config(
        LoaderOptions::new()
            .with_adapters(["global", "not-an-adapter", "array"])
            .with_default("PORT", 8080)
            .with_required(["APP_KEY"]),
    );

    assert_eq!(
        loader.adapters().active(),
        &[AdapterKind::Array, AdapterKind::Global]
    );
    assert_eq!(loader.get("PORT"), Some(&Value::from(8080)));
    assert!(loader.variables().is_required("APP_KEY"));
}

#[test]
fn test_config_json_reports_shape_errors() {
    let mut loader = array_loader();

    let err = loader
        .config_json(&json!({ "defaults": ["A"] }))
        .unwrap_err();
    assert!(matches!(err, LoaderError::InvalidDefaults { found: "array" }));

    let err = loader.config_json(&json!({ "required": true })).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidRequired { found: "boolean" }));

    assert!(loader.all().is_empty(), "Invalid options apply nothing");
}

#[test]
fn test_config_json_required_flags() {
    let mut loader = array_loader();
    loader
        .config_json(&json!({
            "adapters": ["array"],
            "defaults": { "LOG_LEVEL": "info" },
            "required": { "A": true, "B": false }
        }))
        .unwrap();

    let expected: IndexMap<String, bool> =
        IndexMap::from([("A".to_string(), true), ("B".to_string(), false)]);
    assert_eq!(loader.variables().required_flags(), &expected);
    assert_eq!(loader.get("LOG_LEVEL"), Some(&Value::from("info")));
}

#[test]
fn test_config_json_defaults_keep_document_order() {
    let mut loader = array_loader();
    loader
        .config_json(&json!({ "defaults": { "Z": 1, "A": "a", "M": false } }))
        .unwrap();

    let all = loader.all();
    let names: Vec<&str> = all.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Z", "A", "M"]);
}
