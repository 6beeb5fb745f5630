//! Tests for validation through the loader.

use super::array_loader;
use crate::error::{ErrorKind, LoaderError};

#[test]
fn test_validate_before_parse_is_logic_error() {
    let loader = array_loader();
    let err = loader.validate("PORT").unwrap_err();

    assert!(matches!(err, LoaderError::NotParsed { .. }));
    assert_eq!(err.kind(), ErrorKind::Logic);
}

#[test]
fn test_validate_is_integer_on_native_and_parsed_values() {
    let mut loader = array_loader();
    loader.parse_str("PARSED_PORT=8080\n").unwrap();
    loader.set("PORT", 8080);

    assert!(loader.validate("PORT").unwrap().apply("isInteger", &[]).is_ok());

    let err = loader
        .validate("PARSED_PORT")
        .unwrap()
        .apply("isInteger", &[])
        .unwrap_err();
    assert!(matches!(
        err,
        LoaderError::AssertionFailed { ref name, rule: "is_integer", .. } if name == "PARSED_PORT"
    ));
}

#[test]
fn test_validate_chains_assertions() {
    let mut loader = array_loader();
    loader.parse_str("APP_ENV=production\nDEBUG=off\n").unwrap();

    let result = loader.validate("APP_ENV").and_then(|validator| {
        validator
            .not_empty()?
            .allowed_values(["local", "production"])?;
        Ok(())
    });
    assert!(result.is_ok());

    assert!(loader.validate("DEBUG").unwrap().is_boolean().is_ok());
}
