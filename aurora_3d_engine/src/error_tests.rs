//! Unit tests for error.rs
//!
//! Tests Display formatting and the engine_err!/engine_bail! macros.

use crate::error::{Error, Result};

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn test_display_backend_error() {
    let err = Error::BackendError("context lost".to_string());
    assert_eq!(err.to_string(), "Backend error: context lost");
}

#[test]
fn test_display_invalid_resource() {
    let err = Error::InvalidResource("texture unit 40 out of range".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid resource: texture unit 40 out of range"
    );
}

#[test]
fn test_display_initialization_failed() {
    let err = Error::InitializationFailed("no adapter".to_string());
    assert_eq!(err.to_string(), "Initialization failed: no adapter");
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::BackendError("x".to_string()));
    assert!(err.source().is_none());
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_engine_err_builds_invalid_resource() {
    let err = crate::engine_err!("aurora3d::test::error", "bad handle {}", 7);
    match err {
        Error::InvalidResource(msg) => assert_eq!(msg, "bad handle 7"),
        other => panic!("unexpected variant: {:?}", other),
    }
}

#[test]
fn test_engine_bail_early_returns() {
    fn check_unit(unit: u32) -> Result<u32> {
        if unit >= 32 {
            crate::engine_bail!("aurora3d::test::error", "texture unit {} out of range", unit);
        }
        Ok(unit)
    }

    assert_eq!(check_unit(5).unwrap(), 5);
    assert!(matches!(
        check_unit(40),
        Err(Error::InvalidResource(msg)) if msg == "texture unit 40 out of range"
    ));
}
