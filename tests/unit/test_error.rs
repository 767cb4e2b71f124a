use std::error::Error;
use swift_auth::error::AppError;

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::SerializationError("key must be a string".to_string());
    assert_eq!(error.to_string(), "serialization error: key must be a string");
}

#[test]
fn test_app_error_display_parse() {
    let error = AppError::ParseError("EOF while parsing".to_string());
    assert_eq!(error.to_string(), "parse error: EOF while parsing");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => {
            assert!(app_error.to_string().starts_with("json error: "));
            assert!(app_error.source().is_some());
            assert!(e.is_syntax());
        }
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_named_variants_have_no_source() {
    assert!(AppError::ParseError("x".to_string()).source().is_none());
    assert!(AppError::SerializationError("x".to_string()).source().is_none());
}
