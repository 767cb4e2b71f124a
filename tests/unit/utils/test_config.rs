use std::env;
use swift_auth::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SWIFT_AUTH_TEST_STRING", "test_value");
        let result: String = get_env_or_default("SWIFT_AUTH_TEST_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SWIFT_AUTH_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("SWIFT_AUTH_TEST_TRIM", "  ORD \n");
        let result: String = get_env_or_default("SWIFT_AUTH_TEST_TRIM", String::new());
        assert_eq!(result, "ORD");
        env::remove_var("SWIFT_AUTH_TEST_TRIM");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("SWIFT_AUTH_TEST_BLANK", "   ");
        let result: String = get_env_or_default("SWIFT_AUTH_TEST_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("SWIFT_AUTH_TEST_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SWIFT_AUTH_TEST_MISSING");
    }
    let result: String = get_env_or_default("SWIFT_AUTH_TEST_MISSING", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SWIFT_AUTH_TEST_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("SWIFT_AUTH_TEST_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("SWIFT_AUTH_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("SWIFT_AUTH_TEST_NONE_INT", "42");
        env::set_var("SWIFT_AUTH_TEST_NONE_BAD", "forty-two");
        env::remove_var("SWIFT_AUTH_TEST_NONE_MISSING");

        assert_eq!(get_env_or_none::<i32>("SWIFT_AUTH_TEST_NONE_INT"), Some(42));
        assert_eq!(get_env_or_none::<i32>("SWIFT_AUTH_TEST_NONE_BAD"), None);
        assert_eq!(get_env_or_none::<String>("SWIFT_AUTH_TEST_NONE_MISSING"), None);

        env::remove_var("SWIFT_AUTH_TEST_NONE_INT");
        env::remove_var("SWIFT_AUTH_TEST_NONE_BAD");
    }
}
