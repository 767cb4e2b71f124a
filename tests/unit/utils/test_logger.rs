use swift_auth::utils::logger::{parse_level, setup_logger};
use tracing::Level;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level(" TRACE "), Level::TRACE);
    assert_eq!(parse_level("warning"), Level::WARN);
    assert_eq!(parse_level("ERROR"), Level::ERROR);
    assert_eq!(parse_level("info"), Level::INFO);
    assert_eq!(parse_level(""), Level::INFO);
    assert_eq!(parse_level("verbose"), Level::INFO);
}

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    tracing::info!("logger installed");
}
