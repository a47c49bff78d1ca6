use gac_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

#[test]
#[serial]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("gac-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("gac-init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init"
    );
}

#[test]
#[serial]
fn invalid_configured_level_is_reported() {
    let config = gac_logger::LoggingConfig { level: "gac=shouting".to_owned(), ..Default::default() };

    let err = gac_logger::init_from_config("gac-bad-level", &config).expect_err("bad directive");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
