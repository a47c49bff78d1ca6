use gac_logger::{LevelFilter, Logger};

#[test]
fn console_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("gac-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(profile = "GAC 2.0", "console line");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
