use gac_logger::{LoggingConfig, init_from_config};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_json_file_receives_structured_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig { level: "info".to_owned(), json: true, path: Some(log_dir.clone()) };

    let logger = init_from_config("gac-file-logging", &config)?;
    assert!(logger.guard().is_some());

    tracing::info!(constraint = "event.priority.unset", "violation recorded");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|line| line.contains("violation recorded")).expect("logged line");
    assert!(line.starts_with('{'), "expected a JSON line, got {line}");
    assert!(line.contains("event.priority.unset"));

    Ok(())
}
