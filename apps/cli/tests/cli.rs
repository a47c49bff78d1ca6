use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn gac_check(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gac-check").unwrap();
    cmd.current_dir(dir.path()).env("GAC__LOGGING__LEVEL", "error");
    cmd
}

#[test]
fn compliant_ven_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "ven.json", r#"{"venName": "NL-ABC"}"#);

    gac_check(&dir)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (NewVen, 2 constraints)"));
}

#[test]
fn violations_are_listed_with_a_failing_exit_code() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "ven.json", r#"{"id": "v1", "venName": "ZZ-123"}"#);

    gac_check(&dir)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 validation error for ExistingVen"))
        .stdout(predicate::str::contains("ven.ven_name.country_code"));
}

#[test]
fn arrays_report_every_element() {
    let dir = TempDir::new().unwrap();
    let file = write(
        dir.path(),
        "vens.json",
        r#"[{"venName": "NL-ABC"}, {"venName": "ABCDEFG"}]"#,
    );

    gac_check(&dir)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("vens.json[0]: OK"))
        .stdout(predicate::str::contains("vens.json[1]: 1 validation error"));
}

#[test]
fn json_output_is_one_line_per_document() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "program.json", r#"{"programName": "p"}"#);

    let output = gac_check(&dir).args(["--json", "--kind", "program"]).arg(&file).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let line: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(line["valid"], false);
    assert_eq!(line["kind"], "NewProgram");
    assert_eq!(line["violations"][0]["constraint_id"], "program.retailer_name.present");
    assert_eq!(line["violations"][0]["code"], "value_error");
}

#[test]
fn fail_fast_stops_at_the_first_violation() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "program.json", r#"{"programName": "p"}"#);

    let output = gac_check(&dir).args(["--json", "--fail-fast"]).arg(&file).output().unwrap();

    let line: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(line["violations"].as_array().map(Vec::len), Some(1));
}

#[test]
fn profiles_can_be_disabled_from_configuration() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "gac.toml", "[profiles]\nenabled = []\n");
    let file = write(dir.path(), "ven.json", r#"{"venName": "ZZ-123"}"#);

    gac_check(&dir)
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (NewVen, 0 constraints)"));
}

#[test]
fn unknown_profile_names_are_rejected_on_the_command_line() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "ven.json", r#"{"venName": "not an emi3 name"}"#);

    gac_check(&dir)
        .args(["--profiles", "gac2"])
        .arg(&file)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown compliance profile 'gac2'"));
}

#[test]
fn unknown_profile_names_are_rejected_in_configuration() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "gac.toml", "[profiles]\nenabled = [\"gac2\"]\n");
    let file = write(dir.path(), "ven.json", r#"{"venName": "not an emi3 name"}"#);

    gac_check(&dir)
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown compliance profile 'gac2'"));
}

#[test]
fn undetectable_documents_are_an_error() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "unknown.json", r#"{"something": "else"}"#);

    gac_check(&dir)
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot detect the object type"));
}

#[test]
fn missing_files_are_an_error() {
    let dir = TempDir::new().unwrap();

    gac_check(&dir)
        .arg("does-not-exist.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}
