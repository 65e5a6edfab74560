use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn feed(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("IP_Reputation_test.json");
    let data = json!([
        {"ip_geo": "es", "ip_whois": {"country": "US"}},
        {"ip_geo": "us", "ip_whois": {"country": "ES"}},
        {"ip_geo": "fr", "ip_whois": {"country": "FR"}}
    ]);
    fs::write(&path, data.to_string()).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("ipcf").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--filter-mode"));
}

#[test]
fn advanced_filters_and_reports_counts() {
    let dir = tempdir().unwrap();
    let input = feed(dir.path());
    let output = dir.path().join("out/geo.json");

    let mut cmd = Command::cargo_bin("ipcf").unwrap();
    cmd.args(["--country", "es", "--filter-mode", "geo"])
        .arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*** DISCLAIMER ***"))
        .stdout(predicate::str::contains("Total records processed: 3"))
        .stdout(predicate::str::contains("Records matching criteria: 1"));

    let out: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(out, vec![json!({"ip_geo": "es", "ip_whois": {"country": "US"}})]);
}

#[test]
fn advanced_rejects_unknown_country() {
    let dir = tempdir().unwrap();
    let input = feed(dir.path());

    let mut cmd = Command::cargo_bin("ipcf").unwrap();
    cmd.args(["--country", "XX"]).arg("--input-file").arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid country code 'XX'"));
}

#[test]
fn advanced_speaks_spanish() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let mut cmd = Command::cargo_bin("ipcf").unwrap();
    cmd.args(["--country", "ES", "--lang", "es"])
        .arg("--input-file")
        .arg(&missing);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("*** AVISO ***"))
        .stderr(predicate::str::contains("archivo de entrada no encontrado"));
}

#[test]
fn basic_reports_country_name() {
    let dir = tempdir().unwrap();
    let input = feed(dir.path());
    let output = dir.path().join("basic.json");

    let mut cmd = Command::cargo_bin("ipcf-basic").unwrap();
    cmd.arg("--input-file")
        .arg(&input)
        .arg("--output-file")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ignored records: 2"))
        .stdout(predicate::str::contains("1 records found with country = 'ES' (Spain)."));
    assert!(output.exists());
}

#[test]
fn disclaimer_comes_before_usage_errors() {
    let mut cmd = Command::cargo_bin("ipcf").unwrap();
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("*** DISCLAIMER ***"))
        .stderr(predicate::str::contains("--country"));

    let mut cmd = Command::cargo_bin("ipcf-basic").unwrap();
    cmd.arg("--no-such-flag");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("*** DISCLAIMER ***"));
}
