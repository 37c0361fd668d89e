use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn ftm_senzing() -> Command {
    let mut cmd = cargo_bin_cmd!("ftm-senzing");
    cmd.env_remove("FTM_SENZING_PERSON_SOURCE");
    cmd.env_remove("FTM_SENZING_ORG_SOURCE");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_jsonl(path: &Path, records: &[Value]) {
    let lines: Vec<String> = records.iter().map(Value::to_string).collect();
    fs::write(path, lines.join("\n")).unwrap();
}

fn read_output(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn sample_input(dir: &Path) -> PathBuf {
    let path = dir.join("input.jsonl");
    write_jsonl(
        &path,
        &[
            json!({"id": "c1", "schema": "Company", "properties": {"name": ["Acme"]}}),
            json!({"id": "p1", "schema": "Person", "properties": {
                "firstName": ["John"], "lastName": ["Smith"], "email": ["J@X.COM"]
            }}),
            json!({"id": "o1", "schema": "Ownership", "properties": {"owner": ["p1"], "asset": ["c1"]}}),
        ],
    );
    path
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    ftm_senzing()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ftm-senzing"));
}

#[test]
fn missing_arguments_is_usage_error() {
    ftm_senzing().assert().failure().code(2);
}

#[test]
fn invalid_sample_is_usage_error() {
    ftm_senzing()
        .args(["in.jsonl", "out.jsonl", "--sample", "many"])
        .assert()
        .failure()
        .code(2);
}

// --- Conversion ---

#[test]
fn converts_file() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());
    let output = tmp.path().join("out.jsonl");

    ftm_senzing()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 3 FTM records"))
        .stderr(predicate::str::contains("Wrote 2 records"));

    let records = read_output(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        json!({
            "DATA_SOURCE": "SANCTIONS",
            "RECORD_ID": "p1",
            "FEATURES": [
                {"RECORD_TYPE": "PERSON"},
                {"NAME_FIRST": "John", "NAME_LAST": "Smith"},
                {"EMAIL_ADDRESS": "j@x.com"},
                {"REL_POINTER_DOMAIN": "CORP_FILINGS", "REL_POINTER_KEY": "c1", "REL_POINTER_ROLE": "OWNER_OF"},
                {"REL_ANCHOR_DOMAIN": "SANCTIONS", "REL_ANCHOR_KEY": "p1"},
            ]
        })
    );
    assert_eq!(records[1]["RECORD_ID"], "c1");
    assert_eq!(records[1]["DATA_SOURCE"], "CORP_FILINGS");
}

#[test]
fn output_is_byte_identical_across_runs() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());
    let first = tmp.path().join("first.jsonl");
    let second = tmp.path().join("second.jsonl");

    ftm_senzing().arg(&input).arg(&first).assert().success();
    ftm_senzing().arg(&input).arg(&second).assert().success();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn converts_directory_and_skips_malformed_lines() {
    let tmp = TempDir::new().unwrap();
    let input_dir = tmp.path().join("ftm");
    fs::create_dir(&input_dir).unwrap();
    write_jsonl(
        &input_dir.join("a.jsonl"),
        &[json!({"id": "p1", "schema": "Person", "properties": {"name": ["A"]}})],
    );
    fs::write(
        input_dir.join("b.jsonl"),
        "{broken\n{\"id\": \"c1\", \"schema\": \"Company\"}\n",
    )
    .unwrap();
    fs::write(input_dir.join("notes.txt"), "ignored").unwrap();
    let output = tmp.path().join("out.jsonl");

    ftm_senzing()
        .arg(&input_dir)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped 1 malformed lines"));

    let ids: Vec<Value> = read_output(&output)
        .into_iter()
        .map(|r| r["RECORD_ID"].clone())
        .collect();
    assert_eq!(ids, vec![json!("p1"), json!("c1")]);
}

#[test]
fn sample_limits_entities() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input.jsonl");
    write_jsonl(
        &input,
        &[
            json!({"id": "p1", "schema": "Person"}),
            json!({"id": "p2", "schema": "Person"}),
            json!({"id": "p3", "schema": "Person"}),
        ],
    );
    let output = tmp.path().join("out.jsonl");

    ftm_senzing()
        .arg(&input)
        .arg(&output)
        .args(["--sample", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sample limit: 2"));

    assert_eq!(read_output(&output).len(), 2);
}

#[test]
fn data_source_overrides() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());
    let output = tmp.path().join("out.jsonl");

    ftm_senzing()
        .env("FTM_SENZING_ORG_SOURCE", "REGISTRY")
        .arg(&input)
        .arg(&output)
        .args(["--person-source", "WATCHLIST"])
        .assert()
        .success();

    let records = read_output(&output);
    assert_eq!(records[0]["DATA_SOURCE"], "WATCHLIST");
    assert_eq!(records[0]["FEATURES"][3]["REL_POINTER_DOMAIN"], "REGISTRY");
    assert_eq!(records[1]["DATA_SOURCE"], "REGISTRY");
}

#[test]
fn config_file() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());
    let output = tmp.path().join("out.jsonl");
    let config = tmp.path().join("mapper.json");
    fs::write(&config, r#"{"person_data_source": "PEP"}"#).unwrap();

    ftm_senzing()
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(read_output(&output)[0]["DATA_SOURCE"], "PEP");
}

// --- Failures ---

#[test]
fn missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    ftm_senzing()
        .arg(tmp.path().join("absent.jsonl"))
        .arg(tmp.path().join("out.jsonl"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input path not found"));
}

#[test]
fn unwritable_output_fails() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());

    ftm_senzing()
        .arg(&input)
        .arg(tmp.path().join("missing").join("out.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output"));
}

#[test]
fn empty_data_source_rejected() {
    let tmp = TempDir::new().unwrap();
    let input = sample_input(tmp.path());

    ftm_senzing()
        .arg(&input)
        .arg(tmp.path().join("out.jsonl"))
        .args(["--org-source", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
