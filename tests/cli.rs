use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join(name)
}

fn keyedlit() -> Command {
    let mut cmd = cargo_bin_cmd!("keyedlit");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn reports_in_rustc_style() {
    keyedlit()
        .arg(sample("01_default_mode"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: unspecified field connect_timeout of Options",
        ))
        .stdout(predicate::str::contains("src/lib.rs:16:5"))
        .stdout(predicate::str::contains("keyedlit: 4 unspecified field(s)"));
}

#[test]
fn clean_crate_says_so() {
    keyedlit()
        .arg(sample("04_clean_crate"))
        .assert()
        .success()
        .stdout(predicate::str::contains("keyedlit: no issues found"));
}

#[test]
fn deny_turns_findings_into_failure() {
    keyedlit()
        .args(["--deny"])
        .arg(sample("01_default_mode"))
        .assert()
        .code(1);

    keyedlit()
        .args(["--deny"])
        .arg(sample("04_clean_crate"))
        .assert()
        .success();
}

#[test]
fn strict_flag_overrides_config() {
    let out = keyedlit()
        .args(["--json", "--strict"])
        .arg(sample("01_default_mode"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).expect("valid json output");
    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 7);
    assert!(diagnostics.iter().any(|d| d["field"] == "timeout_secs"));
}

#[test]
fn json_output_carries_structured_fields() {
    let out = keyedlit()
        .arg("--json")
        .arg(sample("02_strict_mode"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).expect("valid json output");
    let diagnostic = &json["diagnostics"][0];
    assert_eq!(diagnostic["message"], "unspecified field timeout of Opts");
    assert_eq!(diagnostic["field"], "timeout");
    assert_eq!(diagnostic["type_name"], "Opts");
    assert_eq!(diagnostic["line"], 16);
    assert_eq!(diagnostic["column"], 5);
    assert!(json.get("skipped").is_none());
}

#[test]
fn explicit_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("lenient.toml");
    std::fs::write(&config, "name_patterns = [\"deadline\"]\n").unwrap();

    keyedlit()
        .arg("--config")
        .arg(&config)
        .arg(sample("01_default_mode"))
        .assert()
        .success()
        .stdout(predicate::str::contains("keyedlit: no issues found"));
}

#[test]
fn bad_config_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("keyedlit.toml");
    std::fs::write(&config, "strict = \"yes\"\n").unwrap();

    keyedlit()
        .arg("--config")
        .arg(&config)
        .arg(sample("01_default_mode"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn missing_manifest_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    keyedlit()
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no Cargo.toml found"));
}

#[test]
fn skipped_files_are_mentioned_on_stderr() {
    keyedlit()
        .arg(sample("05_syntax_error"))
        .assert()
        .success()
        .stderr(predicate::str::contains("broken.rs"))
        .stdout(predicate::str::contains("unspecified field timeout of Client"));
}
