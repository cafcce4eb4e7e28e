use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BUNDLE: &str = r#"{
  "files": [
    {
      "path": "src/parser.rs",
      "metrics": {"complexity": 80, "lines_of_code": 300, "duplication_ratio": 0.0, "function_count": 12}
    },
    {
      "path": "src/registry.rs",
      "metrics": {"complexity": 14, "lines_of_code": 180, "duplication_ratio": 0.08},
      "issues": [{"severity": "medium"}],
      "dependencies": {"incoming": 30, "outgoing": 4, "in_cycle": true}
    },
    {
      "path": "src/util.rs",
      "metrics": {"complexity": 2, "lines_of_code": 40, "duplication_ratio": 0.0}
    }
  ]
}"#;

fn write_bundle(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("metrics.json");
    fs::write(&path, content).expect("bundle should write");
    path
}

fn codehealth() -> Command {
    Command::cargo_bin("codehealth").expect("binary should compile")
}

#[test]
fn score_json_outputs_project_and_ranking() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"overall_score\""))
        .stdout(predicate::str::contains("\"health_score\": 11.0"))
        .stdout(predicate::str::contains("\"duplication_mode\": \"strict\""))
        .stdout(predicate::str::contains("\"path\": \"src/registry.rs\""));
}

#[test]
fn score_markdown_puts_most_central_file_first() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Code Health Report"))
        .stdout(predicate::str::contains("| 1 | src/registry.rs |"));
}

#[test]
fn score_mode_flag_overrides_config() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);
    fs::write(
        repo.path().join("codehealth.toml"),
        "[scoring]\nduplication_mode = \"strict\"\n",
    )
    .expect("config should write");

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .arg("--mode")
        .arg("legacy")
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"duplication_mode\": \"legacy\""));
}

#[test]
fn score_rejects_weights_not_summing_to_one() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);
    fs::write(
        repo.path().join("codehealth.toml"),
        r#"
[aggregation.weights]
complexity = 0.50
maintainability = 0.30
duplication = 0.25
"#,
    )
    .expect("config should write");

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn score_rejects_out_of_range_ratio() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(
        repo.path(),
        r#"{"files": [{"path": "a.rs", "metrics": {"complexity": 1, "lines_of_code": 5, "duplication_ratio": 1.4}}]}"#,
    );

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplication_ratio must be within [0, 1]"));
}

#[test]
fn score_missing_input_is_runtime_failure() {
    let repo = TempDir::new().expect("temp dir should be created");

    codehealth()
        .arg("score")
        .arg(repo.path().join("absent.json"))
        .arg("--config-dir")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_fail_under_outside_score_range() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);

    for threshold in ["150", "NaN"] {
        codehealth()
            .arg("score")
            .arg(&bundle)
            .arg("--config-dir")
            .arg(repo.path())
            .arg("--fail-under")
            .arg(threshold)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("between 0 and 100"));
    }
}

#[test]
fn score_fail_under_exits_with_threshold_code() {
    let repo = TempDir::new().expect("temp dir should be created");
    let bundle = write_bundle(repo.path(), BUNDLE);

    codehealth()
        .arg("score")
        .arg(&bundle)
        .arg("--config-dir")
        .arg(repo.path())
        .arg("--fail-under")
        .arg("99.5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("below --fail-under"));
}

#[test]
fn check_config_accepts_valid_config() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("codehealth.toml"),
        r#"
[scoring]
duplication_mode = "legacy"

[aggregation]
scheme = "v1"
"#,
    )
    .expect("config should write");

    codehealth()
        .arg("check-config")
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("duplication mode legacy"))
        .stdout(predicate::str::contains("weighting v1 (0.40/0.30/0.30)"));
}

#[test]
fn check_config_warns_when_config_missing() {
    let repo = TempDir::new().expect("temp dir should be created");

    let home = TempDir::new().expect("home dir should be created");

    let assert = codehealth()
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("check-config")
        .arg(repo.path())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("no codehealth.toml found"))
        .stdout(predicate::str::contains("weighting v2"));
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("no codehealth.toml found").count(), 1);
}

#[test]
fn global_config_applies_without_repository_file() {
    let repo = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    let global_dir = home.path().join(".config/codehealth");
    fs::create_dir_all(&global_dir).expect("global dir should create");
    fs::write(
        global_dir.join("config.toml"),
        "[scoring]\nduplication_mode = \"legacy\"\n",
    )
    .expect("global config should write");

    codehealth()
        .env("HOME", home.path())
        .arg("check-config")
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("duplication mode legacy"))
        .stdout(predicate::str::contains("layer global"))
        .stderr(predicate::str::contains("no codehealth.toml found").not());
}

#[test]
fn check_config_rejects_misspelled_key() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("codehealth.toml"),
        "[scoring]\nduplication_mod = \"legacy\"\n",
    )
    .expect("config should write");

    codehealth()
        .arg("check-config")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplication_mod"));
}

#[test]
fn check_config_rejects_unknown_duplication_mode() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("codehealth.toml"),
        "[scoring]\nduplication_mode = \"lenient\"\n",
    )
    .expect("config should write");

    codehealth()
        .arg("check-config")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown duplication mode: lenient"));
}
