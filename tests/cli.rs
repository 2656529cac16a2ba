//! End-to-end runs of the `quoteviz` binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// `{:ok, [1]}`: the list holds no nesting, so it stays closed unless expansion is eager
const OK_ONE: &str = r#"{"tuple": [{"atom": "ok"}, [1]]}"#;

const OK_ONE_CLOSED: &str = "{:ok, [1]}\n├── :ok\n└── [1]\n";
const OK_ONE_OPEN: &str = "{:ok, [1]}\n├── :ok\n└── [1]\n    └── 1\n";

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn eager_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[render]\nexpansion = \"eager\"\ncolor = \"never\"").expect("write config");
    file
}

#[test]
fn tree_reads_json_from_stdin() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["tree", "-", "--color", "never"]).write_stdin(OK_ONE);

    cmd.assert().success().stdout(OK_ONE_CLOSED);
}

#[test]
fn tree_reads_yaml_from_stdin() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["tree", "-", "--input", "yaml", "--color", "never"])
        .write_stdin("tuple: [{atom: ok}, [1]]");

    cmd.assert().success().stdout(OK_ONE_CLOSED);
}

#[test]
fn tree_without_color_has_no_escapes() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.arg("tree")
        .arg(fixture_path("def_add.json"))
        .args(["--color", "never"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("├── :def").and(predicate::str::contains("\u{1b}").not()));
}

#[test]
fn tree_with_color_always_paints_leaves() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["tree", "-", "--color", "always"]).write_stdin(OK_ONE);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{:ok, [1]}\n").and(predicate::str::contains("\u{1b}[")));
}

#[test]
fn tree_eager_and_stats_flags() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["tree", "-", "--color", "never", "--eager", "--stats"])
        .write_stdin(OK_ONE);

    cmd.assert().success().stdout(format!(
        "Nodes: 4, Depth: 3, Funcs: 0, Vars: 0, Literals: 2\n{OK_ONE_OPEN}"
    ));
}

#[test]
fn stats_prints_summary_then_tree() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.arg("stats").arg(fixture_path("def_add.json"));

    cmd.assert().success().stdout(
        predicate::str::starts_with("Nodes: 10, Depth: 5, Funcs: 3, Vars: 4, Literals: 1\n")
            .and(predicate::str::contains("\u{1b}").not()),
    );
}

#[test]
fn stats_json_output() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["stats", "-", "--json"]).write_stdin(OK_ONE);

    let output = cmd.assert().success().get_output().stdout.clone();
    let record: serde_json::Value = serde_json::from_slice(&output).expect("stats as JSON");
    assert_eq!(record["total_nodes"], 4);
    assert_eq!(record["max_depth"], 3);
    assert_eq!(record["literals"], 2);
}

#[test]
fn list_formats_names_every_format() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("treeviz-eager")
            .and(predicate::str::contains("treeviz-color"))
            .and(predicate::str::contains("stats-json"))
            .and(predicate::str::contains("inline")),
    );
}

#[test]
fn convert_follows_configured_expansion() {
    let config = eager_config();
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["convert", "-", "--config"])
        .arg(config.path())
        .write_stdin(OK_ONE);

    cmd.assert().success().stdout(OK_ONE_OPEN);
}

#[test]
fn stats_follows_configured_expansion() {
    let config = eager_config();
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["stats", "-", "--config"])
        .arg(config.path())
        .write_stdin(OK_ONE);

    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with(OK_ONE_OPEN));
}

#[test]
fn convert_other_formats_ignore_configured_renderer() {
    let config = eager_config();
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["convert", "-", "--format", "inline", "--config"])
        .arg(config.path())
        .write_stdin(OK_ONE);

    cmd.assert().success().stdout("{:ok, [1]}\n");
}

#[test]
fn missing_config_file_fails_every_command() {
    for args in [
        vec!["tree", "-"],
        vec!["stats", "-"],
        vec!["convert", "-"],
        vec!["list-formats"],
    ] {
        let mut cmd = cargo_bin_cmd!("quoteviz");
        cmd.args(&args)
            .args(["--config", "/nonexistent/quoteviz.toml"])
            .write_stdin(OK_ONE);

        cmd.assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::starts_with("Error: configuration error"));
    }
}

#[test]
fn missing_input_file_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.arg("tree").arg(fixture_path("absent.json"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn unsupported_extension_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.arg("tree").arg(fixture_path("absent.txt"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: unsupported input"));
}

#[test]
fn unknown_format_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("quoteviz");
    cmd.args(["convert", "-", "--format", "nope"]).write_stdin(OK_ONE);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format 'nope' not found"));
}
