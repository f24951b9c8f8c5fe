// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_bump(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bump"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute bump")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

/// Asserts a domain failure: exit 1, silent stdout, a single tagged stderr line.
fn assert_domain_error(output: &Output, message: &str) {
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(output), "");
    assert_eq!(stderr(output), format!("[bump] {}\n", message));
}

#[test]
fn test_invalid_bump_part() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bump(dir.path(), &["w"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("invalid value 'w'"));
}

#[test]
fn test_missing_pyproject() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bump(dir.path(), &["1"]);
    assert_domain_error(
        &output,
        "Reading of configuration from another file than pyproject.toml is not supported",
    );
}

#[test]
fn test_unparseable_pyproject_is_not_a_domain_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "[invalid");
    let output = run_bump(dir.path(), &["1"]);
    assert!(!output.status.success());
    assert!(!stderr(&output).starts_with("[bump]"));
    assert!(stderr(&output).contains("pyproject.toml"));
}

#[test]
fn test_missing_tool_bump_nor_poetry_version() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "foo = \"bar\"\n");
    let output = run_bump(dir.path(), &["1"]);
    assert_domain_error(
        &output,
        "`tool.bump` section nor `tool.poetry.version` found in pyproject.toml",
    );
}

#[test]
fn test_default_source_major() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "[tool.poetry]\nversion = \"1.2.3\"\n");
    let output = run_bump(dir.path(), &["1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(
        read(dir.path(), "pyproject.toml"),
        "[tool.poetry]\nversion = \"2.0.0\"\n"
    );
}

#[test]
fn test_other_semver_fields_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let content = "[tool.poetry]\nversion = \"1.2.3\"\nother = \"3.2.1\"\n";
    write(dir.path(), "pyproject.toml", content);
    let output = run_bump(dir.path(), &["2"]);
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "pyproject.toml"),
        content.replace("1.2.3", "1.3.0")
    );
}

#[test]
fn test_tool_bump_without_source_or_targets() {
    let dir = tempfile::tempdir().unwrap();
    let content = "[tool.poetry]\nfoo = \"1.2.3\"\nversion=\"7.8.90\"\n\n[tool.bump]\n\n";
    write(dir.path(), "pyproject.toml", content);
    let output = run_bump(dir.path(), &["minor"]);
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "pyproject.toml"),
        content.replace("7.8.90", "7.9.0")
    );
}

#[test]
fn test_string_source_writes_declared_version() {
    let dir = tempfile::tempdir().unwrap();
    let pyproject = "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\nsource = \"foo.txt\"\n";
    let foo = "foo\nbar\n'1.2.30'\n4.5.6\n";
    write(dir.path(), "pyproject.toml", pyproject);
    write(dir.path(), "foo.txt", foo);

    let output = run_bump(dir.path(), &["3"]);
    assert!(output.status.success());
    assert_eq!(
        read(dir.path(), "pyproject.toml"),
        pyproject.replace("7.8.90", "1.2.31")
    );
    assert_eq!(read(dir.path(), "foo.txt"), foo);
}

#[test]
fn test_invalid_source_type() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "[tool.bump]\nsource = 5\n");
    let output = run_bump(dir.path(), &["1"]);
    assert_domain_error(
        &output,
        "Invalid type int for `tool.bump.source` config field, expected string or object",
    );
}

#[test]
fn test_object_source_regex_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let content = concat!(
        "[tool.poetry]\nversion=\"7.8.4\"\n\n",
        "[tool.bump]\n",
        "source = {regex = \"foo=(\\\\d+\\\\.\\\\d+\\\\.\\\\d+)\"}\n",
    );
    write(dir.path(), "pyproject.toml", content);
    let output = run_bump(dir.path(), &["2"]);
    assert_domain_error(
        &output,
        r"Version not found using regex 'foo=(\d+\.\d+\.\d+)' to search in file pyproject.toml",
    );
    assert_eq!(read(dir.path(), "pyproject.toml"), content);
}

#[test]
fn test_invalid_semver_in_source() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pyproject.toml",
        "[tool.poetry]\nversion = \"1.2\"\n\n[tool.bump]\nsource = {regex = \"\\\\d+\\\\.\\\\d+\"}",
    );
    let output = run_bump(dir.path(), &["1"]);
    assert_domain_error(&output, "The version '1.2' does not follow semantic versioning!");
}

#[test]
fn test_invalid_target_type() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pyproject.toml",
        "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\ntargets = [\"foo.txt\", 1]\n",
    );
    let output = run_bump(dir.path(), &["3"]);
    assert_domain_error(
        &output,
        "Invalid type int for `tool.bump.targets[1]` config field, expected string or object",
    );
}

#[test]
fn test_target_object_must_contain_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pyproject.toml",
        "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\ntargets = [\"foo.txt\", {regex = \"foo\"}]\n",
    );
    let output = run_bump(dir.path(), &["3"]);
    assert_domain_error(&output, "tool.bump.targets[1] must contain a `file` field");
}

#[test]
fn test_string_target_rewrites_every_match() {
    let dir = tempfile::tempdir().unwrap();
    let pyproject = "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\ntargets = [\"foo.txt\"]\n";
    write(dir.path(), "pyproject.toml", pyproject);
    write(dir.path(), "foo.txt", "foo\nbar\n'1.2.30'\n4.5.6\n");

    let output = run_bump(dir.path(), &["3"]);
    assert!(output.status.success());
    assert_eq!(read(dir.path(), "pyproject.toml"), pyproject);
    assert_eq!(read(dir.path(), "foo.txt"), "foo\nbar\n'7.8.91'\n7.8.91\n");
}

#[test]
fn test_two_group_target_regex() {
    for regex in [r"(')(\\d+\\.\\d+\\.\\d+)", r"(\\d+\\.\\d+\\.\\d+)(')"] {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "[tool.poetry]\nversion='7.8.90'\n\n[tool.bump]\ntargets = [{{file = \"pyproject.toml\", regex = \"{}\"}}]\n",
            regex
        );
        write(dir.path(), "pyproject.toml", &content);

        let output = run_bump(dir.path(), &["3"]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(
            read(dir.path(), "pyproject.toml"),
            content.replace("7.8.90", "7.8.91")
        );
    }
}

#[test]
fn test_target_regex_too_many_groups() {
    let dir = tempfile::tempdir().unwrap();
    let content = concat!(
        "[tool.poetry]\nversion='7.8.90'\n\n",
        "[tool.bump]\ntargets = [{file = \"pyproject.toml\", ",
        "regex = \"([^'])(')(\\\\d+\\\\.\\\\d+\\\\.\\\\d+)(')\"}]\n",
    );
    write(dir.path(), "pyproject.toml", content);

    let output = run_bump(dir.path(), &["3"]);
    assert_domain_error(
        &output,
        r"Too much groups found using regex '([^'])(')(\d+\.\d+\.\d+)(')' to search in file pyproject.toml",
    );
    assert_eq!(read(dir.path(), "pyproject.toml"), content);
}

#[test]
fn test_missing_source_file_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pyproject.toml",
        "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\nsource = \"foobarbaz.txt\"\n",
    );
    let output = run_bump(dir.path(), &["3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).starts_with("[bump]"));
    assert!(stderr(&output).contains("foobarbaz.txt"));
}

#[test]
fn test_missing_target_file_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let pyproject = "[tool.poetry]\nversion=\"7.8.90\"\n\n[tool.bump]\ntargets = [\"foobarbaz.txt\"]\n";
    write(dir.path(), "pyproject.toml", pyproject);
    let output = run_bump(dir.path(), &["3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).starts_with("[bump]"));
    assert!(stderr(&output).contains("foobarbaz.txt"));
    assert_eq!(read(dir.path(), "pyproject.toml"), pyproject);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let content = "[tool.poetry]\nversion = \"1.2.3\"\n";
    write(dir.path(), "pyproject.toml", content);

    let output = run_bump(dir.path(), &["patch", "--dry-run"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would write pyproject.toml: 1.2.3 -> 1.2.4"));
    assert_eq!(read(dir.path(), "pyproject.toml"), content);
}

#[test]
fn test_path_option() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir(&project).unwrap();
    write(&project, "pyproject.toml", "[tool.poetry]\nversion = \"0.1.0\"\n");

    let output = run_bump(dir.path(), &["2", "--path", "project"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        read(&project, "pyproject.toml"),
        "[tool.poetry]\nversion = \"0.2.0\"\n"
    );
}

#[test]
fn test_unsupported_config_option() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "[tool.poetry]\nversion = \"0.1.0\"\n");
    let output = run_bump(dir.path(), &["2", "--config", "setup.cfg"]);
    assert_domain_error(
        &output,
        "Reading of configuration from another file than pyproject.toml is not supported",
    );
}

#[test]
fn test_non_table_poetry_is_a_domain_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pyproject.toml", "[tool]\npoetry = 5\n");
    let output = run_bump(dir.path(), &["1"]);
    assert_domain_error(
        &output,
        "`tool.bump` section nor `tool.poetry.version` found in pyproject.toml",
    );
}
