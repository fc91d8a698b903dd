//! Integration tests for the `tinct` binary entry point.
//!
//! Verifies highlighting from stdin and files, and user-facing error handling.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn highlights_stdin() {
    let mut command = cargo_bin_cmd!("tinct");
    command
        .args(["highlight", "--language", "rust"])
        .write_stdin("fn main() {}\n");
    command
        .assert()
        .success()
        .stdout(contains("0\tkeyword\t\"fn\"\n"))
        .stdout(contains("3\tfunction-name\t\"main\"\n"));
}

#[test]
fn highlights_file_as_json() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".rs").tempfile()?;
    file.write_all(b"let x = 1;")?;

    let mut command = cargo_bin_cmd!("tinct");
    command.arg("highlight").arg(file.path()).args(["--format", "json"]);
    command
        .assert()
        .success()
        .stdout(contains(r#"{"offset":0,"class":"keyword","text":"let"}"#));
    Ok(())
}

#[test]
fn escape_from_environment_is_applied() {
    let mut command = cargo_bin_cmd!("tinct");
    command
        .env("TINCT_ESCAPE", "@@")
        .args(["highlight", "--language", "python"])
        .write_stdin("x = a @ b @ c\n");
    command
        .assert()
        .success()
        .stdout(contains("\tplain\t\" @ b @ \"\n"));
}

#[test]
fn undetected_language_exits_with_failure() {
    let mut command = cargo_bin_cmd!("tinct");
    command.arg("highlight").write_stdin("let x = 1;");
    command
        .assert()
        .failure()
        .stderr(contains("pass --language"));
}
