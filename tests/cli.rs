#![cfg(feature = "cli")]

use assert_cmd::Command;

fn sheet() -> Command {
    let mut command = Command::cargo_bin("sheet").expect("sheet binary is built");
    command.env_remove("SHEET_LOG");
    command
}

#[test]
fn cli_edits_stdin_to_stdout() {
    sheet()
        .args(["-d", ",", "cset", "2", "X"])
        .write_stdin("1,2,3\n4,5,6\n")
        .assert()
        .success()
        .stdout("1,X,3\n4,X,6\n");
}

#[test]
fn cli_uses_space_without_delimiter_flag() {
    sheet()
        .args(["swap", "1", "3"])
        .write_stdin("x y z\n")
        .assert()
        .success()
        .stdout("z y x\n");
}

#[test]
fn cli_normalizes_delimiters() {
    sheet()
        .args(["-d", ":|", "acol"])
        .write_stdin("a|b:c\n")
        .assert()
        .success()
        .stdout("a:b:c:\n");
}

#[test]
fn cli_reports_errors_on_stderr() {
    let assert = sheet()
        .args(["-d", ",", "rows", "1", "2", "drow", "1"])
        .write_stdin("a,b\n")
        .assert()
        .code(1)
        .stdout("");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.starts_with("sheet: "), "stderr was {stderr:?}");
}

#[test]
fn cli_keeps_rows_written_before_an_error() {
    sheet()
        .args(["-d", ","])
        .write_stdin("a,b\nc,d\ne\n")
        .assert()
        .code(1)
        .stdout("a,b\nc,d\n");
}

#[test]
fn cli_rejects_empty_input() {
    sheet()
        .args(["-d", ",", "arow"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn cli_rejects_unknown_function() {
    sheet()
        .args(["-d", ",", "frobnicate"])
        .write_stdin("a,b\n")
        .assert()
        .code(1);
}

#[test]
fn cli_requires_delimiter_value() {
    sheet().args(["-d"]).write_stdin("a\n").assert().code(1);
}

#[test]
fn cli_prints_help_and_version() {
    let assert = sheet().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("USAGE"));

    let assert = sheet().arg("-v").assert().success();
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        format!("sheet, {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn cli_logs_to_stderr_when_enabled() {
    let assert = sheet()
        .env("SHEET_LOG", "debug")
        .args(["-d", ",", "cset", "1", "X"])
        .write_stdin("a,b\n")
        .assert()
        .success()
        .stdout("X,b\n");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Compiled 1 function(s)"), "stderr was {stderr:?}");
}

#[test]
fn cli_is_silent_without_log_filter() {
    sheet()
        .args(["-d", ",", "cset", "1", "X"])
        .write_stdin("a,b\n")
        .assert()
        .success()
        .stdout("X,b\n")
        .stderr("");
}
