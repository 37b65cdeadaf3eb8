use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_prints_summary_line() {
    let input = csv_file("name,test,result\nA,baseline,10\nA,opt1,5\nB,baseline,20\nB,opt1,10\n");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg(input.path());
    cmd.assert()
        .success()
        .stdout("opt1: mean = 2.0, stddev = 0.0, min = 2.0, max = 2.0\n");
}

#[test]
fn test_cli_warns_on_stdout_and_continues() {
    let input = csv_file(
        "name,test,result\n\
         A,baseline,10\n\
         A,opt1,abc\n\
         A,opt2,5\n\
         B,baseline,12\n\
         B,opt1,4\n\
         B,opt2,3\n",
    );
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg(input.path());
    cmd.assert().success().stdout(
        "Warning: results for A opt1 (abc) will be ignored.\n\
         opt1: mean = 3.0, stddev = 0.0, min = 3.0, max = 3.0\n\
         opt2: mean = 3.0, stddev = 1.0, min = 2.0, max = 4.0\n",
    );
}

#[test]
fn test_cli_empty_sample_fails_after_earlier_lines() {
    let input = csv_file(
        "name,test,result\n\
         A,baseline,10\n\
         A,opt1,5\n\
         A,opt9,missing\n",
    );
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg(input.path());
    let assert = cmd.assert().failure().code(1).stdout(
        "Warning: results for A opt9 (missing) will be ignored.\n\
         opt1: mean = 2.0, stddev = 0.0, min = 2.0, max = 2.0\n",
    );
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("no scores collected for opt9"));
}

#[test]
fn test_cli_missing_baseline_fails() {
    let input = csv_file("name,test,result\nA,opt1,5\n");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg(input.path());
    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_missing_file_fails() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.arg("/nonexistent/benchsummary/results.csv");
    cmd.assert().failure().code(1).stdout("");
}

#[test]
fn test_cli_usage_errors() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.assert().failure().code(2);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchsummary"));
    cmd.args(["--verbose", "results.csv"]);
    cmd.assert().failure().code(2);
}
