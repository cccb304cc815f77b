//! Integration tests for the whitespace CLI.
//!
//! These tests invoke the `whitespace` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn whitespace() -> Command {
    Command::cargo_bin("whitespace").unwrap()
}

/// Return the workspace root (parent of whitespace-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a sample program.
fn test_program(name: &str) -> PathBuf {
    workspace_root().join("tests/programs").join(name)
}

/// Translate an `S`/`T`/`L` pattern into whitespace; other characters are
/// dropped.
fn ws(pattern: &str) -> String {
    pattern
        .chars()
        .filter_map(|c| match c {
            'S' => Some(' '),
            'T' => Some('\t'),
            'L' => Some('\n'),
            _ => None,
        })
        .collect()
}

/// Write `source` to a file in `dir` and return its path.
fn write_source(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("prog.ws");
    fs::write(&path, source).unwrap();
    path
}

// push 1, push 1, add, outnum, quit
const ADD_ONE_ONE: &str = "SS STL SS STL TSSS TLST LLL";
// push 0, readnum, push 0, retrieve, outnum, quit
const ECHO_NUMBER: &str = "SS SL TLTT SS SL TTT TLST LLL";
// label 0, jump 0
const SPIN: &str = "LSS L LSL L";

// ---- Usage ----

#[test]
fn no_args_is_a_usage_error() {
    whitespace()
        .assert()
        .failure()
        .code(2)
        .stderr("Usage: whitespace [OPTIONS] <FILE>\n");
}

#[test]
fn two_files_is_a_usage_error() {
    whitespace()
        .args(["a.ws", "b.ws"])
        .assert()
        .failure()
        .code(2)
        .stderr("Usage: whitespace [OPTIONS] <FILE>\n");
}

#[test]
fn bad_option_value_is_reported_by_clap() {
    whitespace()
        .args(["prog.ws", "--max-instructions", "many"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'many'"));
}

#[test]
fn help_flag_exits_0() {
    whitespace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--eof-value"));
}

// ---- Source resolution ----

#[test]
fn missing_file_reports_name() {
    whitespace()
        .arg("no_such_program.ws")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: could not open file: no_such_program.ws",
        ));
}

#[test]
fn file_next_to_executable_is_found() {
    let exe = PathBuf::from(env!("CARGO_BIN_EXE_whitespace"));
    let name = format!("cli_test_beside_exe_{}.ws", std::process::id());
    let beside = exe.parent().unwrap().join(&name);
    fs::write(&beside, ws(ADD_ONE_ONE)).unwrap();

    let cwd = TempDir::new().unwrap();
    let assert = whitespace().current_dir(cwd.path()).arg(&name).assert();
    fs::remove_file(&beside).unwrap();

    assert.success().stdout("2");
}

// ---- Running ----

#[test]
fn run_add() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ADD_ONE_ONE));
    whitespace().arg(&path).assert().success().stdout("2");
}

#[test]
fn run_hello_sample() {
    whitespace()
        .arg(test_program("hello.ws"))
        .assert()
        .success()
        .stdout("Hello, world!\n");
}

#[test]
fn run_count_sample() {
    whitespace()
        .arg(test_program("count.ws"))
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n");
}

#[test]
fn run_sum_sample_reads_stdin() {
    whitespace()
        .arg(test_program("sum.ws"))
        .write_stdin("3\n4\n-2\n0\n")
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn echo_number_from_stdin() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ECHO_NUMBER));
    whitespace()
        .arg(&path)
        .write_stdin("123456789012345678901234567890\n")
        .assert()
        .success()
        .stdout("123456789012345678901234567890");
}

#[test]
fn non_utf8_comments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prog.ws");
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend_from_slice(ws(ADD_ONE_ONE).as_bytes());
    fs::write(&path, bytes).unwrap();
    whitespace().arg(&path).assert().success().stdout("2");
}

// ---- Errors ----

#[test]
fn lex_error_exits_1() {
    let dir = TempDir::new().unwrap();
    // quit, then the undefined `TLL`
    let path = write_source(&dir, "\n\n\n\t\n\n");
    whitespace()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn lex_error_runs_nothing() {
    let dir = TempDir::new().unwrap();
    // push 1, outnum, then an unterminated push
    let path = write_source(&dir, &ws("SS STL TLST SS ST"));
    whitespace()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing its terminating newline"));
}

#[test]
fn runtime_error_exits_3() {
    let dir = TempDir::new().unwrap();
    // push 1, push 0, div
    let path = write_source(&dir, &ws("SS STL SS SL TSTS"));
    whitespace()
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "runtime error: division by zero at instruction 2",
        ));
}

#[test]
fn output_before_runtime_error_is_written() {
    let dir = TempDir::new().unwrap();
    // push 7, outnum, ret
    let path = write_source(&dir, &ws("SS STTTL TLST LTL"));
    whitespace()
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stdout("7")
        .stderr(predicate::str::contains("return with empty call stack"));
}

#[test]
fn running_off_the_end_exits_3() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws("SS STL"));
    whitespace()
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("ran past the end of the program"));
}

// ---- Options ----

#[test]
fn end_of_input_is_an_error_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ECHO_NUMBER));
    whitespace()
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn eof_value_is_stored_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ECHO_NUMBER));
    whitespace()
        .arg(&path)
        .arg("--eof-value=-1")
        .write_stdin("")
        .assert()
        .success()
        .stdout("-1");
}

#[test]
fn eof_value_ends_sum_loop() {
    whitespace()
        .arg(test_program("sum.ws"))
        .args(["--eof-value", "0"])
        .write_stdin("10\n20")
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn max_instructions_stops_loop() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(SPIN));
    whitespace()
        .arg(&path)
        .args(["--max-instructions", "50"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("instruction limit of 50 exceeded"));
}

#[test]
fn list_prints_instructions_without_running() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ECHO_NUMBER));
    whitespace()
        .arg(&path)
        .arg("--list")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(
            "0000 push 0\n0001 readnum\n0002 push 0\n0003 retrieve\n0004 outnum\n0005 quit\n",
        );
}

#[test]
fn stats_are_printed_to_stderr() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(ADD_ONE_ONE));
    whitespace()
        .arg(&path)
        .arg("--stats")
        .assert()
        .success()
        .stdout("2")
        .stderr(predicate::str::contains("Instructions executed: 5"));
}

// ---- Duplicate labels ----

// jump 1, label 1, push 1, outnum, quit, label 1, push 2, outnum, quit
const DUPLICATE_LABELS: &str = "LSL TL LSS TL SS STL TLST LLL LSS TL SS STSL TLST LLL";

#[test]
fn duplicate_labels_use_first_definition() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(DUPLICATE_LABELS));
    whitespace()
        .arg(&path)
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .stdout("1")
        .stderr(predicate::str::contains("label defined more than once"));
}

#[test]
fn strict_labels_rejects_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &ws(DUPLICATE_LABELS));
    whitespace()
        .arg(&path)
        .arg("--strict-labels")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "label 1 defined at instruction 1 and again at instruction 5",
        ));
}

#[test]
fn strict_labels_accepts_unique_labels() {
    whitespace()
        .arg(test_program("count.ws"))
        .arg("--strict-labels")
        .assert()
        .success();
}
