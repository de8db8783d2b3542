use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chars_counter"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chars_counter"));
}

#[test]
fn counts_whole_text() {
    bin()
        .args(["--text", "hello", "--chars", "l"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn counts_range_as_json() {
    let output = bin()
        .args(["--text", "hello", "--chars", "l", "--start", "2", "--end", "3", "--format", "json"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["count"], 2);
    assert_eq!(value["mode"], "range");
    assert_eq!(value["start"], 2);
    assert_eq!(value["end"], 3);
}

#[test]
fn limit_stops_early() {
    bin()
        .args(["--text", "aaaa", "--chars", "a", "--start", "0", "--end", "3", "--limit", "2"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn missing_text_exits_with_invalid_argument() {
    bin()
        .args(["--chars", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("text is required"));
}

#[test]
fn negative_start_exits_with_out_of_range() {
    bin()
        .args(["--text", "hello", "--chars", "l", "--start", "-1", "--end", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("start_index = -1"));
}

#[test]
fn end_at_length_exits_with_out_of_range() {
    bin()
        .args(["--text", "hello", "--chars", "l", "--start", "0", "--end", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("end_index = 5"));
}

#[test]
fn rust_log_global_level_is_honoured_without_verbose() {
    bin()
        .env("RUST_LOG", "debug")
        .args(["--text", "hello", "--chars", "l", "--start", "0", "--end", "3"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("executing count"));
}

#[test]
fn verbose_enables_debug_when_rust_log_unset() {
    bin()
        .env_remove("RUST_LOG")
        .args(["--verbose", "--text", "hello", "--chars", "l"])
        .assert()
        .success()
        .stderr(predicate::str::contains("executing count"));
}

#[test]
fn quiet_by_default() {
    bin()
        .env_remove("RUST_LOG")
        .args(["--text", "hello", "--chars", "l"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
