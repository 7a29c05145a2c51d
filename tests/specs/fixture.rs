//! Sanity checks for the climock fixture itself.
//!
//! Everything else relies on climock behaving exactly as scripted, so it
//! is checked here with an independent runner.

use assert_cmd::Command;

fn climock() -> Command {
    Command::cargo_bin("climock").unwrap()
}

#[test]
fn writes_stdout_without_newline() {
    climock()
        .args(["--stdout", "This is a test"])
        .assert()
        .success()
        .stdout("This is a test")
        .stderr("");
}

#[test]
fn writes_stderr_and_exits_with_status() {
    climock()
        .args(["--stderr", "This is a test", "--exit", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("This is a test");
}

#[test]
fn no_flags_is_silent_success() {
    climock().assert().success().stdout("").stderr("");
}
