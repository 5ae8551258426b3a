//! Exit-code tests for the `rps` binary, driven through a piped stdin.

use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

fn rps(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rps"))
        .args(["--seed", "1", "--no-color"])
        .env_remove("RUST_LOG")
        .env_remove("RPS_SEED")
        .env_remove("RPS_ON_INVALID")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut pipe = child.stdin.take().unwrap();
    // The binary may stop reading before all of the input is written.
    match pipe.write_all(stdin.as_bytes()) {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => panic!("writing stdin: {e}"),
        _ => {}
    }
    drop(pipe);

    child.wait_with_output().unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_full_game_exits_zero() {
    let out = rps("rock\npaper\nscissors\nrock\npaper\n");

    assert_eq!(out.status.code(), Some(0), "stderr: {}", text(&out.stderr));
    let stdout = text(&out.stdout);
    assert_eq!(stdout.matches("Computer chose").count(), 5);
    assert!(stdout.contains("Final Score:\n"));
}

#[test]
fn test_quit_exits_zero_with_partial_score() {
    let out = rps("rock\nq\n");

    assert_eq!(out.status.code(), Some(0), "stderr: {}", text(&out.stderr));
    let stdout = text(&out.stdout);
    assert!(stdout.contains("Game stopped after 1 of 5 rounds."));
    assert!(!stdout.contains("Final Score:"));
}

#[test]
fn test_endless_invalid_input_exits_one() {
    let out = rps(&"nope\n".repeat(20));

    assert_eq!(out.status.code(), Some(1));
    assert!(text(&out.stderr).contains("game aborted"));
    assert!(!text(&out.stdout).contains("Final Score:"));
}

#[test]
fn test_rejected_input_is_not_logged_by_default() {
    let out = rps("nope\nrock\npaper\nscissors\nrock\npaper\n");

    assert_eq!(out.status.code(), Some(0));
    assert!(text(&out.stdout).contains("You typed \"nope\", which is not a move."));
    assert!(
        !text(&out.stderr).contains("rejected input"),
        "stderr: {}",
        text(&out.stderr)
    );
}
