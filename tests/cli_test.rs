#![cfg(feature = "std")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use minesweeper::{format_record, level_from, WIN_MESSAGE};

fn run_bin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minesweeper"))
        .args(args)
        .env_remove("MINESWEEPER_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("binary did not finish")
}

#[test]
fn test_zero_mine_game_is_won_in_one_move() {
    let output = run_bin(&["--size", "3", "--mines", "0", "--seed", "1"], "2 2 free\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Using fixed seed: 1"));
    assert!(stdout.contains("1|///|"));
    assert!(stdout.contains(WIN_MESSAGE));
}

#[test]
fn test_mine_count_is_prompted_when_omitted() {
    let output = run_bin(&["--size", "2", "--seed", "7"], "0\n1 1 free\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("How many mines do you want on the field? > "));
    assert!(stdout.contains(WIN_MESSAGE));
}

#[test]
fn test_zero_size_is_rejected() {
    let output = run_bin(&["--size", "0", "--mines", "1"], "");
    assert!(!output.status.success());
}

#[test]
fn test_oversized_size_is_rejected_without_panic() {
    let output = run_bin(&["--size", "4294967296", "--mines", "1"], "");
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(101));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_unseeded_game_starts_safely() {
    let output = run_bin(&["--size", "4", "--mines", "15"], "1 1 free\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Using fixed seed"));
    // 15 mines leave only the first cell safe, so one move wins
    assert!(stdout.contains(WIN_MESSAGE));
}

#[test]
fn test_log_line_format() {
    let line = format_record(
        &log::Record::builder()
            .level(log::Level::Debug)
            .target("minesweeper::field")
            .args(format_args!("laid {} mines", 3))
            .build(),
    );
    assert_eq!(line, "[DEBUG field] laid 3 mines");
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(Some("debug")), log::LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), log::LevelFilter::Trace);
    assert_eq!(level_from(Some("loud")), log::LevelFilter::Warn);
    assert_eq!(level_from(None), log::LevelFilter::Warn);
}
