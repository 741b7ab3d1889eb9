#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn selpg_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("selpg"));
    cmd.env_remove("SELPG_PRINT_COMMAND");
    cmd
}

fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("{}\n", n)).collect()
}

#[test]
fn emits_first_two_pages_from_stdin() {
    selpg_cmd()
        .args(["-s", "1", "-e", "2", "-l", "72"])
        .write_stdin(numbered_lines(150))
        .assert()
        .success()
        .stdout(numbered_lines(144))
        .stderr(predicate::str::is_empty());
}

#[test]
fn warns_when_fewer_pages_than_requested() {
    selpg_cmd()
        .args(["-s", "1", "-e", "5", "-l", "72"])
        .write_stdin(numbered_lines(10))
        .assert()
        .code(0)
        .stdout(numbered_lines(10))
        .stderr(predicate::str::contains(
            "end_page (5) greater than total pages (1)",
        ));
}

#[test]
fn single_missing_page_emits_nothing_but_the_warning() {
    selpg_cmd()
        .args(["-s", "3", "-e", "3", "-l", "2"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("less output than expected"));
}

#[test]
fn selects_form_feed_page() {
    selpg_cmd()
        .args(["-f", "-s", "2", "-e", "2"])
        .write_stdin("A\x0cB\x0cC")
        .assert()
        .success()
        .stdout("B");
}

#[test]
fn reads_named_input_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("pages.txt");
    fs::write(&input, "one\ntwo\nthree\nfour\n").unwrap();

    selpg_cmd()
        .args(["-s2", "-e2", "-l2"])
        .arg(&input)
        .assert()
        .success()
        .stdout("three\nfour\n");
}

#[test]
fn missing_input_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("absent.txt");

    selpg_cmd()
        .args(["-s1", "-e1"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Warning: input file"))
        .stderr(predicate::str::contains("does not exist!"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn rejects_invalid_arguments() {
    let cases: &[&[&str]] = &[
        &["-s", "3", "-e", "2"],
        &["-s", "0", "-e", "2"],
        &["-s", "-1", "-e", "2"],
        &["-s", "1", "-e", "2", "-f", "-l", "10"],
        &["-s", "1", "-e", "2", "-l", "0"],
        &["-s", "1", "-e", "2", "a.txt", "b.txt"],
        &["-e", "2"],
        &["-s", "1"],
    ];

    for args in cases {
        selpg_cmd()
            .args(*args)
            .write_stdin("a\nb\n")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage:"));
    }
}

#[test]
fn parser_errors_exit_with_one() {
    selpg_cmd()
        .args(["-s", "one", "-e", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_flag_exits_with_one_and_usage() {
    selpg_cmd()
        .args(["-s", "1", "-e", "1", "--no-such-flag"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_exits_cleanly() {
    selpg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--form-feed"));
}

#[cfg(unix)]
#[test]
fn copies_selected_pages_to_print_command() {
    let temp = TempDir::new().unwrap();
    let printed = temp.path().join("printed.txt");

    selpg_cmd()
        .args(["-s", "2", "-e", "3", "-l", "1", "--print-command", "tee {dest}", "-d"])
        .arg(&printed)
        .write_stdin("a\nb\nc\nd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("b\nc\n"));

    assert_eq!(fs::read_to_string(&printed).unwrap(), "b\nc\n");
}

#[cfg(unix)]
#[test]
fn print_command_comes_from_environment() {
    let temp = TempDir::new().unwrap();
    let printed = temp.path().join("printed.txt");

    selpg_cmd()
        .env("SELPG_PRINT_COMMAND", "tee {dest}")
        .args(["-f", "-s", "1", "-e", "1", "-d"])
        .arg(&printed)
        .write_stdin("first\x0csecond")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&printed).unwrap(), "first");
}

#[cfg(unix)]
#[test]
fn failing_print_command_keeps_exit_status_zero() {
    selpg_cmd()
        .args([
            "-s",
            "1",
            "-e",
            "1",
            "-d",
            "never-present",
            "--print-command",
            "grep -q {dest}",
        ])
        .write_stdin("a\nb\n")
        .assert()
        .code(0)
        .stdout("a\nb\n");
}

#[test]
fn unknown_print_command_is_fatal() {
    selpg_cmd()
        .args([
            "-s",
            "1",
            "-e",
            "1",
            "-d",
            "office",
            "--print-command",
            "selpg-no-such-printer-binary",
        ])
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not start print command"))
        .stderr(predicate::str::contains("Usage:").not());
}

#[test]
fn full_range_round_trips_input() {
    let input = numbered_lines(300);
    selpg_cmd()
        .args(["-s", "1", "-e", "5", "-l", "60"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input)
        .stderr(predicate::str::is_empty());
}
