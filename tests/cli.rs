use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("cxmon").unwrap()
}

#[test]
fn missing_subcommand_is_an_error() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subcommand"));
}

#[test]
fn read_requires_a_host() {
    cmd().arg("read").assert().failure();
}

#[test]
fn write_rejects_unknown_target() {
    cmd()
        .args(["write", "--host", "192.0.2.1", "frobnicate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("write target"));
}

#[test]
fn scan_requires_a_start_address() {
    cmd()
        .args(["scan", "--host", "192.0.2.1"])
        .assert()
        .failure();
}
