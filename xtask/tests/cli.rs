use assert_cmd::Command;
use predicates::prelude::*;

fn xtask() -> Command {
    Command::cargo_bin("xtask").unwrap()
}

#[test]
fn test_help_lists_commands() {
    xtask()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("libs"));
}

#[test]
fn test_no_arguments_prints_help() {
    xtask().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_apps_list_shows_web_bundle() {
    xtask()
        .args(["apps", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfarer-web"));
}

#[test]
fn test_libs_list_shows_both_library_folders() {
    xtask()
        .args(["libs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("infra/logger"))
        .stdout(predicate::str::contains("crates/shared/kernel"))
        .stdout(predicate::str::contains("apps/web").not());
}

#[test]
fn test_build_rejects_unknown_flag() {
    xtask().args(["build", "--fast"]).assert().failure();
}
