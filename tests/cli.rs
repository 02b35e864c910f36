use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

//A fake pkg-config on PATH so the tests control the query outcome
fn fake_pkg_config(body: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let shim = dir.path().join("pkg-config");
    fs::write(&shim, format!("#!/bin/sh\n{}\n", body)).expect("write pkg-config shim");
    fs::set_permissions(&shim, fs::Permissions::from_mode(0o755)).expect("mark shim executable");
    dir
}

fn cmd(shim: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clangd_gen").unwrap();
    let path = match std::env::var("PATH") {
        Ok(p) => format!("{}:{}", shim.path().display(), p),
        Err(_) => shim.path().display().to_string(),
    };
    cmd.env("PATH", path);
    cmd.env_remove("CLANGD_GEN_LOG_LEVEL");
    cmd
}

#[test]
fn emits_config_block() {
    let shim = fake_pkg_config("echo '-I/usr/include -lchafa -lncursesw'");
    cmd(&shim).assert().success().stdout(
        "CompileFlags:\n  Add: [-I/usr/include, -lchafa, -lncursesw ]\n  Compiler: clang\n",
    );
}

#[test]
fn empty_query_output_renders_empty_list() {
    let shim = fake_pkg_config("exit 0");
    cmd(&shim)
        .assert()
        .success()
        .stdout("CompileFlags:\n  Add: []\n  Compiler: clang\n");
}

#[test]
fn failed_query_prints_single_error_line() {
    let shim = fake_pkg_config("exit 1");
    cmd(&shim)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("pkg-config query failed"))
        .stdout(contains("CompileFlags").not());
}

#[test]
fn query_output_is_not_validated() {
    let shim = fake_pkg_config("echo 'not flags at all'");
    cmd(&shim)
        .assert()
        .success()
        .stdout("CompileFlags:\n  Add: [not flags at all ]\n  Compiler: clang\n");
}

#[test]
fn queries_chafa_and_ncursesw_cflags() {
    let shim = fake_pkg_config("printf '%s\\n' \"$*\" > \"${0%/*}/args\"\necho '-DFOO'");
    cmd(&shim).assert().success();
    let args = fs::read_to_string(shim.path().join("args")).expect("shim recorded its args");
    assert_eq!(args, "--cflags chafa ncursesw\n");
}
