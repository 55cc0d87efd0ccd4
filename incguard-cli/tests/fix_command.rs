//! Integration tests for the `fix` command.

mod common;

use common::{guarded, TestEnv, FIXED_SOCKET, STALE_SOCKET};
use predicates::prelude::*;

#[test]
fn test_fix_rewrites_tree() {
    let env = TestEnv::new();
    env.write("src/net/socket.hpp", STALE_SOCKET);
    env.write_guarded("src/core.hpp", "CORE_H");
    env.write_guarded("src/core/string_util.hpp", "STRING_UTIL");

    let stdout = env.stdout_of(&["fix"]);
    assert_eq!(stdout.lines().count(), 3);

    assert_eq!(env.read("src/net/socket.hpp"), FIXED_SOCKET);
    assert_eq!(
        env.read("src/core.hpp"),
        guarded("FRAMEWORK_CORE_HPP", "struct S {};\n")
    );
    assert_eq!(
        env.read("src/core/string_util.hpp"),
        guarded("FRAMEWORK_CORE_STRING_UTIL_HPP", "struct S {};\n")
    );
}

#[test]
fn test_fix_prints_summary_to_stderr() {
    let env = TestEnv::new();
    env.write("src/net/socket.hpp", STALE_SOCKET);
    env.write("src/pragma.hpp", "#pragma once\n");

    env.command()
        .arg("fix")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "2 header(s): 1 rewritten, 0 canonical, 1 without guard",
        ));
}

#[test]
fn test_fix_quiet_suppresses_summary() {
    let env = TestEnv::new();
    env.write("src/net/socket.hpp", STALE_SOCKET);

    env.command()
        .args(["--quiet", "fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("socket.hpp"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_fix_is_idempotent() {
    let env = TestEnv::new();
    env.write("src/net/socket.hpp", STALE_SOCKET);

    env.stdout_of(&["fix"]);
    env.command()
        .arg("fix")
        .assert()
        .success()
        .stderr(predicate::str::contains("0 rewritten, 1 canonical"));
    assert_eq!(env.read("src/net/socket.hpp"), FIXED_SOCKET);
}

#[test]
fn test_fix_dry_run_leaves_files() {
    let env = TestEnv::new();
    env.write("src/net/socket.hpp", STALE_SOCKET);

    env.command()
        .args(["fix", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("socket.hpp"))
        .stderr(predicate::str::contains("(dry run)"));
    assert_eq!(env.read("src/net/socket.hpp"), STALE_SOCKET);
}

#[test]
fn test_fix_ignores_other_extensions() {
    let env = TestEnv::new();
    env.write("src/impl.cpp", STALE_SOCKET);
    env.write("src/legacy.h", STALE_SOCKET);

    let stdout = env.stdout_of(&["fix"]);
    assert!(stdout.is_empty());
    assert_eq!(env.read("src/impl.cpp"), STALE_SOCKET);
    assert_eq!(env.read("src/legacy.h"), STALE_SOCKET);
}

#[test]
fn test_fix_with_extension_and_prefix() {
    let env = TestEnv::new();
    env.write_guarded("src/io/file.h", "F");

    env.stdout_of(&["--prefix", "engine", "--extension", "h", "fix"]);
    assert_eq!(
        env.read("src/io/file.h"),
        guarded("ENGINE_IO_FILE_H", "struct S {};\n")
    );
}

#[test]
fn test_fix_with_root_flag() {
    let env = TestEnv::without_src();
    env.write_guarded("include/api.hpp", "API");

    env.stdout_of(&["--root", "include", "fix"]);
    assert_eq!(
        env.read("include/api.hpp"),
        guarded("FRAMEWORK_API_HPP", "struct S {};\n")
    );
}

#[test]
fn test_fix_root_from_environment() {
    let env = TestEnv::without_src();
    env.write_guarded("headers/api.hpp", "API");

    env.command()
        .env("INCGUARD_ROOT", "headers")
        .arg("fix")
        .assert()
        .success();
    assert_eq!(
        env.read("headers/api.hpp"),
        guarded("FRAMEWORK_API_HPP", "struct S {};\n")
    );
}

#[test]
fn test_fix_uses_config_file() {
    let env = TestEnv::without_src();
    env.write("incguard.yaml", "root: include\nprefix: acme\n");
    env.write_guarded("include/net/tcp.hpp", "TCP");

    env.stdout_of(&["fix"]);
    assert_eq!(
        env.read("include/net/tcp.hpp"),
        guarded("ACME_NET_TCP_HPP", "struct S {};\n")
    );
}

#[test]
fn test_fix_keep_going_reports_failure() {
    let env = TestEnv::new();
    env.write_guarded("src/a.hpp", "A");
    env.write("src/b.hpp", [0xff_u8, 0xfe]);
    env.write_guarded("src/c.hpp", "C");

    env.command()
        .args(["fix", "--keep-going"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("b.hpp"))
        .stderr(predicate::str::contains("1 header(s) could not be processed"));

    assert_eq!(
        env.read("src/c.hpp"),
        guarded("FRAMEWORK_C_HPP", "struct S {};\n")
    );
}

#[test]
fn test_fix_halts_on_unreadable_header() {
    let env = TestEnv::new();
    env.write_guarded("src/a.hpp", "A");
    env.write("src/b.hpp", [0xff_u8, 0xfe]);
    env.write_guarded("src/c.hpp", "C");

    env.command()
        .arg("fix")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("failed to read"));

    assert_eq!(
        env.read("src/a.hpp"),
        guarded("FRAMEWORK_A_HPP", "struct S {};\n")
    );
    assert_eq!(env.read("src/c.hpp"), guarded("C", "struct S {};\n"));
}
