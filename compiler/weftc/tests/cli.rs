//! The `weft` binary: exit codes and output formats.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn weft(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_weft"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("WEFT_MAX_DEPTH")
        .env_remove("WEFT_MAX_CHAIN")
        .env_remove("WEFT_STRICT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start weft");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_and_version() {
    let out = weft(&["help"], "");
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Usage: weft"));

    let out = weft(&["version"], "");
    assert!(stdout(&out).starts_with("weft "));
}

#[test]
fn run_from_stdin() {
    let out = weft(&["run", "-"], "text(\"Hello World\").bold");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "span class=\"font-bold\" \"Hello World\"\n");
}

#[test]
fn run_json() {
    let out = weft(&["run", "-", "--json"], "vstack(spacing: 2) { text(\"A\") }");
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["tag"], "div");
    assert_eq!(json["attributes"]["class"], "flex flex-col space-y-2");
    assert_eq!(json["children"][0]["text"], "A");
}

#[test]
fn security_rejection_exits_2() {
    let out = weft(&["run", "-", "--color=never"], "text(\"a\")\nsystem(\"ls\")");
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("-:2:1: error[E2001]"), "{stderr}");
}

#[test]
fn other_errors_exit_1() {
    let out = weft(&["run", "-", "--color=never"], "heading(\"x\", level: 0)");
    assert_eq!(out.status.code(), Some(1));

    let out = weft(&["run", "missing-file.weft"], "");
    assert_eq!(out.status.code(), Some(1));

    let out = weft(&["run", "-", "--bogus"], "");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn flags_tighten_limits() {
    let source = "vstack { vstack { text(\"x\") } }";
    assert_eq!(weft(&["run", "-"], source).status.code(), Some(0));
    assert_eq!(
        weft(&["run", "-", "--max-depth=2", "--color=never"], source)
            .status
            .code(),
        Some(1)
    );
}

#[test]
fn deny_command() {
    let out = weft(&["deny", "instance_eval"], "");
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("[E2001]"));

    let out = weft(&["deny", "vstack"], "");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn lex_keeps_comments() {
    let out = weft(&["lex", "-"], "# hi\ntext(\"a\")");
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Comment"), "{}", stdout(&out));
}

#[test]
fn parse_json_dumps_ast() {
    let out = weft(&["parse", "-", "--json"], "text(\"a\")");
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["MethodCall"]["method"], "text");
}

#[test]
fn check_reports_each_file() {
    let dir = std::env::temp_dir().join(format!("weft-check-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let good = dir.join("good.weft");
    let bad = dir.join("bad.weft");
    std::fs::write(&good, "text(\"fine\")").unwrap();
    std::fs::write(&bad, "vstack do\n  eval(\"1\")\nend").unwrap();

    let out = weft(
        &["check", good.to_str().unwrap(), bad.to_str().unwrap()],
        "",
    );
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(out.status.code(), Some(2));
    let stdout = stdout(&out);
    assert!(stdout.contains("ok    "), "{stdout}");
    assert!(stdout.contains("2 checked, 1 failed"), "{stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad.weft:2:3: error[E2001]"), "{stderr}");
}
