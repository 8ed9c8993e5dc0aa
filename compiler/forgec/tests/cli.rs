//! End-to-end runs of the `forgec` binary.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::process::{Command, Output};

fn forgec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_forgec"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_explain_prints_docs() {
    let output = forgec(&["explain", "F2001"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# F2001"), "{stdout}");
}

#[test]
fn test_explain_unknown_code_fails() {
    let output = forgec(&["explain", "X9999"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown error code: X9999"));
}

#[test]
fn test_duplicate_id_reported_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("lib.rs");
    fs::write(
        &root,
        r#"
pub trait Meal {}

#[factory(id = "Pizza", ty = Meal)]
pub struct Margherita;
impl Margherita { pub fn new() -> Self { Margherita } }
impl Meal for Margherita {}

#[factory(id = "Pizza", ty = Meal)]
pub struct Calzone;
impl Calzone { pub fn new() -> Self { Calzone } }
impl Meal for Calzone {}
"#,
    )
    .unwrap();
    let out_dir = dir.path().join("gen");

    let output = forgec(&[
        "generate",
        root.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.contains(r#""code":"F2001""#), "{stderr}");
    assert!(!out_dir.join("crate").join("meal_factory.rs").exists());
}

#[test]
fn test_check_clean_crate() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("lib.rs");
    fs::write(&root, "pub trait Meal {}\n").unwrap();

    let output = forgec(&["check", root.to_str().unwrap(), "--color", "never"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
