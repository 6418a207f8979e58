//! Tests the linesplice binary end to end with assert_cmd.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPLACEMENT: &str = "         {activeTab === \"product-plan\" && <ProductPlanTab />}\n";

/// A 2000-line page with the product-plan block at lines 916..=1808 (1-based)
fn write_page(dir: &Path) -> (PathBuf, Vec<String>) {
    let lines: Vec<String> = (0..2000)
        .map(|i| match i {
            915 => "         {activeTab === \"product-plan\" && (\n".to_string(),
            1807 => "         )}\n".to_string(),
            _ => format!("  <Line n={{{}}} />\n", i),
        })
        .collect();

    let path = dir.join("page.tsx");
    fs::write(&path, lines.concat()).unwrap();
    (path, lines)
}

fn linesplice() -> Command {
    Command::cargo_bin("linesplice").unwrap()
}

#[test]
fn test_default_range_patch() {
    let dir = TempDir::new().unwrap();
    let (path, lines) = write_page(dir.path());

    linesplice()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File updated successfully!"))
        .stdout(predicate::str::contains("Removed lines: 893"))
        .stdout(predicate::str::contains("New total lines: 1108"));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let expected = format!(
        "{}{}{}",
        lines[..915].concat(),
        REPLACEMENT,
        lines[1808..].concat()
    );
    assert_eq!(String::from_utf8(bytes[3..].to_vec()).unwrap(), expected);
}

#[test]
fn test_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let (path, lines) = write_page(dir.path());

    linesplice()
        .arg("--file")
        .arg(&path)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("New total lines: 1108"));

    assert_eq!(fs::read_to_string(&path).unwrap(), lines.concat());
}

#[test]
fn test_strict_marker_mismatch_leaves_file() {
    let dir = TempDir::new().unwrap();
    let (path, lines) = write_page(dir.path());

    linesplice()
        .arg("--file")
        .arg(&path)
        .args(["--start", "900", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not match"));

    assert_eq!(fs::read_to_string(&path).unwrap(), lines.concat());
}

#[test]
fn test_marker_mismatch_warns_but_writes() {
    let dir = TempDir::new().unwrap();
    let (path, _) = write_page(dir.path());

    linesplice()
        .arg("--file")
        .arg(&path)
        .args(["--start", "900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed lines: 908"))
        .stderr(predicate::str::contains("boundary marker mismatch"));
}

#[test]
fn test_custom_range_and_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "a\nb\nc\nd\n").unwrap();

    linesplice()
        .arg("--file")
        .arg(&path)
        .args(["--start", "1", "--end", "3", "--line", "X"])
        .args(["--start-marker", "b", "--end-marker", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed lines: 2"))
        .stdout(predicate::str::contains("New total lines: 3"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "\u{feff}a\nX\nd\n");
}

#[test]
fn test_start_after_end_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "a\n").unwrap();

    linesplice()
        .arg("--file")
        .arg(&path)
        .args(["--start", "5", "--end", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after end line"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    linesplice()
        .arg("--file")
        .arg(dir.path().join("absent.tsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
