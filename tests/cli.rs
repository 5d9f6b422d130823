extern crate tempfile;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_settings(dir: &Path, seed: u64) -> std::path::PathBuf {
    let path = dir.join("settings.json");
    let json = format!(r#"{{"ASSETS_DIR": "{}", "SEED": {}, "LOG_LEVEL": "off"}}"#,
        dir.display(), seed);
    fs::write(&path, json).unwrap();
    path
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    let settings = write_settings(dir.path(), 17);
    Command::new(env!("CARGO_BIN_EXE_percolation"))
        .args(args)
        .env("PERCOLATION_SETTINGS", settings)
        .output()
        .unwrap()
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_string).collect()
}

#[test]
fn prints_four_statistics_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("column.txt"), "3\n1 2\n2 2\n3 2\n").unwrap();
    let out = run(&dir, &["column.txt", "4"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec![
        "Mean: 3",
        "Standard deviation: 0",
        "Confidence lo: 3",
        "Confidence hi: 3",
    ]);
}

#[test]
fn single_trial_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("one.txt"), "1\n").unwrap();
    let out = run(&dir, &["one.txt"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "Mean: 1");
    assert_eq!(lines[1], "Standard deviation: NaN");
}

#[test]
fn missing_file_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["nope.txt", "3"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_lines(&out), vec!["The file 'nope.txt' could not be found."]);
}

#[test]
fn rejects_non_positive_trial_count() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("one.txt"), "1\n").unwrap();
    for bad in &["0", "-2", "many"] {
        let out = run(&dir, &["one.txt", bad]);
        assert_eq!(out.status.code(), Some(2));
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn same_seed_reproduces_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sparse.txt"), "8\n1 1\n8 8\n").unwrap();
    let a = run(&dir, &["sparse.txt", "5"]);
    let b = run(&dir, &["sparse.txt", "5"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}
