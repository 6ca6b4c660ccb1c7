#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn wcal() -> Command {
    cargo_bin_cmd!("weekcal")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weekcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Add an event via the CLI and return the generated id parsed from stdout
pub fn add_event(db_path: &str, date: &str, start: &str, end: &str, title: &str) -> String {
    let output = wcal()
        .args(["--db", db_path, "add", date, start, end, title])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("id: "))
        .expect("add did not print an id line")
        .trim()
        .to_string()
}
