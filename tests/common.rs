#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use prodtracker::models::ProductionRecord;
use prodtracker::ui::Console;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Binary under test with a throwaway home, so no local config is picked up
pub fn pt() -> Command {
    let mut cmd = cargo_bin_cmd!("prodtracker");
    cmd.env("HOME", test_home()).env("APPDATA", test_home());
    cmd
}

/// Empty directory standing in for the user's home
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("prodtracker_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique data file path inside the system temp dir and remove any existing file
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodtracker.txt", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodtracker_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Data file with two shifts on 2025-09-01 and one on 2025-09-02
pub fn write_sample_data(data_path: &str) {
    fs::write(
        data_path,
        "2025-09-01,Morning,100,90\n2025-09-01,Evening,80,90\n2025-09-02,Night,40,50\n",
    )
    .expect("write sample data");
}

pub fn sample_records() -> Vec<ProductionRecord> {
    vec![
        ProductionRecord::new("2025-09-01", "Morning", 100, 90),
        ProductionRecord::new("2025-09-01", "Evening", 80, 90),
        ProductionRecord::new("2025-09-02", "Night", 40, 50),
    ]
}

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed with `input`, capturing everything written
pub fn scripted_console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn console_output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf8 output")
}
