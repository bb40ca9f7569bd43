use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pocr");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_entries(&self, name: &str, numbers: &[&str]) -> PathBuf {
        self.write_raw(name, &entries_document(numbers))
    }

    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }
}

/// Renders each digit string as a 3-row glyph block followed by a blank
/// separator row. `?` renders an all-blank (undecodable) cell.
pub fn entries_document(numbers: &[&str]) -> String {
    let mut out = String::new();
    for number in numbers {
        for row in glyph_rows(number) {
            out.push_str(&row);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn glyph_rows(digits: &str) -> [String; 3] {
    let mut rows = [String::new(), String::new(), String::new()];
    for c in digits.chars() {
        for (row, part) in rows.iter_mut().zip(glyph(c).iter()) {
            row.push_str(part);
        }
    }
    rows
}

fn glyph(c: char) -> [&'static str; 3] {
    match c {
        '0' => [" _ ", "| |", "|_|"],
        '1' => ["   ", "  |", "  |"],
        '2' => [" _ ", " _|", "|_ "],
        '3' => [" _ ", " _|", " _|"],
        '4' => ["   ", "|_|", "  |"],
        '5' => [" _ ", "|_ ", " _|"],
        '6' => [" _ ", "|_ ", "|_|"],
        '7' => [" _ ", "  |", "  |"],
        '8' => [" _ ", "|_|", "|_|"],
        '9' => [" _ ", "|_|", " _|"],
        _ => ["   ", "   ", "   "],
    }
}
