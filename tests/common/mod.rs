#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BASICS: &str = "# ASCII Art Basics\n\nUse plain box-drawing characters.\n";
pub const TABLES: &str = "# Tables\n\n| col | col |\n|-----|-----|\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = make_fixture_rules(tmp.path());
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("airules");
        cmd.env("AIRULES_ROOT", &self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        String::from_utf8(self.stdout_bytes(args)).expect("utf8 stdout")
    }

    pub fn stdout_bytes(&self, args: &[&str]) -> Vec<u8> {
        self.cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read fixture document")
    }

    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        fs::read(self.root.join(rel)).expect("read fixture document")
    }

    pub fn write_alias_file(&self, body: &str) {
        fs::create_dir_all(self.root.join(".airules")).expect("create config dir");
        fs::write(self.root.join(".airules/aliases.json"), body).expect("write alias file");
    }
}

fn make_fixture_rules(base: &Path) -> PathBuf {
    let root = base.join("rules");
    for dir in ["ascii-art", "coding", "testing", "ci-cd/workflows"] {
        fs::create_dir_all(root.join(dir)).expect("create fixture dir");
    }

    let docs = [
        ("README.md", "# Rules\n\nOverview of the collection.\n"),
        ("ascii-art/basics.md", BASICS),
        ("ascii-art/tables.md", TABLES),
        ("ascii-art/diagrams.md", "# Diagrams\n"),
        ("coding/style.md", "# Style\n"),
        ("coding/rust.md", "# Rust\n"),
        ("testing/patterns.md", "# Testing Patterns\n"),
        ("ci-cd/github-actions.md", "# GitHub Actions\n"),
        ("ci-cd/workflows/release.yml", "name: release\n"),
    ];
    for (rel, body) in docs {
        fs::write(root.join(rel), body).expect("write fixture document");
    }

    root
}
