//! Common test utilities for ListTree contract and CLI tests.
//!
//! - `items`: build an owned item list from string literals
//! - `TestEnv`: isolated working and config directories plus a CLI runner

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub fn items(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Result of running the listtree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Isolated environment: a working directory and a config home
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        listtree_command(self.work_dir.path(), self.config_home.path())
    }

    /// Run with the given stdin
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        if let Some(mut pipe) = child.stdin.take() {
            // The binary may exit before reading (argument errors).
            let _ = pipe.write_all(stdin.as_bytes());
        }
        child.wait_with_output().unwrap().into()
    }
}

fn listtree_command(cwd: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_listtree"));
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env("TERM", "xterm-256color")
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env("APPDATA", config_home)
        .env_remove("RUST_LOG")
        .env_remove("LISTTREE_DIALECT")
        .env_remove("LISTTREE_ORIENTATION")
        .env_remove("LISTTREE_CHARSET")
        .env_remove("LISTTREE_DUPLICATES");
    cmd
}
