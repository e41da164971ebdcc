//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding show files
pub struct Stage {
    dir: TempDir,
}

impl Stage {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a show file and return its path
    pub fn show(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

pub fn showhub() -> Cli {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_showhub"));
    cmd.env_remove("RUST_LOG");
    Cli { cmd }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstderr:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        Output::from(output)
    }

    pub fn fails(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        );
        Output::from(output)
    }
}

pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }
}
