//! Shared testing utilities for drivectl CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory wired to a mock
/// Drive server.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated working directory whose `drivectl.toml` points at
    /// `server_url` for both metadata and upload traffic.
    pub fn new(server_url: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let config = format!(
            r#"[api]
base_url = "{server_url}"
upload_url = "{server_url}"
page_size = 1000
timeout_secs = 5
"#
        );
        fs::write(work_dir.join("drivectl.toml"), config).expect("Failed to write test config");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `drivectl` binary within
    /// the working directory, with a test bearer token in the environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("drivectl").expect("Failed to locate drivectl binary");
        cmd.current_dir(&self.work_dir).env("DRIVE_ACCESS_TOKEN", "test-token");
        cmd
    }

    /// Write a fixture file into the working directory and return its path.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}
