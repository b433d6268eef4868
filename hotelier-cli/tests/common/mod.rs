//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary hotel configuration
//! - Command builder helpers isolated from the caller's environment
//! - Script fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A two-room hotel with one guest.
#[allow(dead_code)]
pub const HOTEL_YAML: &str = r"
name: Test Inn
rooms:
  - { id: 101, category: single, rate: 100 }
  - { id: 102, category: suite, rate: 250.50 }
guests:
  - { id: g1, name: Ada Lovelace }
";

/// Test environment with an isolated working and home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as both working directory and `HOME`
/// - A `hotelier.yaml` written there unless created with [`TestEnv::empty`]
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a test environment containing [`HOTEL_YAML`].
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_file("hotelier.yaml", HOTEL_YAML);
        env
    }

    /// Create a test environment with no configuration files.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the hotelier binary.
    ///
    /// The command runs in the temporary directory with `HOME` pointed at it
    /// and every `HOTELIER_*` variable cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotelier").expect("Failed to find hotelier binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in [
            "HOTELIER_CONFIG",
            "HOTELIER_NAME",
            "HOTELIER_RESERVATION_ID_PREFIX",
            "HOTELIER_CURRENCY",
            "HOTELIER_OUTPUT_FORMAT",
            "HOTELIER_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
