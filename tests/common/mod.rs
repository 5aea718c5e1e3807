//! Shared harness for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Address nothing listens on, so commands that would reach the network
/// fail fast with a connection error instead of touching a real service.
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:9";

/// Isolated test environment with a temporary configuration directory.
///
/// Every command is pointed at the temp config dir (so sessions never
/// leak between tests or into the developer's real config) and at an
/// unreachable server (so no test ever performs real network I/O).
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    config_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    /// Returns the configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path where the session file would be stored.
    pub fn session_path(&self) -> PathBuf {
        self.config_dir.join("session")
    }

    /// Creates a `jot` command configured for this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("jot").expect("binary should build");
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--server")
            .arg(UNREACHABLE_SERVER);
        cmd
    }

    /// Signs in as the given email, asserting success.
    pub fn login(&self, email: &str) {
        self.cmd().args(["login", email]).assert().success();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
